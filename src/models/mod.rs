pub mod favourite;
pub mod recipe;

pub use favourite::Favourite;
pub use recipe::{Difficulty, MealType, Recipe};
