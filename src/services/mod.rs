pub mod aggregate;
pub mod difficulty;
pub mod filter;
pub mod ingredients;

pub use aggregate::{aggregate, AggregateSummary, RankedRecipe};
pub use difficulty::{classify, ClassifyError};
pub use filter::{build, FilterCriteria, RecipePredicate};
pub use ingredients::{parse, ParsedIngredients};
