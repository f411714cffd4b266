use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's bookmark of a recipe.
/// The (user, recipe) pair is unique; adding twice is a no-op.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Favourite {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
}
