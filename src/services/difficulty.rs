use thiserror::Error;

use crate::models::Difficulty;

/// Error types for difficulty classification
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("cooking time must be non-negative, got {0}")]
    NegativeCookingTime(i64),
    #[error("ingredient count must be non-negative, got {0}")]
    NegativeIngredientCount(i64),
}

/// Cooking times below this many minutes count as quick
const QUICK_COOKING_TIME: i64 = 10;

/// Ingredient counts below this count as few
const FEW_INGREDIENTS: i64 = 4;

/// Classifies a recipe's difficulty from its cooking time (minutes) and
/// ingredient count.
///
/// Quick recipes with few ingredients are easy, long recipes with many
/// ingredients are hard, and the mixed quadrants are medium. Negative
/// inputs are rejected rather than clamped.
pub fn classify(cooking_time: i64, ingredient_count: i64) -> Result<Difficulty, ClassifyError> {
    if cooking_time < 0 {
        return Err(ClassifyError::NegativeCookingTime(cooking_time));
    }
    if ingredient_count < 0 {
        return Err(ClassifyError::NegativeIngredientCount(ingredient_count));
    }

    let quick = cooking_time < QUICK_COOKING_TIME;
    let few = ingredient_count < FEW_INGREDIENTS;

    Ok(match (quick, few) {
        (true, true) => Difficulty::Easy,
        (true, false) | (false, true) => Difficulty::Medium,
        (false, false) => Difficulty::Hard,
    })
}
