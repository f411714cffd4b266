use std::collections::HashMap;

use serde::Serialize;

use crate::models::{Difficulty, MealType, Recipe};

/// One entry in the cooking-time ranking
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RankedRecipe {
    pub name: String,
    pub cooking_time: u32,
}

/// Summary statistics over a filtered recipe set, feeding the results
/// table and charts.
///
/// Count maps only carry keys that occur in the input; an empty input
/// yields empty maps and an empty ranking.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AggregateSummary {
    pub meal_type_counts: HashMap<MealType, usize>,
    pub difficulty_counts: HashMap<Difficulty, usize>,
    pub cooking_time_ranking: Vec<RankedRecipe>,
}

/// Computes summary statistics over a set of recipes.
///
/// The ranking is sorted ascending by cooking time; ties keep the
/// input's relative order.
pub fn aggregate(recipes: &[Recipe]) -> AggregateSummary {
    let mut meal_type_counts: HashMap<MealType, usize> = HashMap::new();
    let mut difficulty_counts: HashMap<Difficulty, usize> = HashMap::new();

    for recipe in recipes {
        *meal_type_counts.entry(recipe.meal_type).or_insert(0) += 1;
        *difficulty_counts.entry(recipe.difficulty).or_insert(0) += 1;
    }

    let mut cooking_time_ranking: Vec<RankedRecipe> = recipes
        .iter()
        .map(|recipe| RankedRecipe {
            name: recipe.name.clone(),
            cooking_time: recipe.cooking_time,
        })
        .collect();
    // Vec::sort_by_key is stable, so ties keep their input order
    cooking_time_ranking.sort_by_key(|entry| entry.cooking_time);

    AggregateSummary {
        meal_type_counts,
        difficulty_counts,
        cooking_time_ranking,
    }
}
