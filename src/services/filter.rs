use serde::Deserialize;

use crate::models::{Difficulty, MealType, Recipe};

/// Raw values on a categorical filter field meaning "no constraint"
const ANY_SENTINELS: [&str; 3] = ["", "any", "all"];

/// Optional search criteria, typically extracted from query parameters.
///
/// Every field is independently optional; an absent field places no
/// constraint on that axis.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring on the recipe name
    pub title: Option<String>,
    /// Case-insensitive substring on the raw ingredients text
    pub ingredient: Option<String>,
    /// Meal type as submitted; "any"/"all"/empty means no constraint
    pub meal_type: Option<String>,
    /// Difficulty as submitted; same sentinel handling as meal_type
    pub difficulty: Option<String>,
    /// Upper bound on cooking time in minutes
    pub max_cooking_time: Option<u32>,
}

/// A categorical clause compiled from a raw filter value.
///
/// An unrecognized category matches nothing rather than failing the
/// request, so filtering on an unknown value is conservative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CategoryClause<T> {
    Exact(T),
    Unmatchable,
}

impl<T: PartialEq> CategoryClause<T> {
    fn matches(&self, value: &T) -> bool {
        match self {
            CategoryClause::Exact(expected) => expected == value,
            CategoryClause::Unmatchable => false,
        }
    }
}

/// A compiled predicate over recipes.
///
/// Unset criteria contribute no clause at all; a predicate built from
/// empty criteria matches every recipe.
#[derive(Debug, Clone)]
pub struct RecipePredicate {
    title: Option<String>,
    ingredient: Option<String>,
    meal_type: Option<CategoryClause<MealType>>,
    difficulty: Option<CategoryClause<Difficulty>>,
    max_cooking_time: Option<u32>,
}

/// Compiles filter criteria into a single conjunctive predicate.
///
/// Substring values are lowercased once here so per-recipe evaluation
/// only lowercases the recipe side.
pub fn build(criteria: &FilterCriteria) -> RecipePredicate {
    RecipePredicate {
        title: substring_clause(criteria.title.as_deref()),
        ingredient: substring_clause(criteria.ingredient.as_deref()),
        meal_type: category_clause(criteria.meal_type.as_deref(), MealType::from_str_opt),
        difficulty: category_clause(criteria.difficulty.as_deref(), Difficulty::from_str_opt),
        max_cooking_time: criteria.max_cooking_time,
    }
}

fn substring_clause(raw: Option<&str>) -> Option<String> {
    let needle = raw?.trim();
    if needle.is_empty() {
        return None;
    }
    Some(needle.to_lowercase())
}

fn category_clause<T>(
    raw: Option<&str>,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<CategoryClause<T>> {
    let value = raw?.trim();
    if ANY_SENTINELS.contains(&value.to_ascii_lowercase().as_str()) {
        return None;
    }
    Some(match parse(value) {
        Some(parsed) => CategoryClause::Exact(parsed),
        None => CategoryClause::Unmatchable,
    })
}

impl RecipePredicate {
    /// Tests whether a recipe satisfies every clause.
    ///
    /// Substring clauses run before numeric comparisons.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(title) = &self.title {
            if !recipe.name.to_lowercase().contains(title.as_str()) {
                return false;
            }
        }

        if let Some(ingredient) = &self.ingredient {
            if !recipe.ingredients.to_lowercase().contains(ingredient.as_str()) {
                return false;
            }
        }

        if let Some(clause) = &self.meal_type {
            if !clause.matches(&recipe.meal_type) {
                return false;
            }
        }

        if let Some(clause) = &self.difficulty {
            if !clause.matches(&recipe.difficulty) {
                return false;
            }
        }

        if let Some(max) = self.max_cooking_time {
            if recipe.cooking_time > max {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn recipe(name: &str, ingredients: &str, cooking_time: u32, meal_type: MealType) -> Recipe {
        let parsed = crate::services::ingredients::parse(ingredients);
        let difficulty =
            crate::services::difficulty::classify(i64::from(cooking_time), parsed.count as i64)
                .unwrap();
        Recipe {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: String::new(),
            instructions: String::new(),
            ingredients: ingredients.to_string(),
            prep_time: 5,
            cooking_time,
            difficulty,
            meal_type,
            owner: None,
            created_at: Utc::now(),
        }
    }

    fn test_collection() -> Vec<Recipe> {
        vec![
            recipe("Pasta Carbonara", "pasta, egg, bacon, parmesan", 20, MealType::Dinner),
            recipe("Green Salad", "lettuce, tomato", 5, MealType::Lunch),
            recipe("Pancakes", "flour, egg, milk, butter", 15, MealType::Breakfast),
            recipe("Banana Smoothie", "banana, milk", 3, MealType::Drink),
        ]
    }

    fn apply<'a>(predicate: &RecipePredicate, recipes: &'a [Recipe]) -> Vec<&'a Recipe> {
        recipes.iter().filter(|r| predicate.matches(r)).collect()
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let recipes = test_collection();
        let predicate = build(&FilterCriteria::default());
        assert_eq!(apply(&predicate, &recipes).len(), recipes.len());
    }

    #[test]
    fn test_title_substring_is_case_insensitive() {
        let recipes = test_collection();
        let predicate = build(&FilterCriteria {
            title: Some("PASTA".to_string()),
            ..FilterCriteria::default()
        });
        let matched = apply(&predicate, &recipes);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Pasta Carbonara");
    }

    #[test]
    fn test_ingredient_substring() {
        let recipes = test_collection();
        let predicate = build(&FilterCriteria {
            ingredient: Some("egg".to_string()),
            ..FilterCriteria::default()
        });
        let matched = apply(&predicate, &recipes);
        assert_eq!(matched.len(), 2);
    }

    #[test]
    fn test_meal_type_exact_match() {
        let recipes = test_collection();
        let predicate = build(&FilterCriteria {
            meal_type: Some("dinner".to_string()),
            ..FilterCriteria::default()
        });
        let matched = apply(&predicate, &recipes);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].meal_type, MealType::Dinner);
    }

    #[test]
    fn test_meal_type_sentinels_mean_no_constraint() {
        let recipes = test_collection();
        for sentinel in ["", "any", "all", "All"] {
            let predicate = build(&FilterCriteria {
                meal_type: Some(sentinel.to_string()),
                ..FilterCriteria::default()
            });
            assert_eq!(apply(&predicate, &recipes).len(), recipes.len());
        }
    }

    #[test]
    fn test_unknown_meal_type_matches_nothing() {
        let recipes = test_collection();
        let predicate = build(&FilterCriteria {
            meal_type: Some("brunch".to_string()),
            ..FilterCriteria::default()
        });
        assert!(apply(&predicate, &recipes).is_empty());
    }

    #[test]
    fn test_unknown_difficulty_matches_nothing() {
        let recipes = test_collection();
        let predicate = build(&FilterCriteria {
            difficulty: Some("intermediate".to_string()),
            ..FilterCriteria::default()
        });
        assert!(apply(&predicate, &recipes).is_empty());
    }

    #[test]
    fn test_difficulty_matches_derived_field() {
        let recipes = test_collection();
        let predicate = build(&FilterCriteria {
            difficulty: Some("hard".to_string()),
            ..FilterCriteria::default()
        });
        let matched = apply(&predicate, &recipes);
        // Carbonara and Pancakes: long cooking time, four ingredients each
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|r| r.difficulty == Difficulty::Hard));
    }

    #[test]
    fn test_max_cooking_time_is_inclusive() {
        let recipes = test_collection();
        let predicate = build(&FilterCriteria {
            max_cooking_time: Some(5),
            ..FilterCriteria::default()
        });
        let matched = apply(&predicate, &recipes);
        assert_eq!(matched.len(), 2);
        assert!(matched.iter().all(|r| r.cooking_time <= 5));
    }

    #[test]
    fn test_clauses_combine_conjunctively() {
        let recipes = test_collection();
        let predicate = build(&FilterCriteria {
            ingredient: Some("egg".to_string()),
            max_cooking_time: Some(15),
            ..FilterCriteria::default()
        });
        let matched = apply(&predicate, &recipes);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Pancakes");
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let recipes = test_collection();
        let criteria = FilterCriteria {
            ingredient: Some("milk".to_string()),
            max_cooking_time: Some(30),
            ..FilterCriteria::default()
        };
        let predicate = build(&criteria);

        let once: Vec<Recipe> = recipes
            .iter()
            .filter(|r| predicate.matches(r))
            .cloned()
            .collect();
        let twice: Vec<Recipe> = once
            .iter()
            .filter(|r| build(&criteria).matches(r))
            .cloned()
            .collect();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_whitespace_only_substring_is_no_constraint() {
        let recipes = test_collection();
        let predicate = build(&FilterCriteria {
            title: Some("   ".to_string()),
            ..FilterCriteria::default()
        });
        assert_eq!(apply(&predicate, &recipes).len(), recipes.len());
    }
}
