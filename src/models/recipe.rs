use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Categorical tag for when a recipe is typically served
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Drink,
    Dessert,
}

impl MealType {
    /// Parses a meal type from its lowercase wire form, `None` if unrecognized
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "snack" => Some(Self::Snack),
            "drink" => Some(Self::Drink),
            "dessert" => Some(Self::Dessert),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
            Self::Drink => "drink",
            Self::Dessert => "dessert",
        }
    }
}

impl Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Difficulty label derived from cooking time and ingredient count.
/// Never accepted from clients; recomputed before every write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Parses a difficulty from its lowercase wire form, `None` if unrecognized
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recipe shared on the platform
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recipe {
    /// Unique identifier for the recipe
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Short description of the recipe
    pub description: String,
    /// Step-by-step cooking instructions
    pub instructions: String,
    /// Comma-separated free text; parsed on demand
    pub ingredients: String,
    /// Preparation time in minutes
    pub prep_time: u32,
    /// Cooking time in minutes
    pub cooking_time: u32,
    /// Derived from cooking time and ingredient count
    pub difficulty: Difficulty,
    pub meal_type: MealType,
    /// User who created the recipe, if known
    pub owner: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_serde_lowercase() {
        let json = serde_json::to_string(&MealType::Breakfast).unwrap();
        assert_eq!(json, "\"breakfast\"");

        let deserialized: MealType = serde_json::from_str("\"dessert\"").unwrap();
        assert_eq!(deserialized, MealType::Dessert);
    }

    #[test]
    fn test_meal_type_from_str_opt() {
        assert_eq!(MealType::from_str_opt("dinner"), Some(MealType::Dinner));
        assert_eq!(MealType::from_str_opt("DINNER"), Some(MealType::Dinner));
        assert_eq!(MealType::from_str_opt("brunch"), None);
    }

    #[test]
    fn test_difficulty_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");

        let deserialized: Difficulty = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(deserialized, Difficulty::Hard);
    }

    #[test]
    fn test_difficulty_from_str_opt() {
        assert_eq!(Difficulty::from_str_opt("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str_opt("Easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str_opt("intermediate"), None);
    }

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(MealType::Snack.to_string(), "snack");
        assert_eq!(Difficulty::Hard.to_string(), "hard");
    }
}
