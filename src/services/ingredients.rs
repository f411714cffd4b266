/// Ingredients parsed from a recipe's comma-separated free-text field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedIngredients {
    /// Number of non-empty ingredients
    pub count: usize,
    /// Trimmed ingredient names in their original order
    pub items: Vec<String>,
}

/// Splits a comma-separated ingredient string into trimmed, non-empty items.
///
/// Empty or whitespace-only input yields an empty list, never an error.
pub fn parse(raw: &str) -> ParsedIngredients {
    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    ParsedIngredients {
        count: items.len(),
        items,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let parsed = parse("");
        assert_eq!(parsed.count, 0);
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn test_whitespace_only_input() {
        let parsed = parse("   \t ");
        assert_eq!(parsed.count, 0);
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn test_trims_and_drops_empty_tokens() {
        let parsed = parse(" a , b ,, c ");
        assert_eq!(parsed.count, 3);
        assert_eq!(parsed.items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_preserves_order() {
        let parsed = parse("pasta, tomato, garlic");
        assert_eq!(parsed.items, vec!["pasta", "tomato", "garlic"]);
    }

    #[test]
    fn test_trailing_comma() {
        let parsed = parse("flour, sugar,");
        assert_eq!(parsed.count, 2);
        assert_eq!(parsed.items, vec!["flour", "sugar"]);
    }

    #[test]
    fn test_inner_whitespace_kept() {
        let parsed = parse("olive oil, sea salt");
        assert_eq!(parsed.items, vec!["olive oil", "sea salt"]);
    }
}
