//! Display-ready views of a [`RecipeRecord`].
//!
//! Nothing here produces markup; escaping belongs to whatever renders the
//! view.

use serde::Serialize;

use crate::model::{Ingredient, RecipeRecord, MAX_INGREDIENT_SLOTS};

/// Everything a view needs to show one recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeView {
    pub name: String,
    pub image_url: String,
    /// One display line per non-blank ingredient slot
    pub ingredients: Vec<String>,
    /// Instruction text split at line breaks, empty segments kept
    pub instructions: Vec<String>,
}

impl From<&RecipeRecord> for RecipeView {
    fn from(record: &RecipeRecord) -> Self {
        RecipeView {
            name: record.name.clone(),
            image_url: record.image_url.clone(),
            ingredients: project_ingredients(record),
            instructions: instruction_segments(&record.instructions),
        }
    }
}

fn display_line(ingredient: &Ingredient) -> Option<String> {
    if ingredient.name.trim().is_empty() {
        return None;
    }
    if ingredient.measure.trim().is_empty() {
        Some(ingredient.name.clone())
    } else {
        Some(format!("{} {}", ingredient.measure, ingredient.name))
    }
}

/// Ingredient display lines in slot order, blank names dropped
pub fn project_ingredients(record: &RecipeRecord) -> Vec<String> {
    record
        .ingredients
        .iter()
        .take(MAX_INGREDIENT_SLOTS)
        .filter_map(display_line)
        .collect()
}

/// Same lines joined with ", " for use in prompts
pub fn project_ingredients_text(record: &RecipeRecord) -> String {
    project_ingredients(record).join(", ")
}

/// Split instructions on `\n` or `\r\n`
pub fn instruction_segments(instructions: &str) -> Vec<String> {
    if instructions.is_empty() {
        return Vec::new();
    }
    instructions
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slots: &[(&str, &str)]) -> RecipeRecord {
        RecipeRecord {
            name: "Test".to_string(),
            ingredients: slots
                .iter()
                .map(|(name, measure)| Ingredient::new(*name, *measure))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_measure_prefixes_name() {
        let r = record(&[("Beef", "2 lb"), ("Onion", "1")]);
        assert_eq!(project_ingredients(&r), vec!["2 lb Beef", "1 Onion"]);
    }

    #[test]
    fn test_blank_measure_renders_name_only() {
        let r = record(&[("Salt", ""), ("Pepper", "   ")]);
        assert_eq!(project_ingredients(&r), vec!["Salt", "Pepper"]);
    }

    #[test]
    fn test_blank_name_dropped_regardless_of_measure() {
        let r = record(&[("", "1 cup"), ("  ", "2 tbsp"), ("\t", ""), ("Rice", "1 cup")]);
        assert_eq!(project_ingredients(&r), vec!["1 cup Rice"]);
    }

    #[test]
    fn test_order_and_count_follow_slots() {
        let slots: Vec<(String, String)> = (1..=20)
            .map(|i| {
                let name = if i % 3 == 0 { " ".to_string() } else { format!("item{}", i) };
                (name, String::new())
            })
            .collect();
        let refs: Vec<(&str, &str)> = slots.iter().map(|(n, m)| (n.as_str(), m.as_str())).collect();
        let lines = project_ingredients(&record(&refs));

        let expected: Vec<String> = (1..=20)
            .filter(|i| i % 3 != 0)
            .map(|i| format!("item{}", i))
            .collect();
        assert_eq!(lines, expected);
        assert!(lines.len() <= MAX_INGREDIENT_SLOTS);
    }

    #[test]
    fn test_projection_never_exceeds_slot_bound() {
        let slots: Vec<(&str, &str)> = std::iter::repeat(("Egg", "1")).take(30).collect();
        assert_eq!(project_ingredients(&record(&slots)).len(), MAX_INGREDIENT_SLOTS);
    }

    #[test]
    fn test_ingredients_text_joins_with_comma() {
        let r = record(&[("Beef", "2 lb"), ("", "x"), ("Salt", "")]);
        assert_eq!(project_ingredients_text(&r), "2 lb Beef, Salt");
        assert_eq!(project_ingredients_text(&record(&[])), "");
    }

    #[test]
    fn test_instruction_segments() {
        assert_eq!(instruction_segments("Cook.\nServe."), vec!["Cook.", "Serve."]);
        assert_eq!(instruction_segments("A\r\nB\r\n\r\nC"), vec!["A", "B", "", "C"]);
        assert!(instruction_segments("").is_empty());
    }

    #[test]
    fn test_stew_end_to_end_view() {
        let r = RecipeRecord {
            name: "Stew".to_string(),
            image_url: String::new(),
            instructions: "Cook.\nServe.".to_string(),
            ingredients: vec![Ingredient::new("Beef", "2 lb"), Ingredient::new("  ", "")],
        };
        let view = RecipeView::from(&r);
        assert_eq!(view.name, "Stew");
        assert_eq!(view.ingredients, vec!["2 lb Beef"]);
        assert_eq!(view.instructions, vec!["Cook.", "Serve."]);
    }
}
