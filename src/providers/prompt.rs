use crate::model::RecipeRecord;
use crate::projection::project_ingredients_text;

/// Instruction placed before the recipe; `{theme}` is replaced.
pub const REMIX_INSTRUCTION: &str = "Please remix this recipe with a {theme} theme. \
Make it short, fun, creative, and totally doable. \
Highlight any changed ingredients or cooking instructions:";

/// Build the user prompt from the ingredient summary and the instructions.
pub fn build_remix_prompt(record: &RecipeRecord, theme: &str) -> String {
    let recipe_text = format!(
        "Recipe: {}\nIngredients: {}\nInstructions: {}",
        record.name,
        project_ingredients_text(record),
        record.instructions
    );

    format!(
        "{}\n\n{}",
        REMIX_INSTRUCTION.replace("{theme}", theme.trim()),
        recipe_text.trim()
    )
}
