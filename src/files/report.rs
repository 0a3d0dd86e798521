//! Plain-text recipe report rendering.

use crate::store::Recipe;

/// Renders every recipe into one text document.
///
/// Each recipe gets its own section; sections are separated by a blank line.
/// No recipes means an empty string.
pub fn render_report(recipes: &[Recipe]) -> String {
    let mut out = String::new();

    for (index, recipe) in recipes.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        render_recipe(&mut out, recipe);
    }

    out
}

fn render_recipe(out: &mut String, recipe: &Recipe) {
    out.push_str(&format!("Recipe #{}: {}\n", recipe.id, recipe.name));

    out.push_str("\nIngredients:\n");
    if recipe.ingredients.is_empty() {
        out.push_str("  (none)\n");
    }
    for ingredient in &recipe.ingredients {
        out.push_str(&format!("  - {}: {}\n", ingredient.name, ingredient.quantity));
    }

    out.push_str("\nCooking steps:\n");
    if recipe.steps.is_empty() {
        out.push_str("  (none)\n");
    }
    for (number, step) in recipe.steps.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", number + 1, step));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        assert!(render_report(&[]).is_empty());
    }

    #[test]
    fn test_render_single_recipe() {
        let mut recipe = Recipe::new("Omelette")
            .with_ingredient("eggs", "3 pcs")
            .with_ingredient("butter", "10 g")
            .with_step("Beat the eggs")
            .with_step("Cook in butter");
        recipe.id = 4;

        let expected = "Recipe #4: Omelette\n\
                        \n\
                        Ingredients:\n\
                        \x20 - eggs: 3 pcs\n\
                        \x20 - butter: 10 g\n\
                        \n\
                        Cooking steps:\n\
                        \x20 1. Beat the eggs\n\
                        \x20 2. Cook in butter\n";
        assert_eq!(render_report(&[recipe]), expected);
    }

    #[test]
    fn test_render_sections_in_order() {
        let mut first = Recipe::new("First");
        first.id = 1;
        let mut second = Recipe::new("Second");
        second.id = 2;

        let report = render_report(&[first, second]);
        let first_at = report.find("Recipe #1: First").unwrap();
        let second_at = report.find("Recipe #2: Second").unwrap();
        assert!(first_at < second_at);
        assert!(report.contains("(none)\n\nRecipe #2"));
    }
}
