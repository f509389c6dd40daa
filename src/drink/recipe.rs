use super::Drink;

/// Recipe lines for the details panel
///
/// Walks the portion slots in order and stops at the first slot without an
/// ingredient. Each line is `"<measure> <ingredient>"` with surrounding
/// whitespace trimmed, so a missing measure leaves just the ingredient.
pub fn recipe_lines(drink: &Drink) -> Vec<String> {
    drink
        .portions
        .iter()
        .take_while(|portion| !portion.ingredient.is_empty())
        .map(|portion| {
            format!("{} {}", portion.measure.trim(), portion.ingredient.trim())
                .trim()
                .to_string()
        })
        .collect()
}
