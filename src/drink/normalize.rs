use serde_json::{Map, Value};

use super::{Drink, PORTION_SLOTS, Portion};

/// Wire field names for each portion slot, as (measure, ingredient)
const PORTION_FIELDS: [(&str, &str); PORTION_SLOTS] = [
    ("strMeasure1", "strIngredient1"),
    ("strMeasure2", "strIngredient2"),
    ("strMeasure3", "strIngredient3"),
    ("strMeasure4", "strIngredient4"),
    ("strMeasure5", "strIngredient5"),
    ("strMeasure6", "strIngredient6"),
    ("strMeasure7", "strIngredient7"),
    ("strMeasure8", "strIngredient8"),
    ("strMeasure9", "strIngredient9"),
    ("strMeasure10", "strIngredient10"),
    ("strMeasure11", "strIngredient11"),
    ("strMeasure12", "strIngredient12"),
    ("strMeasure13", "strIngredient13"),
    ("strMeasure14", "strIngredient14"),
    ("strMeasure15", "strIngredient15"),
];

/// Normalize a lookup response body into an option list
///
/// - no body or a `null` body: `None` (nothing loaded yet)
/// - `drinks` missing, `null` or not an array: `Some(vec![])`
/// - otherwise one `Drink` per object entry, in response order
///
/// Never fails: entries that are not objects are skipped and missing or
/// non-string fields become empty strings.
pub fn normalize_drinks(body: Option<&Value>) -> Option<Vec<Drink>> {
    let body = body.filter(|b| !b.is_null())?;

    let Some(entries) = body.get("drinks").and_then(Value::as_array) else {
        return Some(Vec::new());
    };

    let drinks = entries
        .iter()
        .filter_map(|entry| match entry.as_object() {
            Some(record) => Some(drink_from_record(record)),
            None => {
                log::debug!("Skipping non-object drink entry: {}", entry);
                None
            }
        })
        .collect();

    Some(drinks)
}

fn drink_from_record(record: &Map<String, Value>) -> Drink {
    let mut drink = Drink {
        id: string_field(record, "idDrink"),
        name: string_field(record, "strDrink"),
        thumb: string_field(record, "strDrinkThumb"),
        instructions: string_field(record, "strInstructions"),
        alcoholic: string_field(record, "strAlcoholic"),
        category: string_field(record, "strCategory"),
        ..Drink::default()
    };

    for (slot, (measure, ingredient)) in drink.portions.iter_mut().zip(PORTION_FIELDS) {
        *slot = Portion {
            measure: string_field(record, measure),
            ingredient: string_field(record, ingredient),
        };
    }

    drink
}

/// Read a string field; ids sometimes arrive as numbers
fn string_field(record: &Map<String, Value>, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod normalize_tests;
