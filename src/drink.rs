//! Drink records
//!
//! Typed records built from lookup service responses, plus the recipe
//! projection used by the details panel.

mod normalize;
mod recipe;

pub use normalize::normalize_drinks;
pub use recipe::recipe_lines;

/// Number of measure/ingredient slots a lookup record carries
pub const PORTION_SLOTS: usize = 15;

/// One measure/ingredient slot; empty strings mean absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Portion {
    pub measure: String,
    pub ingredient: String,
}

impl Portion {
    pub fn new(measure: &str, ingredient: &str) -> Self {
        Self {
            measure: measure.to_string(),
            ingredient: ingredient.to_string(),
        }
    }
}

/// A drink as returned by the lookup service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drink {
    pub id: String,
    pub name: String,
    pub thumb: String,
    pub instructions: String,
    pub alcoholic: String,
    pub category: String,
    pub portions: [Portion; PORTION_SLOTS],
}

impl Drink {
    /// Create a drink with the given id and name and no portions
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Fill portion slots from the front
    pub fn with_portions(mut self, portions: &[(&str, &str)]) -> Self {
        for (slot, (measure, ingredient)) in self.portions.iter_mut().zip(portions) {
            *slot = Portion::new(measure, ingredient);
        }
        self
    }

    /// Display label in the option list
    pub fn label(&self) -> String {
        self.name.clone()
    }
}
