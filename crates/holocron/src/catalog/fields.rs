//! Per-category field sets
//!
//! Which fields are shown for an item depends on its category: a short
//! summary on list cards and two labelled sections on the detail view.

use super::types::{CatalogItem, Category};

/// Text shown for a field the item does not carry
pub const UNKNOWN: &str = "unknown";

/// A labelled field on the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in the API payload
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    /// Appended to present values (e.g. `" cm"`)
    pub suffix: &'static str,
}

impl FieldSpec {
    const fn new(key: &'static str, label: &'static str, suffix: &'static str) -> Self {
        Self { key, label, suffix }
    }

    /// Render this field's value for an item
    pub fn render(&self, item: &CatalogItem) -> String {
        match item.field(self.key) {
            Some(value) => format!("{value}{}", self.suffix),
            None => UNKNOWN.to_string(),
        }
    }
}

/// A titled group of fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub fields: &'static [FieldSpec],
}

static PEOPLE: [Section; 2] = [
    Section {
        title: "Personal Information",
        fields: &[
            FieldSpec::new("birth_year", "Birth Year", ""),
            FieldSpec::new("gender", "Gender", ""),
            FieldSpec::new("height", "Height", " cm"),
            FieldSpec::new("mass", "Mass", " kg"),
        ],
    },
    Section {
        title: "Physical Appearance",
        fields: &[
            FieldSpec::new("hair_color", "Hair Color", ""),
            FieldSpec::new("eye_color", "Eye Color", ""),
            FieldSpec::new("skin_color", "Skin Color", ""),
        ],
    },
];

static VEHICLES: [Section; 2] = [
    Section {
        title: "Technical Specifications",
        fields: &[
            FieldSpec::new("model", "Model", ""),
            FieldSpec::new("vehicle_class", "Class", ""),
            FieldSpec::new("manufacturer", "Manufacturer", ""),
            FieldSpec::new("length", "Length", " m"),
        ],
    },
    Section {
        title: "Performance & Capacity",
        fields: &[
            FieldSpec::new("max_atmosphering_speed", "Max Speed", ""),
            FieldSpec::new("crew", "Crew", ""),
            FieldSpec::new("passengers", "Passengers", ""),
            FieldSpec::new("cost_in_credits", "Cost", " credits"),
        ],
    },
];

static PLANETS: [Section; 2] = [
    Section {
        title: "Environmental Data",
        fields: &[
            FieldSpec::new("climate", "Climate", ""),
            FieldSpec::new("terrain", "Terrain", ""),
            FieldSpec::new("surface_water", "Surface Water", "%"),
            FieldSpec::new("gravity", "Gravity", ""),
        ],
    },
    Section {
        title: "Orbital Information",
        fields: &[
            FieldSpec::new("population", "Population", ""),
            FieldSpec::new("diameter", "Diameter", " km"),
            FieldSpec::new("rotation_period", "Rotation Period", " hours"),
            FieldSpec::new("orbital_period", "Orbital Period", " days"),
        ],
    },
];

/// Detail view sections for a category
pub fn detail_sections(category: Category) -> &'static [Section] {
    match category {
        Category::People => &PEOPLE,
        Category::Vehicles => &VEHICLES,
        Category::Planets => &PLANETS,
    }
}

/// One-line summary shown on a list card
pub fn card_summary(item: &CatalogItem, category: Category) -> String {
    let get = |key: &str| item.field(key).unwrap_or_else(|| UNKNOWN.to_string());
    match category {
        Category::People => format!("Gender: {} | Birth Year: {}", get("gender"), get("birth_year")),
        Category::Vehicles => format!("Model: {}", get("model")),
        Category::Planets => format!("Population: {}", get("population")),
    }
}
