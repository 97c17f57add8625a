use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::BrowserError;

/// Number of numbered ingredient/measure slots in a full record
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// Length of a video identifier on the embed platform
pub const VIDEO_KEY_LEN: usize = 11;

/// Envelope returned by both the filter and the lookup endpoints.
/// `meals` is `null` when nothing matches.
#[derive(Debug, Deserialize, Default)]
pub struct MealsResponse {
    #[serde(default)]
    pub meals: Option<Vec<MealRecord>>,
}

/// Raw meal record as sent by the service
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MealRecord {
    #[serde(rename = "idMeal")]
    pub id: Option<String>,
    #[serde(rename = "strMeal")]
    pub name: Option<String>,
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
    #[serde(rename = "strArea")]
    pub area: Option<String>,
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube")]
    pub youtube: Option<String>,
    /// Numbered `strIngredientN` / `strMeasureN` slots and anything else
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl MealRecord {
    fn slot(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(Value::as_str)
    }

    fn required(&self) -> Result<(String, String), BrowserError> {
        let id = non_empty(self.id.as_deref());
        let name = non_empty(self.name.as_deref());
        match (id, name) {
            (Some(id), Some(name)) => Ok((id.to_string(), name.to_string())),
            (None, _) => Err(BrowserError::MalformedRecord(
                "record has no idMeal".to_string(),
            )),
            (Some(id), None) => Err(BrowserError::MalformedRecord(format!(
                "record {} has no strMeal",
                id
            ))),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Minimal view of a recipe used in card grids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    /// Empty when the service sent none
    pub thumbnail_url: String,
}

impl RecipeSummary {
    pub fn from_record(record: &MealRecord) -> Result<Self, BrowserError> {
        let (id, name) = record.required()?;
        Ok(RecipeSummary {
            id,
            name,
            thumbnail_url: record.thumbnail.clone().unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// Full recipe as shown in the overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeDetail {
    pub id: String,
    pub name: String,
    pub thumbnail_url: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    pub video_url: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl RecipeDetail {
    pub fn from_record(record: &MealRecord) -> Result<Self, BrowserError> {
        let (id, name) = record.required()?;
        Ok(RecipeDetail {
            id,
            name,
            thumbnail_url: record.thumbnail.clone().unwrap_or_default(),
            category: record.category.clone().unwrap_or_default(),
            area: record.area.clone().unwrap_or_default(),
            instructions: record.instructions.clone().unwrap_or_default(),
            video_url: non_empty(record.youtube.as_deref()).map(String::from),
            ingredients: scan_ingredients(record),
        })
    }

    pub fn video_key(&self) -> Option<&str> {
        self.video_url.as_deref().map(video_key)
    }
}

/// Collects ingredient slots 1..=20, stopping at the first blank or absent one.
/// Later slots are ignored even when populated.
pub fn scan_ingredients(record: &MealRecord) -> Vec<Ingredient> {
    let mut ingredients = Vec::new();
    for i in 1..=MAX_INGREDIENT_SLOTS {
        let Some(name) = non_empty(record.slot(&format!("strIngredient{}", i))) else {
            break;
        };
        let measure = record
            .slot(&format!("strMeasure{}", i))
            .unwrap_or_default();
        ingredients.push(Ingredient {
            name: name.to_string(),
            measure: measure.to_string(),
        });
    }
    ingredients
}

/// Last eleven characters of a video reference
pub fn video_key(reference: &str) -> &str {
    let count = reference.chars().count();
    if count <= VIDEO_KEY_LEN {
        return reference;
    }
    let start = reference
        .char_indices()
        .nth(count - VIDEO_KEY_LEN)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    &reference[start..]
}
