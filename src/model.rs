use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The lookup service exposes at most this many ingredient/measure pairs.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// One ingredient slot, in the order the service lists it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measure: measure.into(),
        }
    }
}

/// A recipe as returned by the lookup service, normalized
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRecord {
    pub name: String,
    pub image_url: String,
    pub instructions: String,
    pub ingredients: Vec<Ingredient>,
}

/// Response body of both lookup endpoints: `{ "meals": [...] | null }`
#[derive(Debug, Deserialize)]
pub struct MealsEnvelope {
    #[serde(default)]
    pub meals: Option<Vec<Map<String, Value>>>,
}

impl MealsEnvelope {
    /// The first match, normalized; further matches are discarded
    pub fn into_first(self) -> Option<RecipeRecord> {
        self.meals
            .and_then(|meals| meals.into_iter().next())
            .map(|meal| RecipeRecord::from_meal(&meal))
    }
}

impl RecipeRecord {
    /// Normalize one meal object with its `strIngredientN`/`strMeasureN` fields
    ///
    /// A slot is kept when either of its two fields carries a string, so blank
    /// names survive here and are filtered by the projection. Null or missing
    /// text fields become empty strings.
    pub fn from_meal(meal: &Map<String, Value>) -> Self {
        let ingredients = (1..=MAX_INGREDIENT_SLOTS)
            .filter_map(|i| {
                let name = text(meal, &format!("strIngredient{}", i));
                let measure = text(meal, &format!("strMeasure{}", i));
                if name.is_none() && measure.is_none() {
                    return None;
                }
                Some(Ingredient::new(
                    name.unwrap_or_default(),
                    measure.unwrap_or_default(),
                ))
            })
            .collect();

        RecipeRecord {
            name: text(meal, "strMeal").unwrap_or_default().to_string(),
            image_url: text(meal, "strMealThumb").unwrap_or_default().to_string(),
            instructions: text(meal, "strInstructions").unwrap_or_default().to_string(),
            ingredients,
        }
    }
}

fn text<'a>(meal: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    meal.get(key).and_then(Value::as_str)
}
