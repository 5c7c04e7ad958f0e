mod types;

pub use types::*;

use crate::{
    Error, Result,
    llm::{GenerateContentRequest, GenerativeClient},
    pantry::IngredientList,
};
use serde_json::json;
use tracing::{debug, info};

/// Sampling temperature for every generation request.
pub const TEMPERATURE: f64 = 0.7;

/// Builds the prompt and output schema, performs one round trip to the
/// generative model, and parses the result into typed recipes. No retry,
/// no caching; identical calls issue independent requests.
pub struct RecipeService {
    client: Box<dyn GenerativeClient>,
}

impl RecipeService {
    pub fn new(client: Box<dyn GenerativeClient>) -> Self {
        Self { client }
    }

    pub async fn generate(&self, ingredients: &IngredientList) -> Result<Vec<Recipe>> {
        if ingredients.is_empty() {
            return Err(Error::validation("Please add at least one ingredient."));
        }

        debug!(
            ingredients = ingredients.len(),
            "Requesting recipe generation"
        );

        let request = GenerateContentRequest::structured(
            build_prompt(ingredients),
            response_schema(),
            TEMPERATURE,
        );
        let response = self.client.generate_content(request).await?;

        let recipes = parse_recipes(&response.text())?;
        info!(count = recipes.len(), "Generated recipes");

        Ok(recipes)
    }
}

/// The meat/poultry/fish restriction is a prompt-level rule only; returned
/// ingredients are not re-validated against it.
fn build_prompt(ingredients: &IngredientList) -> String {
    format!(
        "You are a creative chef specializing in resourceful cooking. Based on the \
         ingredients I have available: {}, generate up to 3 distinct and delicious recipes.\n\n\
         **Crucial rule:** Do not add any major new ingredients like meat (beef, pork), \
         poultry (chicken, turkey), or fish unless they are explicitly in the list I \
         provided. You may only supplement with common pantry staples like salt, pepper, \
         oil, flour, sugar, and basic spices.\n\n\
         For each recipe, provide a name, a brief description, a complete list of all \
         ingredients with quantities, and step-by-step instructions. It is vital to \
         accurately identify which ingredients I already possess from the provided list \
         by setting 'userHas' to the string 'true' for them, and 'false' otherwise.",
        ingredients.names().join(", ")
    )
}

/// Schema declared to the provider. `userHas` is a STRING of 'true'/'false'
/// on the wire and is coerced to a boolean during deserialization.
fn response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recipes": {
                "type": "ARRAY",
                "description": "A list of 2-3 generated recipes.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "recipeName": {
                            "type": "STRING",
                            "description": "The name of the recipe."
                        },
                        "description": {
                            "type": "STRING",
                            "description": "A brief, enticing description of the dish."
                        },
                        "ingredients": {
                            "type": "ARRAY",
                            "description": "A list of all ingredients required for the recipe.",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "name": {
                                        "type": "STRING",
                                        "description": "The name of the ingredient."
                                    },
                                    "quantity": {
                                        "type": "STRING",
                                        "description": "The amount of the ingredient needed, e.g., '1 cup', '2 tbsp'."
                                    },
                                    "userHas": {
                                        "type": "STRING",
                                        "description": "A string, either 'true' or 'false', indicating if the ingredient was in the user's provided list."
                                    }
                                },
                                "required": ["name", "quantity", "userHas"]
                            }
                        },
                        "instructions": {
                            "type": "ARRAY",
                            "description": "Step-by-step instructions to prepare the dish.",
                            "items": { "type": "STRING" }
                        }
                    },
                    "required": ["recipeName", "description", "ingredients", "instructions"]
                }
            }
        },
        "required": ["recipes"]
    })
}

fn parse_recipes(text: &str) -> Result<Vec<Recipe>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyResponse);
    }

    let value: serde_json::Value = serde_json::from_str(text)
        .map_err(|e| Error::invalid_format(format!("response was not valid JSON: {}", e)))?;

    let items = match value.get("recipes") {
        Some(serde_json::Value::Array(items)) => items.clone(),
        _ => return Err(Error::invalid_format("missing 'recipes' array")),
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value::<Recipe>(item)
                .map_err(|e| Error::invalid_format(format!("malformed recipe entry: {}", e)))
        })
        .collect()
}
