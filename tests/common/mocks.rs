use async_trait::async_trait;
use pantry_chef::{
    Error, Result,
    llm::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerativeClient, Part},
};
use std::sync::{Arc, Mutex};

/// Mock generative client for testing. Records every request it receives and
/// replays canned responses in order.
#[derive(Debug, Default)]
pub struct MockGenerativeClient {
    pub responses: Arc<Mutex<Vec<GenerateContentResponse>>>,
    pub requests: Arc<Mutex<Vec<GenerateContentRequest>>>,
    pub error: Option<String>,
}

impl MockGenerativeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(self, responses: Vec<GenerateContentResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: String) -> Self {
        self.error = Some(error);
        self
    }

    pub fn get_requests(&self) -> Vec<GenerateContentRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Handles for inspecting recorded requests after the client has been
    /// boxed into a service.
    pub fn request_log(&self) -> Arc<Mutex<Vec<GenerateContentRequest>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

pub fn text_response(text: &str) -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: vec![Candidate {
            content: Some(Content {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }),
            finish_reason: Some("STOP".to_string()),
        }],
    }
}

pub fn empty_response() -> GenerateContentResponse {
    GenerateContentResponse {
        candidates: Vec::new(),
    }
}

/// Two well-formed recipes referencing only the supplied pantry plus staples.
pub fn two_recipe_payload() -> String {
    r#"{
        "recipes": [
            {
                "recipeName": "Garlic Chicken Skillet",
                "description": "Seared chicken with blistered tomatoes.",
                "ingredients": [
                    { "name": "Chicken Breast", "quantity": "2", "userHas": "true" },
                    { "name": "Tomatoes", "quantity": "3", "userHas": "true" },
                    { "name": "Garlic", "quantity": "4 cloves", "userHas": "true" },
                    { "name": "Olive oil", "quantity": "2 tbsp", "userHas": "false" },
                    { "name": "Salt", "quantity": "1 tsp", "userHas": "false" }
                ],
                "instructions": [
                    "Season the chicken.",
                    "Sear until golden.",
                    "Add tomatoes and garlic, cook until soft."
                ]
            },
            {
                "recipeName": "Rustic Tomato Garlic Soup",
                "description": "A warming soup from ripe tomatoes.",
                "ingredients": [
                    { "name": "Tomatoes", "quantity": "6", "userHas": "true" },
                    { "name": "Garlic", "quantity": "3 cloves", "userHas": "true" },
                    { "name": "Pepper", "quantity": "1 pinch", "userHas": "false" }
                ],
                "instructions": [
                    "Roast the tomatoes and garlic.",
                    "Blend and simmer.",
                    "Season to taste."
                ]
            }
        ]
    }"#
    .to_string()
}
