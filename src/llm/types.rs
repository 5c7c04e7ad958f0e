use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub response_mime_type: String,
    pub response_schema: serde_json::Value,
}

impl GenerateContentRequest {
    /// A single-turn request constrained to JSON output matching `schema`.
    pub fn structured(
        prompt: impl Into<String>,
        schema: serde_json::Value,
        temperature: f64,
    ) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature,
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
            },
        }
    }

    /// The prompt text, for logging and assertions.
    pub fn prompt_text(&self) -> String {
        self.contents
            .iter()
            .flat_map(|c| c.parts.iter())
            .map(|p| p.text.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// The text payload of the first candidate, parts joined in order.
    /// Empty when the provider returned no candidate or no text.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}
