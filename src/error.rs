use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Received an empty response from the API")]
    EmptyResponse,

    #[error("Invalid response format from API: {0}")]
    InvalidFormat(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid state transition: {current} -> {requested}")]
    InvalidTransition { current: String, requested: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }

    pub fn llm(msg: impl Into<String>) -> Self {
        Self::Llm(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Maps a failure onto the message shown in the error banner. Every
    /// variant produces a visible message; nothing is dropped.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Config(_) => {
                "API key is not configured. Set GEMINI_API_KEY and try again.".to_string()
            }
            Self::Network(e) if is_network_failure(e) => {
                "A network error occurred. Please check your connection and try again.".to_string()
            }
            Self::EmptyResponse | Self::InvalidFormat(_) => {
                "Received an invalid response format from the API. Please try again.".to_string()
            }
            other => format!("Failed to generate recipes: {}", other),
        }
    }
}

fn is_network_failure(e: &reqwest::Error) -> bool {
    if e.is_connect() || e.is_timeout() {
        return true;
    }
    let text = e.to_string().to_lowercase();
    text.contains("network") || text.contains("connection")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_shown_verbatim() {
        let err = Error::validation("Please add at least one ingredient.");
        assert_eq!(err.user_message(), "Please add at least one ingredient.");
    }

    #[test]
    fn config_error_mentions_missing_key() {
        let err = Error::config("API key is not configured");
        assert!(err.user_message().contains("API key is not configured"));
    }

    #[test]
    fn format_errors_map_to_invalid_response_message() {
        for err in [
            Error::EmptyResponse,
            Error::invalid_format("missing 'recipes' array"),
        ] {
            assert!(err.user_message().contains("invalid response format"));
        }
    }

    #[test]
    fn unknown_errors_carry_detail_text() {
        let err = Error::llm("Provider returned 500: overloaded");
        let message = err.user_message();
        assert!(message.starts_with("Failed to generate recipes:"));
        assert!(message.contains("overloaded"));
    }
}
