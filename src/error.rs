use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteelSalesError {
    #[error("GROQ_API_KEY is not set; the LLM client cannot be constructed")]
    MissingApiKey,

    #[error("Invalid value for field '{field}': {details}")]
    Validation { field: String, details: String },

    #[cfg(feature = "groq")]
    #[error("LLM API error (status {status}): {body}")]
    LlmApi { status: u16, body: String },

    #[cfg(feature = "groq")]
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[cfg(feature = "groq")]
    #[error("LLM returned an empty completion")]
    EmptyCompletion,
}

impl SteelSalesError {
    pub fn validation(field: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            details: details.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SteelSalesError>;
