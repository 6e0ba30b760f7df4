use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextNormError {
    #[error("Resource unavailable: {resource} ({reason})")]
    ResourceUnavailable { resource: String, reason: String },
    #[error("Invalid configuration: {0}")]
    Configuration(String),
    #[error("Phrase scoring failed: {0}")]
    Scoring(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TextNormError {
    pub fn resource_unavailable(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TextNormError>;
