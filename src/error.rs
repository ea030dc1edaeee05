use thiserror::Error;

/// A strategy name that does not match any [`Algorithm`](crate::Algorithm).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sorting algorithm `{name}`, expected one of: bubble, insertion, odd-even")]
pub struct ParseAlgorithmError {
    pub(crate) name: String,
}

impl ParseAlgorithmError {
    /// The rejected name, as given.
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed sort configuration: {0}")]
    Json(#[from] serde_json::Error),
}
