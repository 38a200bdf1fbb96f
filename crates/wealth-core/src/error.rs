use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WealthError {
    #[error("Invalid argument: {field}: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Numeric overflow in {context}")]
    NumericOverflow { context: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl WealthError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        WealthError::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(context: impl Into<String>) -> Self {
        WealthError::NumericOverflow {
            context: context.into(),
        }
    }
}

impl From<serde_json::Error> for WealthError {
    fn from(e: serde_json::Error) -> Self {
        WealthError::Serialization(e.to_string())
    }
}
