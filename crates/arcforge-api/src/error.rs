use arcforge_core::requirements::RequirementError;
use serde::Serialize;

/// Client-input errors. An unknown item id is never one of these; it simply
/// resolves to a base resource.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required request field was absent or empty.
    #[error("{0} required")]
    MissingField(&'static str),

    /// A quantity was zero or negative.
    #[error(transparent)]
    InvalidQuantity(#[from] RequirementError),

    /// The request body was not valid JSON for the operation.
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// The operation name is not one we serve.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
}

impl ApiError {
    /// HTTP-style status code for hosts that speak HTTP.
    pub fn status(&self) -> u16 {
        match self {
            ApiError::UnknownOperation(_) => 404,
            _ => 400,
        }
    }

    /// The `{"error": "..."}` body sent back to clients.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
