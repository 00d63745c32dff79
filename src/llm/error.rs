//! Classification error types

use thiserror::Error;

/// Failure while asking Gemini to classify a query
///
/// The `Display` text is shown to the user as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClassifyError {
    /// Could not reach the API at all
    #[error("Could not connect to the Gemini API.")]
    Connect,
    /// Non-2xx status
    #[error("HTTP error from Gemini API: {status} - {body}")]
    Http { status: u16, body: String },
    /// Envelope parsed but carried no answer text
    #[error("Unexpected response from Gemini API.")]
    UnexpectedResponse,
    /// Envelope or embedded answer was not the expected JSON
    #[error("Failed to decode JSON from Gemini API.")]
    Decode,
    #[error("An unexpected error occurred during Gemini API call: {0}")]
    Other(String),
}

impl ClassifyError {
    pub(crate) fn from_transport(err: &reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Connect
        } else {
            Self::Other(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ClassifyError::Connect.to_string(),
            "Could not connect to the Gemini API."
        );
        assert_eq!(
            ClassifyError::Http {
                status: 403,
                body: "denied".to_string()
            }
            .to_string(),
            "HTTP error from Gemini API: 403 - denied"
        );
        assert_eq!(
            ClassifyError::UnexpectedResponse.to_string(),
            "Unexpected response from Gemini API."
        );
        assert_eq!(
            ClassifyError::Decode.to_string(),
            "Failed to decode JSON from Gemini API."
        );
        assert_eq!(
            ClassifyError::Other("operation timed out".to_string()).to_string(),
            "An unexpected error occurred during Gemini API call: operation timed out"
        );
    }
}
