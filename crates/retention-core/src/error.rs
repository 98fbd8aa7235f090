//! Error taxonomy for remote policy API calls.

use thiserror::Error;

/// Failure of a remote call. The list engine never retries; it clears its
/// loading flag and leaves user-visible handling to the owning store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("remote call failed with status {status}: {message}")]
    Remote { status: u16, message: String },
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn display_includes_status_and_message() {
        let err = ApiError::Remote {
            status: 503,
            message: "service unavailable".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "remote call failed with status 503: service unavailable"
        );
    }
}
