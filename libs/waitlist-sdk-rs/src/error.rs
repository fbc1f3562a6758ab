use thiserror::Error;
use waitlist_types::{ErrorCode, ErrorResponse};

/// SDK-specific errors.
#[derive(Debug, Error)]
pub enum WaitlistError {
    /// The email is already on the waitlist (HTTP 409)
    #[error("This email is already registered on the waitlist")]
    DuplicateEmail,

    /// Wrong admin password (HTTP 401)
    #[error("Invalid password")]
    InvalidCredentials,

    /// The server rejected the submission (HTTP 400)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Any other non-success response
    #[error("API error: {status} - {message}")]
    Api {
        status: u16,
        code: Option<ErrorCode>,
        message: String,
    },

    /// Network error (only with `client` feature)
    #[cfg(feature = "client")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response body did not match the expected shape
    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WaitlistError {
    /// Map a non-success status and its body to an error.
    pub(crate) fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed: Option<ErrorResponse> = serde_json::from_slice(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|b| b.message.clone())
            .unwrap_or_else(|| format!("Request failed with status {}", status));

        match status {
            409 => WaitlistError::DuplicateEmail,
            401 => WaitlistError::InvalidCredentials,
            400 => WaitlistError::InvalidInput(message),
            _ => WaitlistError::Api {
                status,
                code: parsed.map(|b| b.code),
                message,
            },
        }
    }
}

/// Errors raised by the client-side state machines.
///
/// Every error leaves the flow in the state it was in.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Cannot {action} from the {from} step")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },

    #[error("Please enter a name for your assistant")]
    MissingName,

    #[error("Sorry, \"{0}\" is already taken. Try another name.")]
    NameUnavailable(String),

    #[error("Please enter your email address")]
    MissingEmail,

    #[error("Please enter your phone number")]
    MissingPhone,

    #[error("No waitlist entries to export")]
    NothingToExport,

    #[error("Failed to serialize export: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Api(#[from] WaitlistError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_maps_known_statuses() {
        assert!(matches!(
            WaitlistError::from_response(409, br#"{"code":"DUPLICATE_EMAIL"}"#),
            WaitlistError::DuplicateEmail
        ));
        assert!(matches!(
            WaitlistError::from_response(401, b""),
            WaitlistError::InvalidCredentials
        ));
        match WaitlistError::from_response(
            400,
            br#"{"code":"INVALID_INPUT","message":"Missing required fields"}"#,
        ) {
            WaitlistError::InvalidInput(msg) => assert_eq!(msg, "Missing required fields"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_response_other_status_keeps_code() {
        match WaitlistError::from_response(500, br#"{"code":"STORAGE_ERROR","message":"Failed to access waitlist"}"#) {
            WaitlistError::Api { status, code, message } => {
                assert_eq!(status, 500);
                assert_eq!(code, Some(ErrorCode::StorageError));
                assert_eq!(message, "Failed to access waitlist");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_response_unparseable_body() {
        match WaitlistError::from_response(502, b"<html>bad gateway</html>") {
            WaitlistError::Api { code, message, .. } => {
                assert!(code.is_none());
                assert_eq!(message, "Request failed with status 502");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
