//! Delivery Collaborator
//!
//! Boundary trait between the wizard and the outside world. The engine's
//! logic is shared; only the I/O edge differs between the public form-link
//! flow and the direct onboarding-token flow, so each gets its own
//! implementation of this trait in `intake-client`.

use async_trait::async_trait;
use thiserror::Error;

use crate::assembler::SubmissionPayload;
use intake_forms::resolver::TemplateEnvelope;

/// Fallback status string when the endpoint gave no usable message.
pub const GENERIC_SUBMIT_ERROR: &str = "Submission failed. Please try again.";

/// Errors crossing the delivery boundary.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// The link token is invalid, expired, or revoked. Terminal for the
    /// session; a human must obtain a new link.
    #[error("link not available")]
    LinkUnavailable,

    /// Transport-level failure (DNS, connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status.
    #[error("server error ({status})")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Optional `error` string from the response body, surfaced to the
        /// user verbatim.
        message: Option<String>,
    },

    /// The endpoint answered 2xx but the body was not understood.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl DeliveryError {
    /// User-facing status string: the server-provided message verbatim when
    /// one exists, otherwise a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } => message.clone(),
            _ => GENERIC_SUBMIT_ERROR.to_string(),
        }
    }
}

/// The two operations a wizard session needs from the outside world.
#[async_trait]
pub trait FormDelivery: Send + Sync {
    /// Fetch the raw template envelope for an access token.
    async fn fetch_template(&self, token: &str) -> Result<TemplateEnvelope, DeliveryError>;

    /// Deliver one assembled submission. Exactly one network call per
    /// invocation; the caller handles retry by calling again.
    async fn submit(&self, token: &str, payload: &SubmissionPayload) -> Result<(), DeliveryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_surfaced_verbatim() {
        let err = DeliveryError::Server {
            status: 410,
            message: Some("Link expired".into()),
        };
        assert_eq!(err.user_message(), "Link expired");
    }

    #[test]
    fn test_generic_fallback_without_server_message() {
        let bodyless = DeliveryError::Server {
            status: 500,
            message: None,
        };
        assert_eq!(bodyless.user_message(), GENERIC_SUBMIT_ERROR);
        assert_eq!(
            DeliveryError::Network("refused".into()).user_message(),
            GENERIC_SUBMIT_ERROR
        );
    }
}
