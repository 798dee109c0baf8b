//! Outbound delivery of contact-form submissions to a hosted form relay.
//!
//! The site has no mail backend of its own. [`ContactRelay`] is the seam
//! handlers talk to; [`Web3FormsRelay`] is the production implementation
//! that POSTs JSON to the relay endpoint. Submissions are sent once: there
//! is no retry and no queueing.

pub mod web3forms;

use async_trait::async_trait;
use fomo_core::contact::{ContactForm, FormErrorKind};

pub use web3forms::{RelayConfig, Web3FormsRelay};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for relay submission failures.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The HTTP exchange itself failed (connect, DNS, timeout, body read).
    #[error("Relay request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The relay answered without reporting success.
    #[error("Relay rejected submission: {0}")]
    Rejected(String),

    /// The relay answered with something that is not a JSON reply.
    #[error("Relay reply unreadable: {0}")]
    Unreadable(String),
}

impl RelayError {
    /// How the contact page should describe this failure.
    pub fn form_error_kind(&self) -> FormErrorKind {
        match self {
            RelayError::Network(_) | RelayError::Unreadable(_) => FormErrorKind::Network,
            RelayError::Rejected(_) => FormErrorKind::Rejected,
        }
    }
}

// ---------------------------------------------------------------------------
// Relay seam
// ---------------------------------------------------------------------------

/// Acknowledgement returned by the relay for an accepted submission.
#[derive(Debug, Clone)]
pub struct RelayReceipt {
    /// Free-text message the relay sent back, if any.
    pub message: Option<String>,
}

/// Something that can forward a contact form to the studio's inbox.
#[async_trait]
pub trait ContactRelay: Send + Sync {
    /// Forward one submission. Exactly one outbound attempt is made.
    async fn submit(&self, form: &ContactForm) -> Result<RelayReceipt, RelayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display() {
        let err = RelayError::Rejected("invalid access key".into());
        assert_eq!(
            err.to_string(),
            "Relay rejected submission: invalid access key"
        );
    }

    #[test]
    fn network_display_and_kind() {
        // Build a reqwest error from an invalid URL.
        let req_err = reqwest::Client::new().get("://bad").build().unwrap_err();
        let err = RelayError::Network(req_err);
        assert!(err.to_string().contains("Relay request failed"));
        assert_eq!(err.form_error_kind(), FormErrorKind::Network);
    }

    #[test]
    fn unreadable_reply_reads_as_network_failure() {
        let err = RelayError::Unreadable("HTTP 502 with a null body".into());
        assert_eq!(err.to_string(), "Relay reply unreadable: HTTP 502 with a null body");
        assert_eq!(err.form_error_kind(), FormErrorKind::Network);
    }

    #[test]
    fn rejected_kind() {
        let err = RelayError::Rejected(String::new());
        assert_eq!(err.form_error_kind(), FormErrorKind::Rejected);
    }
}
