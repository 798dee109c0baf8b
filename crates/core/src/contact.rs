//! Contact form model, validation, and the three-valued submission status.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const REJECTED_MESSAGE: &str = "Oops! Something went wrong. Please try again.";
pub const NETWORK_MESSAGE: &str = "Network error. Please try again.";

// ---------------------------------------------------------------------------
// Service selection
// ---------------------------------------------------------------------------

/// What the enquiry is about. Serialized with its display label, which is
/// also what the relay forwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ServiceKind {
    #[default]
    #[serde(rename = "Full Production")]
    FullProduction,
    #[serde(rename = "Social Media")]
    SocialMedia,
    #[serde(rename = "Editing Only")]
    EditingOnly,
    #[serde(rename = "Camera Work")]
    CameraWork,
}

impl ServiceKind {
    /// Every option, in the order the form lists them.
    pub const ALL: [ServiceKind; 4] = [
        ServiceKind::FullProduction,
        ServiceKind::SocialMedia,
        ServiceKind::EditingOnly,
        ServiceKind::CameraWork,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ServiceKind::FullProduction => "Full Production",
            ServiceKind::SocialMedia => "Social Media",
            ServiceKind::EditingOnly => "Editing Only",
            ServiceKind::CameraWork => "Camera Work",
        }
    }
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Fields entered by a visitor on the contact page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1, message = "Please tell us your name."))]
    #[serde(default)]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address."))]
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub brand: String,

    #[serde(default)]
    pub service: ServiceKind,

    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Trim surrounding whitespace from every free-text field.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            brand: self.brand.trim().to_string(),
            service: self.service,
            message: self.message.trim().to_string(),
        }
    }

    /// Check the required fields.
    ///
    /// Returns the first failing field's message, name before email.
    pub fn check(&self) -> Result<(), InvalidForm> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let field_errors = errors.field_errors();
        let message = ["name", "email"]
            .iter()
            .filter_map(|field| field_errors.get(*field))
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Please check the form and try again.".to_string());
        Err(InvalidForm(message))
    }
}

/// The first problem found with a submitted form, worded for the visitor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct InvalidForm(pub String);

impl From<InvalidForm> for CoreError {
    fn from(err: InvalidForm) -> Self {
        CoreError::Validation(err.0)
    }
}

impl From<InvalidForm> for FormErrorKind {
    fn from(err: InvalidForm) -> Self {
        FormErrorKind::Invalid(err.0)
    }
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormErrorKind {
    /// The relay could not be reached.
    Network,
    /// The relay answered but did not report success.
    Rejected,
    /// Required fields were missing or malformed; never sent.
    Invalid(String),
}

/// Inline status shown under the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Success,
    Error(FormErrorKind),
}

impl FormStatus {
    /// User-facing message, `None` while idle.
    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Success => Some(SUCCESS_MESSAGE),
            FormStatus::Error(FormErrorKind::Network) => Some(NETWORK_MESSAGE),
            FormStatus::Error(FormErrorKind::Rejected) => Some(REJECTED_MESSAGE),
            FormStatus::Error(FormErrorKind::Invalid(msg)) => Some(msg),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, FormStatus::Success)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormStatus::Error(_))
    }
}

/// What the contact page renders: current field values plus status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub form: ContactForm,
    pub status: FormStatus,
}

impl FormState {
    /// Fresh, empty form.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Settle a submission. Success clears every field; any error keeps
    /// what the visitor typed.
    pub fn resolve(form: ContactForm, outcome: Result<(), FormErrorKind>) -> Self {
        match outcome {
            Ok(()) => Self {
                form: ContactForm::default(),
                status: FormStatus::Success,
            },
            Err(kind) => Self {
                form,
                status: FormStatus::Error(kind),
            },
        }
    }
}
