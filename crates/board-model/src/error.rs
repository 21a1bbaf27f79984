use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid record id: {0}")]
    InvalidRecordId(String),
    #[error("unknown {kind} value: {value}")]
    UnknownVariant { kind: &'static str, value: String },
}

/// Client-side check failed before anything was sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field(s): {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("passwords do not match")]
    PasswordMismatch,
}

impl ValidationError {
    /// Message shown to the user next to the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingFields(_) => "Please fill out all required fields.",
            Self::PasswordMismatch => "Passwords do not match.",
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
