use thiserror::Error;

/// Rejection of malformed field input. Raised at construction time, so a
/// value that exists has already been validated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Phone number must be 10 digits: '{0}'")]
    Phone(String),

    #[error("Invalid email format: '{0}'")]
    Email(String),

    #[error("Invalid date format. Use DD.MM.YYYY: '{0}'")]
    Birthday(String),

    #[error("Name cannot be empty")]
    EmptyName,
}

#[derive(Error, Debug)]
pub enum PalError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No contact found with name: {0}")]
    ContactNotFound(String),

    #[error("No note found with text: {0}")]
    NoteNotFound(String),

    #[error("Type mismatch: expected a {expected} entry, found a {found} entry")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PalError>;
