use std::fmt;

/// A creation command was rejected because required fields were blank.
///
/// Carries the field names so the caller can surface them; the store leaves
/// the target collection untouched when returning this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub missing_fields: Vec<&'static str>,
}

impl ValidationError {
    pub fn new(missing_fields: Vec<&'static str>) -> Self {
        Self { missing_fields }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required fields: {}", self.missing_fields.join(", "))
    }
}

#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    Storage(String),
    Serialization(String),
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(err) => write!(f, "Validation error: {}", err),
            AppError::Storage(msg) => write!(f, "Storage error: {}", msg),
            AppError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
