use thiserror::Error;

/// Rejected person profile input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PersonError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Age must be positive, got {0}")]
    InvalidAge(i64),

    #[error("Weight must be a positive number of kilograms, got {0}")]
    InvalidWeight(f64),

    #[error("Height must be a positive number of centimeters, got {0}")]
    InvalidHeight(f64),

    #[error("Unknown gender '{0}', expected 'male' or 'female'")]
    UnknownSex(String),
}
