use body_mass::PersonError;
use thiserror::Error;

/// Malformed or missing input. Never coerced into a default.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error(transparent)]
    Person(#[from] PersonError),

    #[error(
        "Unknown activity level '{0}', expected one of: sedentary, lightly, moderate, very, extreme"
    )]
    UnknownIntensity(String),

    #[error("Duration must be a positive number of minutes, got {0}")]
    InvalidDuration(i64),

    #[error("Calorie rate for '{name}' must be a positive number, got {rate}")]
    InvalidRate { name: String, rate: f64 },
}

/// Activity name absent from the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Activity not found: {name}")]
pub struct ActivityNotFound {
    pub name: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalorieError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] ActivityNotFound),
}

impl From<PersonError> for CalorieError {
    fn from(value: PersonError) -> Self {
        Self::Validation(value.into())
    }
}

pub type Result<T, E = CalorieError> = std::result::Result<T, E>;
