//! # Body mass
//!
//! Biometric profile of a single person and the body mass index derived from it.
//!
//! ```notrust
//! BMI = weight(kg) / height(m)^2
//! ```
//!
//! The value is rounded to 2 decimal places and the category band is
//! evaluated on that rounded value:
//!
//! - Underweight - `< 18.5`
//! - Normal - `18.5..25.0`
//! - Overweight - `25.0..30.0`
//! - Obese - `>= 30.0`

use std::str::FromStr;

use time::OffsetDateTime;

mod error;

pub use self::error::PersonError;

/// Round to 2 decimal places, half away from zero.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const fn label(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = PersonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(PersonError::UnknownSex(s.to_owned())),
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Band for an already rounded BMI value. Lower bounds are inclusive.
    pub fn from_bmi(bmi: f64) -> Self {
        match bmi {
            bmi if bmi < 18.5 => Self::Underweight,
            bmi if bmi < 25.0 => Self::Normal,
            bmi if bmi < 30.0 => Self::Overweight,
            _ => Self::Obese,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "underweight",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::Obese => "obese",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Biometric profile. Immutable once constructed, build a new one to change anything.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Person {
    name: String,
    age: u32,
    weight_kg: f64,
    height_cm: f64,
    sex: Sex,
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    created_at: OffsetDateTime,
}

/// Snapshot of a person together with the derived BMI values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonInfo {
    pub name: String,
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Sex,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
}

impl Person {
    /// Validate the profile and stamp it with the current UTC time.
    ///
    /// # Params
    /// - `age` - years, must be positive
    /// - `weight_kg` - kilograms, must be positive and finite
    /// - `height_cm` - centimeters, must be positive and finite
    pub fn new(
        name: impl Into<String>,
        age: u32,
        weight_kg: f64,
        height_cm: f64,
        sex: Sex,
    ) -> Result<Self, PersonError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(PersonError::EmptyName);
        }

        if age == 0 {
            return Err(PersonError::InvalidAge(i64::from(age)));
        }

        if !(weight_kg.is_finite() && weight_kg > 0.0) {
            return Err(PersonError::InvalidWeight(weight_kg));
        }

        if !(height_cm.is_finite() && height_cm > 0.0) {
            return Err(PersonError::InvalidHeight(height_cm));
        }

        Ok(Self {
            name,
            age,
            weight_kg,
            height_cm,
            sex,
            created_at: OffsetDateTime::now_utc(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn age(&self) -> u32 {
        self.age
    }

    pub const fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub const fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub const fn sex(&self) -> Sex {
        self.sex
    }

    pub const fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;

        round2(self.weight_kg / height_m.powi(2))
    }

    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.bmi())
    }

    pub fn info(&self) -> PersonInfo {
        let bmi = self.bmi();

        PersonInfo {
            name: self.name.clone(),
            age: self.age,
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            gender: self.sex,
            bmi,
            bmi_category: BmiCategory::from_bmi(bmi),
        }
    }
}
