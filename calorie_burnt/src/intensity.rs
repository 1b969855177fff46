use std::str::FromStr;

use crate::ValidationError;

/// Habitual activity level used to scale BMR into TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum ActivityIntensity {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days a week
    LightlyActive,
    /// Moderate exercise 3-5 days a week
    ModeratelyActive,
    /// Hard exercise 6-7 days a week
    VeryActive,
    /// Physical job or training twice a day
    ExtremelyActive,
}

impl ActivityIntensity {
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::LightlyActive,
        Self::ModeratelyActive,
        Self::VeryActive,
        Self::ExtremelyActive,
    ];

    pub const fn multiplier(self) -> f64 {
        match self {
            ActivityIntensity::Sedentary => 1.2,
            ActivityIntensity::LightlyActive => 1.375,
            ActivityIntensity::ModeratelyActive => 1.55,
            ActivityIntensity::VeryActive => 1.725,
            ActivityIntensity::ExtremelyActive => 1.9,
        }
    }

    /// Short key accepted by [`FromStr`].
    pub const fn key(self) -> &'static str {
        match self {
            ActivityIntensity::Sedentary => "sedentary",
            ActivityIntensity::LightlyActive => "lightly",
            ActivityIntensity::ModeratelyActive => "moderate",
            ActivityIntensity::VeryActive => "very",
            ActivityIntensity::ExtremelyActive => "extreme",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ActivityIntensity::Sedentary => "SEDENTARY",
            ActivityIntensity::LightlyActive => "LIGHTLY_ACTIVE",
            ActivityIntensity::ModeratelyActive => "MODERATELY_ACTIVE",
            ActivityIntensity::VeryActive => "VERY_ACTIVE",
            ActivityIntensity::ExtremelyActive => "EXTREMELY_ACTIVE",
        }
    }
}

impl FromStr for ActivityIntensity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|this| this.key() == s)
            .ok_or_else(|| ValidationError::UnknownIntensity(s.to_owned()))
    }
}

impl std::fmt::Display for ActivityIntensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_key() {
        for intensity in ActivityIntensity::ALL {
            assert_eq!(intensity.key().parse(), Ok(intensity));
        }
        assert_eq!(
            "moderate".parse::<ActivityIntensity>(),
            Ok(ActivityIntensity::ModeratelyActive)
        );
    }

    #[test]
    fn rejects_unknown_key() {
        assert_eq!(
            "couch".parse::<ActivityIntensity>(),
            Err(ValidationError::UnknownIntensity("couch".to_owned()))
        );
        // Keys are matched exactly
        assert!("MODERATE".parse::<ActivityIntensity>().is_err());
    }

    #[test]
    fn multipliers_increase_with_level() {
        assert_eq!(ActivityIntensity::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityIntensity::ExtremelyActive.multiplier(), 1.9);
        for pair in ActivityIntensity::ALL.windows(2) {
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
    }
}
