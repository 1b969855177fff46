use std::{collections::BTreeMap, sync::LazyLock};

use body_mass::round2;

use crate::{ActivityBurn, ActivityNotFound, ValidationError};

/// Calories burnt per minute for the built-in activities.
const DEFAULT_ACTIVITIES: [(&str, f64); 12] = [
    ("เดิน (ช้า)", 3.0),
    ("เดิน (ปกติ)", 4.0),
    ("เดิน (เร็ว)", 5.0),
    ("วิ่ง", 8.0),
    ("ว่ายน้ำ", 7.0),
    ("ปั่นจักรยาน", 6.0),
    ("โยคะ", 3.0),
    ("เต้น", 5.0),
    ("กีฬา (ทั่วไป)", 6.0),
    ("เล่นเกม", 1.5),
    ("นั่งทำงาน", 1.0),
    ("นอน", 1.0),
];

static STANDARD: LazyLock<ActivityCatalog> = LazyLock::new(ActivityCatalog::new);

/// Named activities mapped to calories burnt per minute. Keys are case sensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCatalog {
    rates: BTreeMap<String, f64>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        Self {
            rates: DEFAULT_ACTIVITIES
                .into_iter()
                .map(|(name, rate)| (name.to_owned(), rate))
                .collect(),
        }
    }

    pub const fn empty() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    /// Process-wide catalog with the built-in activities.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Add or replace an activity.
    pub fn with_activity(
        mut self,
        name: impl Into<String>,
        rate: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();

        if !(rate.is_finite() && rate > 0.0) {
            return Err(ValidationError::InvalidRate { name, rate });
        }

        tracing::debug!("Registered activity '{name}' at {rate} kcal/min");
        self.rates.insert(name, rate);

        Ok(self)
    }

    pub fn rate_of(&self, name: &str) -> Result<f64, ActivityNotFound> {
        self.rates.get(name).copied().ok_or_else(|| {
            tracing::warn!("Activity '{name}' is not in the catalog");

            ActivityNotFound {
                name: name.to_owned(),
            }
        })
    }

    /// Calories burnt by `minutes` of the named activity, rounded to 2 decimal places.
    pub fn burn(&self, name: &str, minutes: u32) -> Result<ActivityBurn, ActivityNotFound> {
        let rate = self.rate_of(name)?;

        Ok(ActivityBurn {
            activity_name: name.to_owned(),
            duration_minutes: minutes,
            calories_burned: round2(rate * f64::from(minutes)),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rates.contains_key(name)
    }

    /// Owned copy of every entry, changes to it don't reach the catalog.
    pub fn all(&self) -> BTreeMap<String, f64> {
        self.rates.clone()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table() {
        let catalog = ActivityCatalog::standard();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.rate_of("วิ่ง"), Ok(8.0));
        assert_eq!(catalog.rate_of("เล่นเกม"), Ok(1.5));
        assert_eq!(catalog.rate_of("นอน"), Ok(1.0));
    }

    #[test]
    fn lookup_miss_carries_name() {
        assert_eq!(
            ActivityCatalog::standard().rate_of("skydiving"),
            Err(ActivityNotFound {
                name: "skydiving".to_owned()
            })
        );
    }

    #[test]
    fn keys_are_case_sensitive() {
        let catalog = ActivityCatalog::empty()
            .with_activity("Rowing", 7.5)
            .expect("valid rate");
        assert!(catalog.contains("Rowing"));
        assert!(catalog.rate_of("rowing").is_err());
    }

    #[test]
    fn all_returns_detached_copy() {
        let catalog = ActivityCatalog::new();
        let mut all = catalog.all();
        all.insert("Rowing".to_owned(), 7.5);
        all.remove("วิ่ง");

        assert!(!catalog.contains("Rowing"));
        assert_eq!(catalog.rate_of("วิ่ง"), Ok(8.0));
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn registration_rejects_bad_rates() {
        for rate in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ActivityCatalog::empty().with_activity("Rowing", rate),
                Err(ValidationError::InvalidRate { .. })
            ));
        }
    }
}
