//! Entry points for adapter layers (HTTP handlers, CLI).
//!
//! Every function takes plain values and the state it works on explicitly,
//! there is no process-wide "current person" or tracker.

use std::collections::BTreeMap;

use body_mass::{Person, PersonError, Sex};

use crate::{
    ActivityBurn, ActivityCatalog, ActivityIntensity, ActivityRecord, CalorieSummary,
    MetabolicCalculator, Result, SharedActivityTracker, ValidationError,
};

pub fn create_person(
    name: &str,
    age: i64,
    weight_kg: f64,
    height_cm: f64,
    gender: &str,
) -> Result<Person> {
    let age = u32::try_from(age).map_err(|_| PersonError::InvalidAge(age))?;
    let sex = gender.parse::<Sex>()?;

    Ok(Person::new(name, age, weight_kg, height_cm, sex)?)
}

pub fn bmr(person: &Person) -> f64 {
    MetabolicCalculator::new(person).bmr()
}

pub fn tdee(person: &Person, intensity_key: &str) -> Result<f64> {
    let intensity = intensity_key.parse::<ActivityIntensity>()?;

    Ok(MetabolicCalculator::new(person).tdee(intensity))
}

/// Burn for a catalog activity. `minutes` must be positive.
pub fn activity_burn(activity_name: &str, minutes: i64) -> Result<ActivityBurn> {
    let minutes = u32::try_from(minutes)
        .ok()
        .filter(|minutes| *minutes > 0)
        .ok_or(ValidationError::InvalidDuration(minutes))?;

    Ok(ActivityCatalog::standard().burn(activity_name, minutes)?)
}

pub fn summary(person: &Person, intensity_key: &str) -> Result<CalorieSummary> {
    let intensity = intensity_key.parse::<ActivityIntensity>()?;

    Ok(MetabolicCalculator::new(person).summary(intensity))
}

pub fn list_activities() -> BTreeMap<String, f64> {
    ActivityCatalog::standard().all()
}

pub fn tracker_record(tracker: &SharedActivityTracker, result: ActivityBurn) {
    tracker.record(result);
}

pub fn tracker_total(tracker: &SharedActivityTracker) -> f64 {
    tracker.total_calories()
}

pub fn tracker_records(tracker: &SharedActivityTracker) -> Vec<ActivityRecord> {
    tracker.records()
}

pub fn tracker_clear(tracker: &SharedActivityTracker) {
    tracker.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{ActivityNotFound, CalorieError};

    fn somchai() -> Person {
        create_person("Somchai", 30, 75.0, 175.0, "male").expect("valid person")
    }

    #[test]
    fn create_person_validates_input() {
        assert_eq!(somchai().bmi(), 24.49);

        assert_eq!(
            create_person("Somchai", -3, 75.0, 175.0, "male"),
            Err(CalorieError::Validation(ValidationError::Person(
                PersonError::InvalidAge(-3)
            )))
        );
        assert_eq!(
            create_person("Somchai", 30, 75.0, 175.0, "robot"),
            Err(PersonError::UnknownSex("robot".to_owned()).into())
        );
        assert_eq!(
            create_person("", 30, 75.0, 175.0, "female"),
            Err(PersonError::EmptyName.into())
        );
    }

    #[test]
    fn tdee_and_summary_agree() {
        let person = somchai();

        assert_eq!(bmr(&person), 1698.75);
        assert_eq!(tdee(&person, "moderate"), Ok(2633.06));

        for intensity in ActivityIntensity::ALL {
            let summary = summary(&person, intensity.key()).expect("known key");
            assert_eq!(Ok(summary.tdee), tdee(&person, intensity.key()));
        }
    }

    #[test]
    fn unknown_intensity_is_rejected() {
        let person = somchai();
        let expected = Err(CalorieError::Validation(ValidationError::UnknownIntensity(
            "lazy".to_owned(),
        )));

        assert_eq!(tdee(&person, "lazy"), expected);
        assert_eq!(summary(&person, "lazy").map(|s| s.tdee), expected);
    }

    #[test]
    fn activity_burn_checks_duration_then_catalog() {
        assert_eq!(
            activity_burn("วิ่ง", 30).map(|b| b.calories_burned),
            Ok(240.0)
        );
        assert_eq!(
            activity_burn("วิ่ง", 0),
            Err(ValidationError::InvalidDuration(0).into())
        );
        assert_eq!(
            activity_burn("วิ่ง", -5),
            Err(ValidationError::InvalidDuration(-5).into())
        );
        assert_eq!(
            activity_burn("skydiving", 30),
            Err(CalorieError::NotFound(ActivityNotFound {
                name: "skydiving".to_owned()
            }))
        );
    }

    #[test]
    fn failed_burn_leaves_tracker_untouched() {
        let tracker = SharedActivityTracker::new();
        tracker_record(&tracker, activity_burn("วิ่ง", 30).expect("known activity"));

        if let Ok(burn) = activity_burn("skydiving", 30) {
            tracker_record(&tracker, burn);
        }

        assert_eq!(tracker_records(&tracker).len(), 1);
        assert_eq!(tracker_total(&tracker), 240.0);

        tracker_clear(&tracker);
        tracker_clear(&tracker);
        assert!(tracker_records(&tracker).is_empty());
        assert_eq!(tracker_total(&tracker), 0.0);
    }

    #[test]
    fn list_activities_is_a_copy() {
        let mut activities = list_activities();
        assert_eq!(activities.get("ว่ายน้ำ"), Some(&7.0));

        activities.clear();
        assert_eq!(list_activities().len(), 12);
    }
}
