use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use body_mass::round2;
use time::OffsetDateTime;

use crate::ActivityBurn;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityRecord {
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub timestamp: OffsetDateTime,
    pub activity_name: String,
    pub duration_minutes: u32,
    pub calories_burned: f64,
}

impl ActivityRecord {
    fn new(
        ActivityBurn {
            activity_name,
            duration_minutes,
            calories_burned,
        }: ActivityBurn,
        timestamp: OffsetDateTime,
    ) -> Self {
        Self {
            timestamp,
            activity_name,
            duration_minutes,
            calories_burned,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    Empty,
    NonEmpty,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackerReport {
    pub records: Vec<ActivityRecord>,
    pub total_calories: f64,
}

/// Append-only log of burnt activities, oldest first.
///
/// Records are trusted as given. The total is recomputed on every call.
#[derive(Debug, Clone, Default)]
pub struct ActivityTracker {
    records: Vec<ActivityRecord>,
}

impl ActivityTracker {
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn record(&mut self, burn: ActivityBurn) {
        self.record_at(burn, OffsetDateTime::now_utc());
    }

    pub fn record_at(&mut self, burn: ActivityBurn, timestamp: OffsetDateTime) {
        tracing::debug!(
            "Recorded {} for {} min: {} kcal",
            burn.activity_name,
            burn.duration_minutes,
            burn.calories_burned
        );

        self.records.push(ActivityRecord::new(burn, timestamp));
    }

    pub fn total_calories(&self) -> f64 {
        round2(
            self.records
                .iter()
                .map(|record| record.calories_burned)
                .sum::<f64>(),
        )
    }

    pub fn records(&self) -> &[ActivityRecord] {
        &self.records
    }

    pub fn clear(&mut self) {
        if !self.records.is_empty() {
            tracing::debug!("Cleared {} activity records", self.records.len());
        }

        self.records.clear();
    }

    pub fn state(&self) -> TrackerState {
        match self.records.is_empty() {
            true => TrackerState::Empty,
            false => TrackerState::NonEmpty,
        }
    }

    pub fn report(&self) -> TrackerReport {
        TrackerReport {
            records: self.records.clone(),
            total_calories: self.total_calories(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Cloneable handle to one tracker shared between callers.
///
/// Every read and write goes through a single lock.
#[derive(Debug, Clone, Default)]
pub struct SharedActivityTracker(Arc<Mutex<ActivityTracker>>);

impl SharedActivityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ActivityTracker> {
        // No tracker operation leaves the log half-written
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record(&self, burn: ActivityBurn) {
        self.lock().record(burn);
    }

    pub fn total_calories(&self) -> f64 {
        self.lock().total_calories()
    }

    pub fn records(&self) -> Vec<ActivityRecord> {
        self.lock().records().to_vec()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn state(&self) -> TrackerState {
        self.lock().state()
    }

    pub fn report(&self) -> TrackerReport {
        self.lock().report()
    }
}
