//! # Calorie burnt
//!
//! Daily energy expenditure of a person and calories burnt by named activities.
//!
//! BMR uses the Mifflin-St Jeor equation, TDEE scales it by a fixed
//! activity level multiplier:
//!
//! - Sedentary - `1.2`
//! - Lightly active - `1.375`
//! - Moderately active - `1.55`
//! - Very active - `1.725`
//! - Extremely active - `1.9`
//!
//! Activity burn is `rate(kcal/min) * minutes` with rates taken from an
//! [`ActivityCatalog`]. Burns can be collected in an [`ActivityTracker`].
//!
//! All results are rounded to 2 decimal places.

pub mod api;
mod catalog;
mod error;
mod intensity;
mod metabolic;
mod tracker;

pub use body_mass::{BmiCategory, Person, PersonError, PersonInfo, Sex};

pub use self::{
    catalog::ActivityCatalog,
    error::{ActivityNotFound, CalorieError, Result, ValidationError},
    intensity::ActivityIntensity,
    metabolic::{ActivityBurn, CalorieSummary, DailyGoal, GoalOptions, MetabolicCalculator},
    tracker::{
        ActivityRecord, ActivityTracker, SharedActivityTracker, TrackerReport, TrackerState,
    },
};
