use body_mass::{Person, PersonInfo, Sex, round2};

use crate::{ActivityCatalog, ActivityIntensity, ActivityNotFound};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalOptions {
    /// Calories below TDEE for losing weight
    pub deficit: f64,
    /// Calories above TDEE for gaining weight
    pub surplus: f64,
}

impl GoalOptions {
    pub const fn new() -> Self {
        Self {
            deficit: 500.0,
            surplus: 500.0,
        }
    }

    pub const fn set_deficit(mut self, deficit: f64) -> Self {
        self.deficit = deficit;
        self
    }

    pub const fn set_surplus(mut self, surplus: f64) -> Self {
        self.surplus = surplus;
        self
    }
}

impl Default for GoalOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Calories burnt by a single named activity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivityBurn {
    pub activity_name: String,
    pub duration_minutes: u32,
    pub calories_burned: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyGoal {
    pub lose_weight: f64,
    pub maintain: f64,
    pub gain_weight: f64,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalorieSummary {
    pub person: PersonInfo,
    pub bmr: f64,
    pub activity_level: ActivityIntensity,
    pub tdee: f64,
    pub daily_goal: DailyGoal,
}

/// Energy expenditure of one person. Borrows the person and catalog, owns nothing.
#[derive(Debug, Clone, Copy)]
pub struct MetabolicCalculator<'a> {
    person: &'a Person,
    catalog: &'a ActivityCatalog,
}

impl<'a> MetabolicCalculator<'a> {
    pub fn new(person: &'a Person) -> Self {
        Self::with_catalog(person, ActivityCatalog::standard())
    }

    pub const fn with_catalog(person: &'a Person, catalog: &'a ActivityCatalog) -> Self {
        Self { person, catalog }
    }

    pub const fn person(&self) -> &'a Person {
        self.person
    }

    /// Basal metabolic rate in kcal/day, Mifflin-St Jeor formula:
    ///
    /// ```notrust
    /// male:   10 * weight + 6.25 * height - 5 * age + 5
    /// female: 10 * weight + 6.25 * height - 5 * age - 161
    /// ```
    pub fn bmr(&self) -> f64 {
        let sex_factor = match self.person.sex() {
            Sex::Male => 5.0,
            Sex::Female => -161.0,
        };

        round2(
            (10.0 * self.person.weight_kg()) + (6.25 * self.person.height_cm())
                - (5.0 * f64::from(self.person.age()))
                + sex_factor,
        )
    }

    /// Total daily energy expenditure in kcal/day.
    pub fn tdee(&self, intensity: ActivityIntensity) -> f64 {
        round2(self.bmr() * intensity.multiplier())
    }

    /// Look the activity up in the catalog and scale its rate by duration.
    ///
    /// Duration is not validated here, callers must pass a positive value.
    pub fn activity_burn(
        &self,
        activity_name: &str,
        minutes: u32,
    ) -> Result<ActivityBurn, ActivityNotFound> {
        self.catalog.burn(activity_name, minutes)
    }

    pub fn summary(&self, intensity: ActivityIntensity) -> CalorieSummary {
        self.summary_with(intensity, GoalOptions::default())
    }

    pub fn summary_with(
        &self,
        intensity: ActivityIntensity,
        GoalOptions { deficit, surplus }: GoalOptions,
    ) -> CalorieSummary {
        let tdee = self.tdee(intensity);

        CalorieSummary {
            person: self.person.info(),
            bmr: self.bmr(),
            activity_level: intensity,
            tdee,
            daily_goal: DailyGoal {
                lose_weight: round2(tdee - deficit),
                maintain: tdee,
                gain_weight: round2(tdee + surplus),
            },
        }
    }
}
