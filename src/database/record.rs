use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::food::nutrition::NutritionInfo;

/// Daily targets a user sets the first time they log food on a given day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyGoals {
    pub calories: f64,
    pub fat: f64,
    pub protein: f64,
    pub carbs: f64,
}

impl DailyGoals {
    pub fn new(calories: f64, fat: f64, protein: f64, carbs: f64) -> Self {
        Self {
            calories,
            fat,
            protein,
            carbs,
        }
    }
}

/// One user's intake and goals for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    pub user_id: String,
    pub date: NaiveDate,
    pub consumed: NutritionInfo,
    pub goals: DailyGoals,
}

impl NutritionRecord {
    pub fn new(user_id: impl Into<String>, date: NaiveDate, consumed: NutritionInfo, goals: DailyGoals) -> Self {
        Self {
            user_id: user_id.into(),
            date,
            consumed,
            goals,
        }
    }

    pub fn add(&mut self, intake: NutritionInfo) {
        self.consumed += intake;
    }

    /// Goal minus consumed, per field. Negative once a goal is exceeded.
    pub fn remaining(&self) -> NutritionInfo {
        NutritionInfo {
            calories: self.goals.calories - self.consumed.calories,
            fat: self.goals.fat - self.consumed.fat,
            protein: self.goals.protein - self.consumed.protein,
            carbs: self.goals.carbs - self.consumed.carbs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_remaining() {
        let mut record = NutritionRecord::new(
            "u1",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NutritionInfo::new(100.0, 5.0, 10.0, 20.0),
            DailyGoals::new(2000.0, 70.0, 50.0, 260.0),
        );
        record.add(NutritionInfo::new(50.0, 1.0, 2.0, 3.0));

        assert_eq!(record.consumed, NutritionInfo::new(150.0, 6.0, 12.0, 23.0));
        assert_eq!(record.remaining(), NutritionInfo::new(1850.0, 64.0, 38.0, 237.0));
    }

    #[test]
    fn test_remaining_goes_negative() {
        let record = NutritionRecord::new(
            "u1",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NutritionInfo::new(2500.0, 0.0, 0.0, 0.0),
            DailyGoals::new(2000.0, 0.0, 0.0, 0.0),
        );
        assert_eq!(record.remaining().calories, -500.0);
    }
}
