use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

/// Calories, fat, protein and carbohydrates for one serving, one item or a
/// whole day's intake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: f64,
    pub fat: f64,
    pub protein: f64,
    pub carbs: f64,
}

impl NutritionInfo {
    pub fn new(calories: f64, fat: f64, protein: f64, carbs: f64) -> Self {
        Self {
            calories,
            fat,
            protein,
            carbs,
        }
    }

    /// All four fields are zero. The label parser returns this when nothing
    /// matched, so it doubles as the "no data found" marker.
    pub fn is_zero(&self) -> bool {
        self.calories == 0.0 && self.fat == 0.0 && self.protein == 0.0 && self.carbs == 0.0
    }
}

impl Add for NutritionInfo {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            calories: self.calories + other.calories,
            fat: self.fat + other.fat,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
        }
    }
}

impl AddAssign for NutritionInfo {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Mul<u32> for NutritionInfo {
    type Output = Self;

    fn mul(self, count: u32) -> Self {
        let n = f64::from(count);
        Self {
            calories: self.calories * n,
            fat: self.fat * n,
            protein: self.protein * n,
            carbs: self.carbs * n,
        }
    }
}

impl fmt::Display for NutritionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1} kcal, {:.1} g fat, {:.1} g protein, {:.1} g carbs",
            self.calories, self.fat, self.protein, self.carbs
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_and_sum() {
        let apple = NutritionInfo::new(95.0, 0.3, 0.5, 25.0);
        let banana = NutritionInfo::new(105.0, 0.4, 1.3, 27.0);

        let total = apple * 2 + banana;
        assert_eq!(total.calories, 295.0);
        assert!((total.fat - 1.0).abs() < 1e-9);
        assert_eq!(total.carbs, 77.0);
    }

    #[test]
    fn test_zero_marker() {
        assert!(NutritionInfo::default().is_zero());
        assert!(!NutritionInfo::new(0.0, 0.0, 1.0, 0.0).is_zero());
    }
}
