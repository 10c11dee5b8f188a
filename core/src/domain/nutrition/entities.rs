use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nutrition facts for one serving of a food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FoodRecord {
    /// kcal
    pub calories: f64,
    pub carbohydrates: f64,
    pub proteins: f64,
    pub fats: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub serving_size: String,
    /// grams
    pub serving_weight: f64,
}

impl FoodRecord {
    /// Multiplies every nutrient by the same `factor`.
    ///
    /// Calories are rounded to the nearest integer and gram values to the
    /// nearest 0.1 g. The serving description and weight are left untouched.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: (self.calories * factor).round(),
            carbohydrates: round_to_tenth(self.carbohydrates * factor),
            proteins: round_to_tenth(self.proteins * factor),
            fats: round_to_tenth(self.fats * factor),
            fiber: round_to_tenth(self.fiber * factor),
            sugar: round_to_tenth(self.sugar * factor),
            serving_size: self.serving_size.clone(),
            serving_weight: self.serving_weight,
        }
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samosa() -> FoodRecord {
        FoodRecord {
            calories: 262.0,
            carbohydrates: 24.0,
            proteins: 3.5,
            fats: 17.0,
            fiber: 2.3,
            sugar: 1.4,
            serving_size: "1 piece".to_string(),
            serving_weight: 80.0,
        }
    }

    #[test]
    fn test_scaled_identity_keeps_values() {
        assert_eq!(samosa().scaled(1.0), samosa());
    }

    #[test]
    fn test_scaled_rounds_calories_and_grams() {
        let scaled = samosa().scaled(1.03);
        assert_eq!(scaled.calories, 270.0);
        assert_eq!(scaled.carbohydrates, 24.7);
        assert_eq!(scaled.proteins, 3.6);
        assert_eq!(scaled.fats, 17.5);
        assert_eq!(scaled.fiber, 2.4);
        assert_eq!(scaled.sugar, 1.4);
    }

    #[test]
    fn test_scaled_keeps_serving() {
        let scaled = samosa().scaled(0.9);
        assert_eq!(scaled.serving_size, "1 piece");
        assert_eq!(scaled.serving_weight, 80.0);
    }
}
