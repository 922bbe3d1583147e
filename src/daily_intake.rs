use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::meal_aggregator::calculate_meal_calories;
use crate::models::MealCalorieResult;
use crate::nutritional_matcher::NutritionalIndex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    fn kcal_per_kg(self) -> f64 {
        match self {
            Gender::Male => 35.0,
            Gender::Female => 30.0,
        }
    }
}

/// Rough daily energy requirement from body weight.
pub fn recommended_daily_calories(weight_kg: f64, gender: Gender) -> f64 {
    weight_kg * gender.kcal_per_kg()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySummary {
    pub breakfast: MealCalorieResult,
    pub lunch: MealCalorieResult,
    pub dinner: MealCalorieResult,
    pub total_calories: f64,
    pub recommended_calories: f64,
}

impl DailySummary {
    pub fn exceeds_recommendation(&self) -> bool {
        self.total_calories > self.recommended_calories
    }
}

/// Breakdown of the day's three meals against the recommended intake.
pub async fn summarize_day<S: AsRef<str>>(
    breakfast: &[S],
    lunch: &[S],
    dinner: &[S],
    recommended_calories: f64,
    nutritional_index: &NutritionalIndex<'_>,
    progress_updater: &impl Fn(String),
) -> DailySummary {
    let breakfast = calculate_meal_calories(breakfast, nutritional_index, progress_updater).await;
    let lunch = calculate_meal_calories(lunch, nutritional_index, progress_updater).await;
    let dinner = calculate_meal_calories(dinner, nutritional_index, progress_updater).await;
    let total_calories = breakfast.total_calories + lunch.total_calories + dinner.total_calories;

    DailySummary {
        breakfast,
        lunch,
        dinner,
        total_calories,
        recommended_calories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutritionRecord;
    use crate::search::NutritionTable;

    fn no_progress(_: String) {}

    #[test]
    fn test_recommended_daily_calories() {
        assert_eq!(recommended_daily_calories(70.0, Gender::Male), 2450.0);
        assert_eq!(recommended_daily_calories(55.0, Gender::Female), 1650.0);
    }

    #[tokio::test]
    async fn test_summarize_day() {
        let table = NutritionTable::new(vec![
            NutritionRecord::new("쌀밥", "", "", "210g", 300.0),
            NutritionRecord::new("김치", "", "", "100g", 30.0),
            NutritionRecord::new("삼겹살", "", "", "100g", 1200.0),
        ]);
        let index = NutritionalIndex::local(&table);

        let summary = summarize_day(
            &["쌀밥", "김치"],
            &["쌀밥"],
            &["삼겹살", "없는음식"],
            1650.0,
            &index,
            &no_progress,
        )
        .await;

        assert_eq!(summary.breakfast.total_calories, 330.0);
        assert_eq!(summary.lunch.total_calories, 300.0);
        assert_eq!(summary.dinner.line_items, vec!["삼겹살: 1200 kcal", "없는음식"]);
        assert_eq!(summary.total_calories, 1830.0);
        assert!(summary.exceeds_recommendation());
    }
}
