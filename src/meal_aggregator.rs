use crate::models::{format_kcal, MealCalorieResult};
use crate::nutritional_matcher::NutritionalIndex;

/// Sums the reference calories of each food in `foods`, in order.
///
/// Meal entries carry no amount, so values are not scaled. Unresolved foods
/// are listed by name and contribute nothing to the total.
pub async fn calculate_meal_calories<S: AsRef<str>>(
    foods: &[S],
    nutritional_index: &NutritionalIndex<'_>,
    progress_updater: &impl Fn(String),
) -> MealCalorieResult {
    let mut result = MealCalorieResult::default();

    for food in foods {
        let food = food.as_ref();
        match nutritional_index.lookup(food, progress_updater).await {
            Some(reference) => {
                result.total_calories += reference.calories;
                result.line_items.push(format!("{}: {}", food, format_kcal(reference.calories)));
            }
            None => result.line_items.push(food.to_string()),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutritionRecord;
    use crate::search::NutritionTable;

    fn no_progress(_: String) {}

    #[tokio::test]
    async fn test_resolved_and_unresolved_foods() {
        let table = NutritionTable::new(vec![NutritionRecord::new("A", "", "", "100g", 200.0)]);
        let index = NutritionalIndex::local(&table);

        let result = calculate_meal_calories(&["A", "B"], &index, &no_progress).await;
        assert_eq!(result.total_calories, 200.0);
        assert_eq!(result.line_items, vec!["A: 200 kcal", "B"]);
    }

    #[tokio::test]
    async fn test_order_preserved_and_duplicates_counted() {
        let table = NutritionTable::new(vec![
            NutritionRecord::new("김치", "", "", "100g", 32.5),
            NutritionRecord::new("쌀밥", "", "", "210g", 300.0),
        ]);
        let index = NutritionalIndex::local(&table);
        let foods = vec!["쌀밥".to_string(), "김치".to_string(), "쌀밥".to_string()];

        let result = calculate_meal_calories(&foods, &index, &no_progress).await;
        assert_eq!(result.total_calories, 632.5);
        assert_eq!(
            result.line_items,
            vec!["쌀밥: 300 kcal", "김치: 32.5 kcal", "쌀밥: 300 kcal"]
        );
    }

    #[tokio::test]
    async fn test_empty_meal() {
        let table = NutritionTable::default();
        let index = NutritionalIndex::local(&table);
        let foods: Vec<String> = Vec::new();

        let result = calculate_meal_calories(&foods, &index, &no_progress).await;
        assert_eq!(result, MealCalorieResult::default());
    }
}
