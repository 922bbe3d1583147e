use crate::calorie_scaler::scale_calories;
use crate::measurement_parser::normalize_metric;
use crate::models::Ingredient;
use crate::nutritional_matcher::NutritionalIndex;

/// Label for an ingredient line. The metric is shown only when it looks like
/// a weight or volume.
pub fn ingredient_label(ingredient: &Ingredient) -> String {
    let name = ingredient.name.trim();
    let quantity = ingredient.quantity.trim();
    let metric = ingredient.metric.trim();
    let metric_lower = metric.to_lowercase();

    if !metric.is_empty() && (metric_lower.contains('g') || metric_lower.contains("ml")) {
        if quantity.is_empty() {
            format!("{} ({})", name, metric)
        } else {
            format!("{} {} ({})", name, quantity, metric)
        }
    } else if quantity.is_empty() {
        name.to_string()
    } else {
        format!("{} {}", name, quantity)
    }
}

/// Label plus calorie annotation, e.g. `"닭가슴살 1개 (200g) - 218 kcal"`.
pub async fn annotate_ingredient(
    ingredient: &Ingredient,
    nutritional_index: &NutritionalIndex<'_>,
    progress_updater: &impl Fn(String),
) -> String {
    let label = ingredient_label(ingredient);
    match nutritional_index.lookup(&ingredient.name, progress_updater).await {
        Some(reference) => {
            let metric = normalize_metric(&ingredient.metric);
            let calorie_info = scale_calories(&reference.serving, reference.calories, &metric);
            format!("{} - {}", label, calorie_info)
        }
        None => label,
    }
}
