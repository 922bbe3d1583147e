use anyhow::{Context, Result};
use log::{info, warn};
use recipe_calories::api_connection::{build_http_client, GoogleTranslator, UsdaCalorieFallback, UsdaClient};
use recipe_calories::cli::{parse_args, Command};
use recipe_calories::config::{AppConfig, USDA_API_KEY_ENV_VAR};
use recipe_calories::daily_intake::{recommended_daily_calories, summarize_day};
use recipe_calories::ingredient_annotator::annotate_ingredient;
use recipe_calories::meal_aggregator::calculate_meal_calories;
use recipe_calories::models::{format_kcal, Ingredient, MealCalorieResult};
use recipe_calories::nutritional_matcher::NutritionalIndex;
use recipe_calories::search::{load_nutrition_table, NutritionTable};

fn build_index<'a>(table: &'a NutritionTable, config: &AppConfig, offline: bool) -> Result<NutritionalIndex<'a>> {
    if offline {
        return Ok(NutritionalIndex::local(table));
    }
    let Some(api_key) = config.usda_api_key.clone() else {
        warn!("{} is not set; foods missing from the local tables will have no calorie data", USDA_API_KEY_ENV_VAR);
        return Ok(NutritionalIndex::local(table));
    };

    let client = build_http_client(config.request_timeout).context("Failed to build HTTP client")?;
    let translator = GoogleTranslator::new(
        client.clone(),
        config.translate_base_url.clone(),
        config.source_language.clone(),
        config.target_language.clone(),
    );
    let usda = UsdaClient::new(client, config.usda_base_url.clone(), api_key);
    Ok(NutritionalIndex::with_fallback(table, UsdaCalorieFallback::new(translator, usda)))
}

fn print_meal(label: &str, meal: &MealCalorieResult) {
    println!("{}: {} (total {})", label, meal.line_items.join(", "), format_kcal(meal.total_calories));
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli_args = parse_args();
    let config = AppConfig::from_env();

    let table = load_nutrition_table(&cli_args.data_files).context("Failed to load nutrition tables")?;
    info!("Nutrition table ready: {} records", table.len());
    let nutritional_index = build_index(&table, &config, cli_args.offline)?;

    let progress_updater = |message: String| {
        eprintln!("{}", message);
    };

    match cli_args.command {
        Command::Ingredient { lines } => {
            for line in &lines {
                let ingredient = Ingredient::from_listing(line);
                println!("{}", annotate_ingredient(&ingredient, &nutritional_index, &progress_updater).await);
            }
        }
        Command::Meal { foods } => {
            let meal = calculate_meal_calories(&foods, &nutritional_index, &progress_updater).await;
            for item in &meal.line_items {
                println!("{}", item);
            }
            println!("Total: {}", format_kcal(meal.total_calories));
        }
        Command::Daily { weight, gender, breakfast, lunch, dinner } => {
            let recommended = recommended_daily_calories(weight, gender);
            println!("Recommended daily intake: {:.0} kcal", recommended);

            let summary = summarize_day(
                &breakfast,
                &lunch,
                &dinner,
                recommended,
                &nutritional_index,
                &progress_updater,
            )
            .await;
            print_meal("Breakfast", &summary.breakfast);
            print_meal("Lunch", &summary.lunch);
            print_meal("Dinner", &summary.dinner);
            println!("Daily total: {}", format_kcal(summary.total_calories));
            if summary.exceeds_recommendation() {
                println!("Above the recommended intake.");
            } else {
                println!("Within the recommended intake.");
            }
        }
        Command::Foods => {
            for name in nutritional_index.table().food_options() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}
