use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use log::{info, warn};
use std::path::Path;

use crate::models::NutritionRecord;
use crate::search::NutritionTable;

// Expected column headers of the public food-composition CSV exports
pub const NAME_COL: &str = "식품명";
pub const ALT_NAME_COL: &str = "대표식품명";
pub const CATEGORY_COL: &str = "식품중분류명";
pub const SERVING_COL: &str = "영양성분함량기준량";
pub const KCAL_COL: &str = "에너지(kcal)";

fn parse_optional_f64(s: &str) -> Option<f64> {
    s.trim()
        .replace(',', "")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn column_index(headers: &StringRecord, column: &str) -> Option<usize> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == column)
}

fn required_column(headers: &StringRecord, column: &str) -> Result<usize> {
    column_index(headers, column).ok_or_else(|| anyhow::anyhow!("Column '{}' not found", column))
}

/// Loads the rows of one nutrition CSV file, in file order.
pub fn load_nutrition_records(csv_path: &Path) -> Result<Vec<NutritionRecord>> {
    if !csv_path.exists() {
        return Err(anyhow::anyhow!("Nutrition CSV file not found at: {:?}", csv_path));
    }

    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open nutrition CSV file at {:?}", csv_path))?;
    let mut rdr = ReaderBuilder::new().has_headers(true).flexible(true).from_reader(file);

    let headers = rdr.headers()?.clone();
    let name_idx = required_column(&headers, NAME_COL)?;
    let serving_idx = required_column(&headers, SERVING_COL)?;
    let kcal_idx = required_column(&headers, KCAL_COL)?;
    let alt_name_idx = column_index(&headers, ALT_NAME_COL);
    let category_idx = column_index(&headers, CATEGORY_COL);

    let field = |record: &StringRecord, idx: Option<usize>| -> String {
        idx.and_then(|i| record.get(i))
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    };

    let mut records = Vec::new();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result.with_context(|| {
            format!("Failed to read record at row index {} of {:?}", row_index, csv_path)
        })?;

        let name = field(&record, Some(name_idx));
        if name.is_empty() {
            warn!("Skipping row {} of {:?}: empty food name", row_index + 1, csv_path);
            continue;
        }

        let Some(kcal) = record.get(kcal_idx).and_then(parse_optional_f64) else {
            warn!(
                "Skipping '{}' (row {} of {:?}): unreadable kcal value",
                name,
                row_index + 1,
                csv_path
            );
            continue;
        };

        records.push(NutritionRecord {
            name,
            alt_name: field(&record, alt_name_idx),
            category_name: field(&record, category_idx),
            reference_serving: field(&record, Some(serving_idx)),
            reference_calories: kcal,
        });
    }

    Ok(records)
}

/// Loads and concatenates several nutrition CSV files into one table.
pub fn load_nutrition_table<P: AsRef<Path>>(csv_paths: &[P]) -> Result<NutritionTable> {
    let mut all_records = Vec::new();
    for path in csv_paths {
        let path = path.as_ref();
        let records = load_nutrition_records(path)
            .with_context(|| format!("Failed to load nutrition data from {:?}", path))?;
        info!("Loaded {} nutrition records from {:?}", records.len(), path);
        all_records.extend(records);
    }

    if all_records.is_empty() {
        return Err(anyhow::anyhow!("No valid nutrition data loaded"));
    }

    Ok(NutritionTable::new(all_records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn header_line() -> String {
        format!("{},{},{},{},{}", NAME_COL, ALT_NAME_COL, CATEGORY_COL, SERVING_COL, KCAL_COL)
    }

    fn create_test_csv_file() -> Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", header_line())?;
        writeln!(file, "닭가슴살,닭고기,육류,100g,109")?;
        writeln!(file, "우유,우유,유제품,100ml,65.5")?;
        writeln!(file, ",,,100g,10")?; // Empty name
        writeln!(file, "알수없음,,,100g,n/a")?; // Invalid kcal
        writeln!(file, "쌀밥,,,\"1,000g\",\"1,450\"")?;
        file.flush()?;
        Ok(file)
    }

    #[test]
    fn test_load_nutrition_records_success() -> Result<()> {
        let file = create_test_csv_file()?;
        let records = load_nutrition_records(file.path())?;

        assert_eq!(records.len(), 3); // empty-name and invalid-kcal rows skipped

        assert_eq!(records[0].name, "닭가슴살");
        assert_eq!(records[0].alt_name, "닭고기");
        assert_eq!(records[0].category_name, "육류");
        assert_eq!(records[0].reference_serving, "100g");
        assert_eq!(records[0].reference_calories, 109.0);

        assert_eq!(records[1].reference_calories, 65.5);
        assert_eq!(records[2].reference_calories, 1450.0);
        Ok(())
    }

    #[test]
    fn test_load_skips_non_finite_kcal() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{},{},{}", NAME_COL, SERVING_COL, KCAL_COL)?;
        writeln!(file, "a,100g,NaN")?;
        writeln!(file, "b,100g,inf")?;
        writeln!(file, "c,100g,-infinity")?;
        writeln!(file, "d,100g,42")?;
        file.flush()?;

        let records = load_nutrition_records(file.path())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "d");
        assert_eq!(records[0].reference_calories, 42.0);
        Ok(())
    }

    #[test]
    fn test_load_without_optional_columns() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "\u{feff}{},{},{}", NAME_COL, SERVING_COL, KCAL_COL)?;
        writeln!(file, "사과,100g,52")?;
        file.flush()?;

        let records = load_nutrition_records(file.path())?;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "사과");
        assert!(records[0].alt_name.is_empty());
        assert!(records[0].category_name.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_missing_column() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{},{}", NAME_COL, SERVING_COL)?;
        writeln!(file, "사과,100g")?;
        file.flush()?;

        let result = load_nutrition_records(file.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains(&format!("Column '{}' not found", KCAL_COL)));
        Ok(())
    }

    #[test]
    fn test_load_table_concatenates_in_order() -> Result<()> {
        let first = create_test_csv_file()?;
        let mut second = NamedTempFile::new()?;
        writeln!(second, "{}", header_line())?;
        writeln!(second, "고등어,고등어,어류,100g,183")?;
        second.flush()?;

        let table = load_nutrition_table(&[first.path(), second.path()])?;
        assert_eq!(table.len(), 4);
        assert_eq!(table.records()[3].name, "고등어");
        Ok(())
    }

    #[test]
    fn test_load_table_with_only_headers_fails() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "{}", header_line())?;
        file.flush()?;

        let result = load_nutrition_table(&[file.path()]);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("No valid nutrition data loaded"));
        Ok(())
    }

    #[test]
    fn test_load_file_not_found() {
        let path = Path::new("this_file_does_not_exist.csv");
        let result = load_nutrition_records(path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Nutrition CSV file not found"));
    }
}
