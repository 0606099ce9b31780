//! Shared test utilities and fixture generators

use polars::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a small survey DataFrame with known characteristics for testing
///
/// Twelve complete rows covering:
/// - `Gender`: two labels (Female/Male)
/// - `Occupation`: three labels (Doctor/Nurse/Engineer)
/// - `BMI Category` and `Sleep Disorder`: assorted labels
/// - the five numeric columns with varied, non-constant values
pub fn create_survey_dataframe() -> DataFrame {
    df! {
        "Gender" => ["Male", "Female", "Male", "Female", "Male", "Female",
                     "Male", "Female", "Male", "Female", "Male", "Female"],
        "Occupation" => ["Doctor", "Nurse", "Engineer", "Doctor", "Nurse", "Engineer",
                         "Doctor", "Nurse", "Engineer", "Doctor", "Nurse", "Engineer"],
        "BMI Category" => ["Normal", "Overweight", "Normal", "Obese", "Normal", "Overweight",
                           "Normal", "Normal", "Overweight", "Normal", "Obese", "Normal"],
        "Sleep Disorder" => ["None", "Insomnia", "None", "None", "Sleep Apnea", "None",
                             "Insomnia", "None", "None", "None", "Sleep Apnea", "None"],
        "Sleep Duration" => [7.1f64, 6.2, 7.5, 6.0, 6.8, 7.2, 5.9, 7.0, 6.5, 7.4, 6.1, 6.9],
        "Quality of Sleep" => [8i64, 5, 9, 4, 6, 8, 4, 7, 6, 9, 5, 7],
        "Physical Activity Level" => [75i64, 30, 80, 25, 50, 70, 20, 60, 45, 85, 35, 55],
        "Stress Level" => [3i64, 8, 2, 9, 5, 3, 8, 4, 6, 2, 7, 5],
        "Daily Steps" => [9000i64, 4200, 10000, 3800, 6500, 8800, 3500, 7200, 5600, 9800, 4500, 7000],
    }
    .unwrap()
}

/// Same survey, but the fourth row has a blank Gender cell
pub fn create_survey_with_missing() -> DataFrame {
    df! {
        "Gender" => [Some("Male"), Some("Female"), Some("Male"), None, Some("Male"), Some("Female"),
                     Some("Male"), Some("Female"), Some("Male"), Some("Female"), Some("Male"), Some("Female")],
        "Occupation" => ["Doctor", "Nurse", "Engineer", "Doctor", "Nurse", "Engineer",
                         "Doctor", "Nurse", "Engineer", "Doctor", "Nurse", "Engineer"],
        "BMI Category" => ["Normal", "Overweight", "Normal", "Obese", "Normal", "Overweight",
                           "Normal", "Normal", "Overweight", "Normal", "Obese", "Normal"],
        "Sleep Disorder" => ["None", "Insomnia", "None", "None", "Sleep Apnea", "None",
                             "Insomnia", "None", "None", "None", "Sleep Apnea", "None"],
        "Sleep Duration" => [7.1f64, 6.2, 7.5, 6.0, 6.8, 7.2, 5.9, 7.0, 6.5, 7.4, 6.1, 6.9],
        "Quality of Sleep" => [8i64, 5, 9, 4, 6, 8, 4, 7, 6, 9, 5, 7],
        "Physical Activity Level" => [75i64, 30, 80, 25, 50, 70, 20, 60, 45, 85, 35, 55],
        "Stress Level" => [3i64, 8, 2, 9, 5, 3, 8, 4, 6, 2, 7, 5],
        "Daily Steps" => [9000i64, 4200, 10000, 3800, 6500, 8800, 3500, 7200, 5600, 9800, 4500, 7000],
    }
    .unwrap()
}

/// Create a temporary directory with a test CSV file
pub fn create_temp_csv(df: &mut DataFrame) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("test_data.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    CsvWriter::new(&mut file).finish(df).unwrap();

    (temp_dir, csv_path)
}

/// Assert that a DataFrame has expected shape
pub fn assert_shape(df: &DataFrame, expected_rows: usize, expected_cols: usize) {
    let (rows, cols) = df.shape();
    assert_eq!(
        rows, expected_rows,
        "Row count mismatch: expected {}, got {}",
        expected_rows, rows
    );
    assert_eq!(
        cols, expected_cols,
        "Column count mismatch: expected {}, got {}",
        expected_cols, cols
    );
}

/// Assert that a DataFrame contains specific columns
pub fn assert_has_columns(df: &DataFrame, expected_cols: &[&str]) {
    let actual_cols: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
    for col in expected_cols {
        assert!(
            actual_cols.contains(&col.to_string()),
            "Missing expected column: '{}'. Actual columns: {:?}",
            col,
            actual_cols
        );
    }
}
