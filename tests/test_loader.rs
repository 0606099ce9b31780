//! Unit tests for dataset loading and schema enforcement

use hypnos::pipeline::{dataset_stats, load_dataset, AnalysisError, DatasetSchema};
use polars::prelude::*;
use std::io::Write;
use tempfile::TempDir;

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_load_survey_csv() {
    let mut df = common::create_survey_dataframe();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    let schema = DatasetSchema::sleep_survey();
    let loaded = load_dataset(&csv_path, &schema, 100).unwrap();

    common::assert_shape(&loaded, 12, 9);
    common::assert_has_columns(&loaded, &["Gender", "Occupation", "Quality of Sleep"]);
    assert_eq!(
        loaded.column("Quality of Sleep").unwrap().dtype(),
        &DataType::Int64
    );
    assert_eq!(
        loaded.column("Sleep Duration").unwrap().dtype(),
        &DataType::Float64
    );
    assert_eq!(loaded.column("Gender").unwrap().dtype(), &DataType::String);
}

#[test]
fn test_load_keeps_missing_cells_as_nulls() {
    let mut df = common::create_survey_with_missing();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    let schema = DatasetSchema::sleep_survey();
    let loaded = load_dataset(&csv_path, &schema, 100).unwrap();

    assert_eq!(loaded.height(), 12, "Loading must not drop rows");
    assert_eq!(loaded.column("Gender").unwrap().null_count(), 1);
}

#[test]
fn test_dataset_stats() {
    let df = common::create_survey_dataframe();

    let stats = dataset_stats(&df);

    assert_eq!(stats.rows, 12);
    assert_eq!(stats.cols, 9);
    assert!(
        stats.memory_mb >= 0.0,
        "Memory estimate should be non-negative"
    );
}

#[test]
fn test_nonexistent_file() {
    let schema = DatasetSchema::sleep_survey();

    let result = load_dataset(
        std::path::Path::new("/nonexistent/path/to/sleep.csv"),
        &schema,
        100,
    );

    assert!(matches!(result, Err(AnalysisError::FileAccess { .. })));
}

#[test]
fn test_missing_required_column() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("partial.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(file, "Gender,Sleep Duration").unwrap();
    writeln!(file, "Male,7.1").unwrap();
    drop(file);

    let schema = DatasetSchema::sleep_survey();
    let result = load_dataset(&csv_path, &schema, 100);

    assert!(matches!(result, Err(AnalysisError::MissingColumn { .. })));
}

#[test]
fn test_text_in_numeric_column() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("bad_types.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(
        file,
        "Gender,Occupation,BMI Category,Sleep Disorder,Sleep Duration,Quality of Sleep,Physical Activity Level,Stress Level,Daily Steps"
    )
    .unwrap();
    writeln!(file, "Male,Doctor,Normal,None,7.1,high,60,4,8000").unwrap();
    writeln!(file, "Female,Nurse,Normal,None,6.4,low,40,6,6000").unwrap();
    drop(file);

    let schema = DatasetSchema::sleep_survey();
    let result = load_dataset(&csv_path, &schema, 100);

    assert!(matches!(result, Err(AnalysisError::ColumnType { .. })));
}

#[test]
fn test_undeclared_columns_pass_through() {
    let temp_dir = TempDir::new().unwrap();
    let csv_path = temp_dir.path().join("extra.csv");

    let mut file = std::fs::File::create(&csv_path).unwrap();
    writeln!(
        file,
        "Person ID,Sleep Duration,Quality of Sleep,Physical Activity Level,Stress Level,Daily Steps"
    )
    .unwrap();
    writeln!(file, "p-001,7.1,8,60,4,8000").unwrap();
    writeln!(file, "p-002,6.4,6,40,6,6000").unwrap();
    drop(file);

    let schema = DatasetSchema::sleep_survey();
    let loaded = load_dataset(&csv_path, &schema, 100).unwrap();

    common::assert_has_columns(&loaded, &["Person ID"]);
    assert_eq!(
        loaded.column("Person ID").unwrap().dtype(),
        &DataType::String
    );
}

#[test]
fn test_schema_inference_length() {
    let mut df = common::create_survey_dataframe();
    let (_temp_dir, csv_path) = common::create_temp_csv(&mut df);

    let schema = DatasetSchema::sleep_survey();
    // 0 means scan the whole file
    let short = load_dataset(&csv_path, &schema, 2).unwrap();
    let full = load_dataset(&csv_path, &schema, 0).unwrap();

    assert_eq!(short.height(), 12);
    assert_eq!(full.height(), 12);
    assert_eq!(short.get_column_names(), full.get_column_names());
}
