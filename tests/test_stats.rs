//! Integration tests for the statistical analysis stage

use hypnos::pipeline::{
    anova_one_way, binary_groups, correlation_matrix, encode_categorical, group_values,
    pearson_columns, t_test_ind, CATEGORICAL_COLUMNS, GENDER, OCCUPATION, PHYSICAL_ACTIVITY,
    QUALITY_OF_SLEEP,
};

#[path = "common/mod.rs"]
mod common;

fn encoded_survey() -> polars::prelude::DataFrame {
    let mut df = common::create_survey_dataframe();
    encode_categorical(&mut df, &CATEGORICAL_COLUMNS).unwrap();
    df
}

#[test]
fn test_activity_correlates_with_quality() {
    let df = encoded_survey();

    let r = pearson_columns(&df, PHYSICAL_ACTIVITY, QUALITY_OF_SLEEP).unwrap();

    // The fixture pairs rising activity with rising quality
    assert!(r > 0.95, "Expected strong positive correlation, got {}", r);
    assert!(r <= 1.0);
}

#[test]
fn test_binary_groups_split_by_gender_code() {
    let df = encoded_survey();

    let (female, male) = binary_groups(&df, GENDER, QUALITY_OF_SLEEP).unwrap();

    assert_eq!(female.len(), 6);
    assert_eq!(male.len(), 6);
    // Row 0 is Male with quality 8, row 1 Female with quality 5
    assert_eq!(male[0], 8.0);
    assert_eq!(female[0], 5.0);
}

#[test]
fn test_gender_t_test_on_survey() {
    let df = encoded_survey();

    let (female, male) = binary_groups(&df, GENDER, QUALITY_OF_SLEEP).unwrap();
    let result = t_test_ind(&female, &male).unwrap();

    assert!(result.t.is_finite());
    assert!(result.p > 0.0 && result.p <= 1.0);
}

#[test]
fn test_group_values_buckets_by_occupation() {
    let df = encoded_survey();

    let groups = group_values(&df, OCCUPATION, QUALITY_OF_SLEEP).unwrap();

    assert_eq!(groups.len(), 3, "Three occupations in the fixture");
    // Codes ascend: Doctor = 0, Engineer = 1, Nurse = 2
    assert_eq!(groups[0].0, 0);
    assert_eq!(groups[0].1, [8.0, 4.0, 4.0, 9.0]);
    assert_eq!(groups[1].1, [9.0, 8.0, 6.0, 7.0]);
    assert_eq!(groups[2].1, [5.0, 6.0, 7.0, 5.0]);
}

#[test]
fn test_occupation_anova_on_survey() {
    let df = encoded_survey();

    let groups: Vec<Vec<f64>> = group_values(&df, OCCUPATION, QUALITY_OF_SLEEP)
        .unwrap()
        .into_iter()
        .map(|(_, values)| values)
        .collect();
    let result = anova_one_way(&groups).unwrap();

    assert!(result.f >= 0.0);
    assert!(result.f.is_finite());
    assert!(result.p > 0.0 && result.p <= 1.0);
}

#[test]
fn test_correlation_matrix_covers_all_numeric_columns() {
    let df = encoded_survey();

    let (names, matrix) = correlation_matrix(&df).unwrap();

    // Four encoded plus five numeric columns, none constant
    assert_eq!(names.len(), 9);
    for i in 0..names.len() {
        assert!(
            (matrix[(i, i)] - 1.0).abs() < 1e-9,
            "Diagonal must be 1, got {} for {}",
            matrix[(i, i)],
            names[i]
        );
        for j in 0..names.len() {
            assert!(
                (matrix[(i, j)] - matrix[(j, i)]).abs() < 1e-9,
                "Matrix must be symmetric"
            );
            assert!(matrix[(i, j)].abs() <= 1.0 + 1e-9);
        }
    }
}
