//! Dataset schema declarations.
//!
//! The caller states up front which columns the survey file must contain and
//! what class each one belongs to. Loading enforces the declaration instead
//! of trusting type inference; columns not declared here pass through with
//! whatever type the reader infers.

/// Gender of the respondent (categorical).
pub const GENDER: &str = "Gender";
/// Occupation of the respondent (categorical).
pub const OCCUPATION: &str = "Occupation";
/// BMI category label (categorical).
pub const BMI_CATEGORY: &str = "BMI Category";
/// Reported sleep disorder, if any (categorical).
pub const SLEEP_DISORDER: &str = "Sleep Disorder";
/// Nightly sleep duration in hours (float).
pub const SLEEP_DURATION: &str = "Sleep Duration";
/// Self-rated sleep quality on a 1-10 scale (integer).
pub const QUALITY_OF_SLEEP: &str = "Quality of Sleep";
/// Daily physical activity in minutes (integer).
pub const PHYSICAL_ACTIVITY: &str = "Physical Activity Level";
/// Self-rated stress on a 1-10 scale (integer).
pub const STRESS_LEVEL: &str = "Stress Level";
/// Average daily step count (integer).
pub const DAILY_STEPS: &str = "Daily Steps";

/// Categorical columns eligible for integer encoding, in encode order.
pub const CATEGORICAL_COLUMNS: [&str; 4] = [GENDER, OCCUPATION, BMI_CATEGORY, SLEEP_DISORDER];

/// Columns drawn in the pairwise relationship grid.
pub const PAIRPLOT_COLUMNS: [&str; 5] = [
    SLEEP_DURATION,
    QUALITY_OF_SLEEP,
    PHYSICAL_ACTIVITY,
    STRESS_LEVEL,
    DAILY_STEPS,
];

/// Predictor columns for the sleep-quality regression, in coefficient order.
pub const REGRESSION_PREDICTORS: [&str; 3] = [PHYSICAL_ACTIVITY, STRESS_LEVEL, GENDER];

/// Class of values a declared column holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Whole-number measurements, stored as Int64.
    Integer,
    /// Continuous measurements, stored as Float64.
    Float,
    /// Textual labels, later replaced by integer codes.
    Categorical,
}

impl ColumnKind {
    /// Human-readable name used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            ColumnKind::Integer => "Int64",
            ColumnKind::Float => "Float64",
            ColumnKind::Categorical => "String",
        }
    }
}

/// Declaration for a single expected column.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    /// Column name as it appears in the CSV header
    pub name: String,
    /// Value class the column must conform to
    pub kind: ColumnKind,
    /// Whether loading fails if the column is absent
    pub required: bool,
}

/// Set of column declarations enforced at load time.
#[derive(Debug, Clone, Default)]
pub struct DatasetSchema {
    columns: Vec<ColumnSpec>,
}

impl DatasetSchema {
    /// Create an empty schema (every column passes through as inferred).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column declaration (builder style).
    pub fn with_column(mut self, name: &str, kind: ColumnKind, required: bool) -> Self {
        self.columns.push(ColumnSpec {
            name: name.to_string(),
            kind,
            required,
        });
        self
    }

    /// Schema for the sleep-health survey file.
    ///
    /// The five numeric measurement columns are required; the categorical
    /// columns are optional so that files without, say, an `Occupation`
    /// column still load (the stages that need them fail individually).
    pub fn sleep_survey() -> Self {
        Self::new()
            .with_column(GENDER, ColumnKind::Categorical, false)
            .with_column(OCCUPATION, ColumnKind::Categorical, false)
            .with_column(BMI_CATEGORY, ColumnKind::Categorical, false)
            .with_column(SLEEP_DISORDER, ColumnKind::Categorical, false)
            .with_column(SLEEP_DURATION, ColumnKind::Float, true)
            .with_column(QUALITY_OF_SLEEP, ColumnKind::Integer, true)
            .with_column(PHYSICAL_ACTIVITY, ColumnKind::Integer, true)
            .with_column(STRESS_LEVEL, ColumnKind::Integer, true)
            .with_column(DAILY_STEPS, ColumnKind::Integer, true)
    }

    /// All declarations in insertion order.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Look up the declaration for a column name.
    pub fn get(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of all required columns.
    pub fn required_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.required)
            .map(|c| c.name.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sleep_survey_declares_nine_columns() {
        let schema = DatasetSchema::sleep_survey();
        assert_eq!(schema.columns().len(), 9);
    }

    #[test]
    fn test_numeric_columns_are_required() {
        let schema = DatasetSchema::sleep_survey();
        let required = schema.required_columns();
        assert_eq!(required.len(), 5);
        assert!(required.contains(&QUALITY_OF_SLEEP));
        assert!(required.contains(&SLEEP_DURATION));
        assert!(!required.contains(&GENDER));
    }

    #[test]
    fn test_lookup_by_name() {
        let schema = DatasetSchema::sleep_survey();
        let spec = schema.get(SLEEP_DURATION).unwrap();
        assert_eq!(spec.kind, ColumnKind::Float);
        assert!(spec.required);
        assert!(schema.get("Favorite Color").is_none());
    }

    #[test]
    fn test_kind_describe() {
        assert_eq!(ColumnKind::Integer.describe(), "Int64");
        assert_eq!(ColumnKind::Float.describe(), "Float64");
        assert_eq!(ColumnKind::Categorical.describe(), "String");
    }

    #[test]
    fn test_builder_preserves_order() {
        let schema = DatasetSchema::new()
            .with_column("a", ColumnKind::Integer, true)
            .with_column("b", ColumnKind::Float, false);
        assert_eq!(schema.columns()[0].name, "a");
        assert_eq!(schema.columns()[1].name, "b");
    }
}
