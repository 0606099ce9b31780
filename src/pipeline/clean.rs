//! Row cleaning and categorical encoding.
//!
//! This module handles the two mutations applied to the raw survey table:
//! dropping incomplete rows and replacing categorical label columns with
//! integer codes. The label-to-code assignment for every encoded column is
//! returned so later stages can translate codes back to labels.

use polars::prelude::*;
use std::collections::HashMap;

use super::error::AnalysisError;

/// Label-to-code assignment for one encoded column.
///
/// Codes are the indices into the sorted distinct labels, so `code_of` and
/// `label_of` are exact inverses over the column's value set.
#[derive(Debug, Clone)]
pub struct ColumnEncoding {
    column: String,
    labels: Vec<String>,
}

impl ColumnEncoding {
    /// Name of the encoded column.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Labels in code order (index = code).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when the column had no values to encode.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Code assigned to a label.
    pub fn code_of(&self, label: &str) -> Option<u32> {
        self.labels.iter().position(|l| l == label).map(|i| i as u32)
    }

    /// Label behind a code.
    pub fn label_of(&self, code: u32) -> Option<&str> {
        self.labels.get(code as usize).map(|l| l.as_str())
    }
}

/// Encodings for all columns replaced during categorical encoding.
#[derive(Debug, Clone, Default)]
pub struct EncodingMap {
    encodings: Vec<ColumnEncoding>,
}

impl EncodingMap {
    /// Encoding for a column, if that column was encoded.
    pub fn get(&self, column: &str) -> Option<&ColumnEncoding> {
        self.encodings.iter().find(|e| e.column == column)
    }

    /// Names of the encoded columns, in encode order.
    pub fn columns(&self) -> Vec<&str> {
        self.encodings.iter().map(|e| e.column.as_str()).collect()
    }

    /// Iterate over the encodings in encode order.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnEncoding> {
        self.encodings.iter()
    }

    /// Number of encoded columns.
    pub fn len(&self) -> usize {
        self.encodings.len()
    }

    /// True when no column was encoded.
    pub fn is_empty(&self) -> bool {
        self.encodings.is_empty()
    }
}

/// Remove every row that has a null in any column.
///
/// The result is guaranteed null-free and may be empty. Running it on an
/// already complete table returns an identical copy.
pub fn drop_incomplete(df: &DataFrame) -> Result<DataFrame, AnalysisError> {
    if df.height() == 0 {
        return Ok(df.clone());
    }

    let mut keep: Option<BooleanChunked> = None;
    for column in df.get_columns() {
        if column.null_count() == 0 {
            continue;
        }
        let not_null = column.as_materialized_series().is_not_null();
        keep = Some(match keep {
            Some(acc) => &acc & &not_null,
            None => not_null,
        });
    }

    match keep {
        Some(mask) => Ok(df.filter(&mask)?),
        None => Ok(df.clone()),
    }
}

/// Replace categorical label columns with integer codes, in place.
///
/// Each named column that is present and holds strings is replaced by a
/// UInt32 column of codes; codes follow the SORTED order of the distinct
/// labels, so the assignment is stable under row reordering. Columns that
/// are absent or already numeric are skipped without error.
///
/// Must run on a null-free table (after [`drop_incomplete`]); a null in a
/// column selected for encoding is reported as a numeric failure.
pub fn encode_categorical(
    df: &mut DataFrame,
    columns: &[&str],
) -> Result<EncodingMap, AnalysisError> {
    let mut map = EncodingMap::default();

    for &name in columns {
        let present = df.get_column_names().iter().any(|n| n.as_str() == name);
        if !present {
            continue;
        }

        let column = df.column(name)?;
        if column.dtype() != &DataType::String {
            continue;
        }

        if column.null_count() > 0 {
            return Err(AnalysisError::numeric(
                "categorical encoding",
                format!("column '{}' still contains nulls", name),
            ));
        }

        let unique = column.unique()?;
        let mut labels: Vec<String> = unique
            .str()?
            .into_iter()
            .flatten()
            .map(|s| s.to_string())
            .collect();
        labels.sort();

        let code_for: HashMap<&str, u32> = labels
            .iter()
            .enumerate()
            .map(|(i, l)| (l.as_str(), i as u32))
            .collect();

        let codes = column
            .str()?
            .into_iter()
            .map(|value| {
                value
                    .and_then(|s| code_for.get(s).copied())
                    .ok_or_else(|| {
                        AnalysisError::numeric(
                            "categorical encoding",
                            format!("value in column '{}' is outside its label set", name),
                        )
                    })
            })
            .collect::<Result<Vec<u32>, AnalysisError>>()?;

        df.with_column(Series::new(name.into(), codes))?;

        map.encodings.push(ColumnEncoding {
            column: name.to_string(),
            labels,
        });
    }

    Ok(map)
}
