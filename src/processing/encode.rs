//! Training encodings for a loaded letter-recognition [`DataSet`].
//!
//! Attributes in the letter-recognition data are integers in `0..=15`; they are scaled into
//! `[0, 1]`. Labels `A`..=`Z` become one-hot target vectors over 26 classes.

use crate::error::{ConversionError, ConversionResult};
use crate::types::{DataSet, LABEL_COLUMN, Value};

/// Divisor applied to every attribute value.
pub const FEATURE_SCALE: f64 = 15.0;

/// Number of label classes (`A`..=`Z`).
pub const CLASS_COUNT: usize = 26;

/// One sample ready for a classifier.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedSample {
    /// Scaled attribute values, in schema order.
    pub inputs: Vec<f64>,
    /// One-hot target of length [`CLASS_COUNT`].
    pub target: Vec<f64>,
    /// The label letter.
    pub label: char,
}

/// Class index of a label (`A` -> 0, ..., `Z` -> 25).
///
/// Only the first character is considered, after trimming.
pub fn label_index(label: &str) -> Option<usize> {
    let c = label.trim().chars().next()?;
    c.is_ascii_uppercase().then(|| (c as u8 - b'A') as usize)
}

/// One-hot vector of length [`CLASS_COUNT`] with a `1.0` at `index`.
///
/// # Panics
///
/// Panics if `index >= CLASS_COUNT`.
pub fn one_hot(index: usize) -> Vec<f64> {
    assert!(index < CLASS_COUNT, "class index {index} out of range");
    let mut v = vec![0.0; CLASS_COUNT];
    v[index] = 1.0;
    v
}

/// Encode every row of `dataset`.
///
/// All columns other than `letter` are treated as attributes and must be non-null `Float64`.
/// Every row must have exactly one value per schema field.
/// Row numbers in errors are 1-based data rows plus one for the header, matching the loader.
pub fn encode_dataset(dataset: &DataSet) -> ConversionResult<Vec<EncodedSample>> {
    let label_idx = dataset
        .schema
        .index_of(LABEL_COLUMN)
        .ok_or_else(|| ConversionError::SchemaMismatch {
            message: format!("dataset has no '{LABEL_COLUMN}' column"),
        })?;

    let mut out = Vec::with_capacity(dataset.row_count());
    for (row_idx0, row) in dataset.rows.iter().enumerate() {
        let user_row = row_idx0 + 2;

        if row.len() != dataset.schema.len() {
            return Err(ConversionError::SchemaMismatch {
                message: format!(
                    "row {user_row} has {} values but the schema has {} fields",
                    row.len(),
                    dataset.schema.len()
                ),
            });
        }

        let mut inputs = Vec::with_capacity(row.len().saturating_sub(1));
        for (col, (field, value)) in dataset.schema.fields.iter().zip(row).enumerate() {
            if col == label_idx {
                continue;
            }
            match value {
                Value::Float64(v) => inputs.push(v / FEATURE_SCALE),
                other => {
                    return Err(ConversionError::ParseError {
                        row: user_row,
                        column: field.name.clone(),
                        raw: format!("{other:?}"),
                        message: "expected a numeric attribute".to_string(),
                    });
                }
            }
        }

        let raw_label = match row.get(label_idx) {
            Some(Value::Utf8(s)) => s.as_str(),
            _ => "",
        };
        let (label, index) = raw_label
            .trim()
            .chars()
            .next()
            .zip(label_index(raw_label))
            .ok_or_else(|| ConversionError::ParseError {
                row: user_row,
                column: LABEL_COLUMN.to_string(),
                raw: raw_label.to_string(),
                message: "expected a label in A-Z".to_string(),
            })?;

        out.push(EncodedSample {
            inputs,
            target: one_hot(index),
            label,
        });
    }
    Ok(out)
}
