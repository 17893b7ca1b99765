//! Loading a converted CSV back into a [`DataSet`].

use std::path::Path;

use crate::error::{ConversionError, ConversionResult};
use crate::types::{DataSet, DataType, Schema, Value};

/// Ingest a converted CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all schema fields (order can differ, surrounding spaces are ignored).
/// - Records with fewer fields than the header are skipped.
/// - Each value is parsed according to the schema field type.
pub fn ingest_csv_from_path(path: impl AsRef<Path>, schema: &Schema) -> ConversionResult<DataSet> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    ingest_csv_from_reader(&mut rdr, schema)
}

/// Ingest CSV data from an existing CSV reader.
///
/// The reader should be built with `flexible(true)` if short records may be present; otherwise
/// the CSV reader itself rejects them.
pub fn ingest_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
    schema: &Schema,
) -> ConversionResult<DataSet> {
    let headers = rdr.headers()?.clone();
    let col_idxs = map_columns(&headers, schema)?;

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;
        if record.len() < headers.len() {
            continue;
        }

        let mut row: Vec<Value> = Vec::with_capacity(schema.fields.len());
        for (field, &csv_idx) in schema.fields.iter().zip(col_idxs.iter()) {
            let raw = record.get(csv_idx).unwrap_or("");
            row.push(parse_typed_value(user_row, &field.name, &field.data_type, raw)?);
        }
        rows.push(row);
    }

    Ok(DataSet::new(schema.clone(), rows))
}

/// Position of every schema field in `headers` (columns may be re-ordered).
///
/// All missing columns are reported together, in schema order.
fn map_columns(headers: &csv::StringRecord, schema: &Schema) -> ConversionResult<Vec<usize>> {
    let mut col_idxs = Vec::with_capacity(schema.len());
    let mut missing = Vec::new();
    for name in schema.field_names() {
        match headers.iter().position(|h| h.trim() == name) {
            Some(idx) => col_idxs.push(idx),
            None => missing.push(name),
        }
    }

    if missing.is_empty() {
        Ok(col_idxs)
    } else {
        Err(ConversionError::SchemaMismatch {
            message: format!(
                "missing required columns {missing:?}. headers={:?}",
                headers.iter().collect::<Vec<_>>()
            ),
        })
    }
}

fn parse_typed_value(
    row: usize,
    column: &str,
    data_type: &DataType,
    raw: &str,
) -> ConversionResult<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Value::Null);
    }

    match data_type {
        DataType::Utf8 => Ok(Value::Utf8(trimmed.to_owned())),
        DataType::Float64 => trimmed.parse::<f64>().map(Value::Float64).map_err(|e| {
            ConversionError::ParseError {
                row,
                column: column.to_owned(),
                raw: raw.to_owned(),
                message: e.to_string(),
            }
        }),
    }
}
