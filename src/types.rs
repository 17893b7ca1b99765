//! Core data model types.
//!
//! The letter-recognition layout is fixed: 16 numeric attributes followed by the `letter` label.
//! [`ATTRIBUTE_NAMES`] is that layout in output order, and [`Schema::letter_recognition`] is the
//! typed form used when loading a converted file back into a [`DataSet`].

/// Column names of the converted file, in output order (features first, label last).
pub const ATTRIBUTE_NAMES: [&str; 17] = [
    "x-box", "y-box", "width", "high", "onpix", "x-bar", "y-bar", "x2bar", "y2bar", "xybar",
    "x2ybr", "xy2br", "x-ege", "xegvy", "y-ege", "yegvx", "letter",
];

/// Number of fields in a well-formed record.
pub const RECORD_WIDTH: usize = ATTRIBUTE_NAMES.len();

/// Number of numeric attributes in a well-formed record.
pub const FEATURE_COUNT: usize = RECORD_WIDTH - 1;

/// Name of the label column.
pub const LABEL_COLUMN: &str = "letter";

/// Logical data type for a schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit floating point number.
    Float64,
    /// UTF-8 string.
    Utf8,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// A list of fields describing the expected shape of a converted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// The letter-recognition schema: every attribute is `Float64`, `letter` is `Utf8`.
    pub fn letter_recognition() -> Self {
        let fields = ATTRIBUTE_NAMES
            .iter()
            .map(|&name| {
                let data_type = if name == LABEL_COLUMN {
                    DataType::Utf8
                } else {
                    DataType::Float64
                };
                Field::new(name, data_type)
            })
            .collect();
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A single typed value in a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing/empty value.
    Null,
    /// 64-bit float.
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate the values of one column, by name.
    ///
    /// Returns `None` if the schema has no such column.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a Value> + 'a> {
        let idx = self.schema.index_of(name)?;
        Some(self.rows.iter().filter_map(move |row| row.get(idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_schema_matches_attribute_names() {
        let schema = Schema::letter_recognition();
        assert_eq!(schema.len(), RECORD_WIDTH);
        assert!(schema.field_names().eq(ATTRIBUTE_NAMES.iter().copied()));
        assert_eq!(schema.index_of("x-box"), Some(0));
        assert_eq!(schema.index_of(LABEL_COLUMN), Some(FEATURE_COUNT));
        assert_eq!(schema.fields[FEATURE_COUNT].data_type, DataType::Utf8);
        assert!(
            schema.fields[..FEATURE_COUNT]
                .iter()
                .all(|f| f.data_type == DataType::Float64)
        );
    }

    #[test]
    fn column_iterates_values_by_name() {
        let schema = Schema::new(vec![
            Field::new("onpix", DataType::Float64),
            Field::new("letter", DataType::Utf8),
        ]);
        let ds = DataSet::new(
            schema,
            vec![
                vec![Value::Float64(1.0), Value::Utf8("A".to_string())],
                vec![Value::Null, Value::Utf8("B".to_string())],
            ],
        );

        let letters: Vec<&Value> = ds.column("letter").unwrap().collect();
        assert_eq!(
            letters,
            vec![&Value::Utf8("A".to_string()), &Value::Utf8("B".to_string())]
        );
        assert!(ds.column("missing").is_none());
    }
}
