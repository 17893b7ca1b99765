//! Loading converted files.
//!
//! [`csv::ingest_csv_from_path`] reads a converted CSV (header + rows) into a typed
//! [`crate::types::DataSet`] using a [`crate::types::Schema`], usually
//! [`crate::types::Schema::letter_recognition`].

pub mod csv;

pub use self::csv::{ingest_csv_from_path, ingest_csv_from_reader};
