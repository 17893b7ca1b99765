//! Conversion entrypoints and implementation.
//!
//! Most callers should use [`convert_from_path`] (from [`unified`]) which:
//!
//! - reads the raw letter-recognition file (label first, no header)
//! - writes a CSV with the 17-name header and the label moved to the last column
//! - optionally reports success/failure/alerts to a [`ConversionObserver`]
//!
//! The streaming core lives in [`reformat`] and works on any [`std::io::BufRead`] source and
//! [`csv::Writer`] sink.

pub mod observability;
pub mod reformat;
pub mod unified;

pub use observability::{
    CompositeObserver, ConversionContext, ConversionObserver, ConversionSeverity, ConversionStats, FileObserver,
    MalformedRecord, StdErrObserver,
};
pub use reformat::{csv_writer_builder, reformat_path, reformat_reader, FieldCountPolicy, LineTerminator};
pub use unified::{
    convert_from_path, severity_for_error, ConversionOptions, ConversionRequest, DEFAULT_INPUT_PATH,
    DEFAULT_OUTPUT_PATH,
};
