//! `letter-recognition-csv` converts the UCI letter-recognition data file into a CSV with a
//! header row and the class label moved to the last column, and loads the converted CSV back
//! into a typed in-memory [`types::DataSet`].
//!
//! ## Conversion
//!
//! Input lines look like `T,2,8,3,5,1,8,13,0,6,6,10,8,0,8,0,8` (label first, 16 attributes).
//! Output starts with the header
//! `x-box,y-box,width,high,onpix,x-bar,y-bar,x2bar,y2bar,xybar,x2ybr,xy2br,x-ege,xegvy,y-ege,yegvx,letter`
//! followed by one row per non-blank input line, e.g. `2,8,3,5,1,8,13,0,6,6,10,8,0,8,0,8,T`.
//!
//! - Lines are trimmed; blank lines are skipped.
//! - Attribute values are copied as text, never parsed.
//! - Rows keep their input order.
//! - By default a line with the wrong number of fields is still written, rotated the same way.
//!   Select [`conversion::FieldCountPolicy::Reject`] to fail instead.
//!
//! ```no_run
//! use letter_recognition_csv::conversion::ConversionRequest;
//!
//! # fn main() -> Result<(), letter_recognition_csv::ConversionError> {
//! // letter-recognition.data -> letter-recognition.csv in the working directory.
//! let stats = ConversionRequest::default().run()?;
//! println!("rows={}", stats.rows_written);
//! # Ok(())
//! # }
//! ```
//!
//! ## Loading and encoding
//!
//! ```no_run
//! use letter_recognition_csv::ingestion::ingest_csv_from_path;
//! use letter_recognition_csv::processing::{encode_dataset, train_test_split};
//! use letter_recognition_csv::types::Schema;
//!
//! # fn main() -> Result<(), letter_recognition_csv::ConversionError> {
//! let ds = ingest_csv_from_path("letter-recognition.csv", &Schema::letter_recognition())?;
//! let samples = encode_dataset(&ds)?;
//! let (train, test) = train_test_split(&samples, 0.8, 42);
//! println!("train={} test={}", train.len(), test.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`conversion`]: the reformatter, options and observer hooks
//! - [`ingestion`]: loading converted CSV files
//! - [`processing`]: line filtering, record rotation, encodings and splits
//! - [`types`]: attribute names, schema and dataset types
//! - [`error`]: the error type shared by all of the above

pub mod conversion;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod types;

pub use error::{ConversionError, ConversionResult};
