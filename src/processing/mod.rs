//! Line and record transformations.
//!
//! The conversion pass is built from two pieces:
//!
//! - [`filter`]: a lazy iterator over the non-blank, trimmed lines of an input
//! - [`map`]: splitting a line into an [`InputRecord`] and rotating the label to the end
//!
//! For data that has already been converted and loaded into a [`crate::types::DataSet`]:
//!
//! - [`encode`]: scaled attribute vectors and one-hot labels
//! - [`split`]: seeded train/test partitioning
//!
//! ## Example: rotate one record
//!
//! ```rust
//! use letter_recognition_csv::processing::{non_blank_lines, rotate_label_last};
//!
//! let input = "T,2,8,3,5,1,8,13,0,6,6,10,8,0,8,0,8\n\n";
//! let rows: Vec<String> = non_blank_lines(input.as_bytes())
//!     .map(|line| rotate_label_last(&line.unwrap().text).fields().join(","))
//!     .collect();
//! assert_eq!(rows, vec!["2,8,3,5,1,8,13,0,6,6,10,8,0,8,0,8,T"]);
//! ```

pub mod encode;
pub mod filter;
pub mod map;
pub mod split;

pub use encode::{encode_dataset, label_index, one_hot, EncodedSample, CLASS_COUNT, FEATURE_SCALE};
pub use filter::{is_blank, non_blank_lines, NonBlankLines, SourceLine};
pub use map::{rotate_label_last, InputRecord, OutputRecord};
pub use split::train_test_split;
