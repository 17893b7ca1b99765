//! Path-based conversion entrypoint.
//!
//! Most callers should use [`convert_from_path`] (or [`ConversionRequest::run`]), which wraps
//! [`super::reformat::reformat_path`] and reports the outcome to an optional
//! [`ConversionObserver`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{ConversionError, ConversionResult};

use super::observability::{ConversionContext, ConversionObserver, ConversionSeverity, ConversionStats};
use super::reformat::{FieldCountPolicy, LineTerminator, reformat_path};

/// Raw data file read by the binary.
pub const DEFAULT_INPUT_PATH: &str = "letter-recognition.data";

/// CSV file written by the binary.
pub const DEFAULT_OUTPUT_PATH: &str = "letter-recognition.csv";

/// Options controlling a conversion run.
///
/// Use [`Default`] for the standard behavior: malformed records pass through, CRLF
/// terminators, no observer.
#[derive(Clone)]
pub struct ConversionOptions {
    /// Handling of records whose field count is not 17.
    pub field_count_policy: FieldCountPolicy,
    /// Output record terminator.
    pub terminator: LineTerminator,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ConversionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: ConversionSeverity,
}

impl fmt::Debug for ConversionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionOptions")
            .field("field_count_policy", &self.field_count_policy)
            .field("terminator", &self.terminator)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            field_count_policy: FieldCountPolicy::default(),
            terminator: LineTerminator::default(),
            observer: None,
            alert_at_or_above: ConversionSeverity::Critical,
        }
    }
}

/// Convert `input` into a header-annotated CSV at `output`.
///
/// When an observer is configured, this function reports:
///
/// - `on_malformed` for each record written with an unexpected field count
/// - `on_success` on success, with the run stats
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use letter_recognition_csv::conversion::{convert_from_path, ConversionOptions};
///
/// # fn main() -> Result<(), letter_recognition_csv::ConversionError> {
/// let stats = convert_from_path(
///     "letter-recognition.data",
///     "letter-recognition.csv",
///     &ConversionOptions::default(),
/// )?;
/// println!("rows={}", stats.rows_written);
/// # Ok(())
/// # }
/// ```
///
/// ## Strict field counts + stderr logging
///
/// ```no_run
/// use std::sync::Arc;
///
/// use letter_recognition_csv::conversion::{
///     convert_from_path, ConversionOptions, ConversionSeverity, FieldCountPolicy, StdErrObserver,
/// };
///
/// # fn main() -> Result<(), letter_recognition_csv::ConversionError> {
/// let opts = ConversionOptions {
///     field_count_policy: FieldCountPolicy::Reject,
///     observer: Some(Arc::new(StdErrObserver::default())),
///     alert_at_or_above: ConversionSeverity::Error,
///     ..Default::default()
/// };
/// convert_from_path("letter-recognition.data", "letter-recognition.csv", &opts)?;
/// # Ok(())
/// # }
/// ```
pub fn convert_from_path(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConversionOptions,
) -> ConversionResult<ConversionStats> {
    let input = input.as_ref();
    let output = output.as_ref();

    let result = reformat_path(input, output, options.field_count_policy, options.terminator);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = ConversionContext {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
        };
        match &result {
            Ok(stats) => {
                for &record in &stats.malformed {
                    obs.on_malformed(&ctx, record);
                }
                obs.on_success(&ctx, stats);
            }
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

/// Severity of a conversion failure.
pub fn severity_for_error(e: &ConversionError) -> ConversionSeverity {
    match e {
        ConversionError::Io(_) => ConversionSeverity::Critical,
        ConversionError::Csv(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => ConversionSeverity::Critical,
            _ => ConversionSeverity::Error,
        },
        ConversionError::FieldCount { .. } => ConversionSeverity::Error,
        ConversionError::SchemaMismatch { .. } => ConversionSeverity::Error,
        ConversionError::ParseError { .. } => ConversionSeverity::Error,
    }
}

/// An owned conversion job: input path, output path and options.
///
/// [`Default`] points at [`DEFAULT_INPUT_PATH`] and [`DEFAULT_OUTPUT_PATH`] in the current
/// working directory.
#[derive(Clone)]
pub struct ConversionRequest {
    /// Raw data file.
    pub input: PathBuf,
    /// CSV file to create or overwrite.
    pub output: PathBuf,
    /// Options controlling the run.
    pub options: ConversionOptions,
}

impl fmt::Debug for ConversionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionRequest")
            .field("input", &self.input)
            .field("output", &self.output)
            .field("options", &self.options)
            .finish()
    }
}

impl Default for ConversionRequest {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            options: ConversionOptions::default(),
        }
    }
}

impl ConversionRequest {
    /// Create a request for explicit paths with default options.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            options: ConversionOptions::default(),
        }
    }

    /// Execute the request by calling [`convert_from_path`].
    pub fn run(&self) -> ConversionResult<ConversionStats> {
        convert_from_path(&self.input, &self.output, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_are_critical() {
        let err = ConversionError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(severity_for_error(&err), ConversionSeverity::Critical);
    }

    #[test]
    fn data_errors_are_not_critical() {
        let err = ConversionError::FieldCount {
            line: 4,
            expected: 17,
            found: 9,
        };
        assert_eq!(severity_for_error(&err), ConversionSeverity::Error);
        let err = ConversionError::SchemaMismatch {
            message: "missing column".to_string(),
        };
        assert_eq!(severity_for_error(&err), ConversionSeverity::Error);
    }

    #[test]
    fn default_request_uses_fixed_paths() {
        let req = ConversionRequest::default();
        assert_eq!(req.input, Path::new("letter-recognition.data"));
        assert_eq!(req.output, Path::new("letter-recognition.csv"));
        assert_eq!(req.options.field_count_policy, FieldCountPolicy::PassThrough);
        assert_eq!(req.options.terminator, LineTerminator::Crlf);
        assert!(req.options.observer.is_none());
    }
}
