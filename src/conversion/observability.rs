use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConversionError;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConversionSeverity {
    /// Informational event.
    Info,
    /// Warning-level event (non-fatal, e.g. a malformed record was passed through).
    Warning,
    /// Error-level event (conversion failed).
    Error,
    /// Critical error (I/O failures).
    Critical,
}

/// Context about a conversion run.
#[derive(Debug, Clone)]
pub struct ConversionContext {
    /// Input (raw data) path.
    pub input: PathBuf,
    /// Output (CSV) path.
    pub output: PathBuf,
}

/// A record written with a field count other than 17.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedRecord {
    /// 1-based input line number.
    pub line: usize,
    /// Number of fields found on that line.
    pub fields: usize,
}

/// Stats reported on a successful conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Data rows written (the header is not counted).
    pub rows_written: usize,
    /// Blank or whitespace-only input lines that were skipped.
    pub blank_lines_skipped: usize,
    /// Records written with an unexpected field count, in input order.
    pub malformed: Vec<MalformedRecord>,
}

/// Observer interface for conversion outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait ConversionObserver: Send + Sync {
    /// Called when conversion succeeds.
    fn on_success(&self, _ctx: &ConversionContext, _stats: &ConversionStats) {}

    /// Called once per record that was written with an unexpected field count.
    fn on_malformed(&self, _ctx: &ConversionContext, _record: MalformedRecord) {}

    /// Called when conversion fails.
    fn on_failure(&self, _ctx: &ConversionContext, _severity: ConversionSeverity, _error: &ConversionError) {}

    /// Called when a conversion failure meets an alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &ConversionContext, severity: ConversionSeverity, error: &ConversionError) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ConversionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ConversionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ConversionObserver for CompositeObserver {
    fn on_success(&self, ctx: &ConversionContext, stats: &ConversionStats) {
        for o in &self.observers {
            o.on_success(ctx, stats);
        }
    }

    fn on_malformed(&self, ctx: &ConversionContext, record: MalformedRecord) {
        for o in &self.observers {
            o.on_malformed(ctx, record);
        }
    }

    fn on_failure(&self, ctx: &ConversionContext, severity: ConversionSeverity, error: &ConversionError) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(&self, ctx: &ConversionContext, severity: ConversionSeverity, error: &ConversionError) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Logs conversion events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ConversionObserver for StdErrObserver {
    fn on_success(&self, ctx: &ConversionContext, stats: &ConversionStats) {
        eprintln!(
            "[convert][ok] input={} output={} rows={} blank={} malformed={}",
            ctx.input.display(),
            ctx.output.display(),
            stats.rows_written,
            stats.blank_lines_skipped,
            stats.malformed.len()
        );
    }

    fn on_malformed(&self, ctx: &ConversionContext, record: MalformedRecord) {
        eprintln!(
            "[convert][{:?}] input={} line={} fields={}",
            ConversionSeverity::Warning,
            ctx.input.display(),
            record.line,
            record.fields
        );
    }

    fn on_failure(&self, ctx: &ConversionContext, severity: ConversionSeverity, error: &ConversionError) {
        eprintln!(
            "[convert][{:?}] input={} output={} err={}",
            severity,
            ctx.input.display(),
            ctx.output.display(),
            error
        );
    }

    fn on_alert(&self, ctx: &ConversionContext, severity: ConversionSeverity, error: &ConversionError) {
        eprintln!(
            "[ALERT][convert][{:?}] input={} output={} err={}",
            severity,
            ctx.input.display(),
            ctx.output.display(),
            error
        );
    }
}

/// Appends conversion events to a local log file.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are ignored.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, line: &str) {
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{line}");
        }
    }
}

impl ConversionObserver for FileObserver {
    fn on_success(&self, ctx: &ConversionContext, stats: &ConversionStats) {
        self.append_line(&format!(
            "{} ok input={} output={} rows={} blank={} malformed={}",
            unix_ts(),
            ctx.input.display(),
            ctx.output.display(),
            stats.rows_written,
            stats.blank_lines_skipped,
            stats.malformed.len()
        ));
    }

    fn on_malformed(&self, ctx: &ConversionContext, record: MalformedRecord) {
        self.append_line(&format!(
            "{} malformed input={} line={} fields={}",
            unix_ts(),
            ctx.input.display(),
            record.line,
            record.fields
        ));
    }

    fn on_failure(&self, ctx: &ConversionContext, severity: ConversionSeverity, error: &ConversionError) {
        self.append_line(&format!(
            "{} fail severity={:?} input={} output={} err={}",
            unix_ts(),
            severity,
            ctx.input.display(),
            ctx.output.display(),
            error
        ));
    }

    fn on_alert(&self, ctx: &ConversionContext, severity: ConversionSeverity, error: &ConversionError) {
        self.append_line(&format!(
            "{} ALERT severity={:?} input={} output={} err={}",
            unix_ts(),
            severity,
            ctx.input.display(),
            ctx.output.display(),
            error
        ));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
