//! The record reformatter: raw letter-recognition lines in, header-annotated CSV out.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::{ConversionError, ConversionResult};
use crate::processing::{InputRecord, OutputRecord, non_blank_lines};
use crate::types::{ATTRIBUTE_NAMES, RECORD_WIDTH};

use super::observability::{ConversionStats, MalformedRecord};

/// What to do with a record whose field count is not [`RECORD_WIDTH`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldCountPolicy {
    /// Write the record rotated as-is (too short or too long) and note it in the stats.
    #[default]
    PassThrough,
    /// Abort with [`ConversionError::FieldCount`].
    Reject,
}

/// Record terminator for the output file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTerminator {
    /// `\r\n`, the standard CSV convention.
    #[default]
    Crlf,
    /// `\n`.
    Lf,
}

impl From<LineTerminator> for csv::Terminator {
    fn from(t: LineTerminator) -> Self {
        match t {
            LineTerminator::Crlf => csv::Terminator::CRLF,
            LineTerminator::Lf => csv::Terminator::Any(b'\n'),
        }
    }
}

/// Build a CSV writer with minimal quoting and the given terminator.
pub fn csv_writer_builder(terminator: LineTerminator) -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(terminator.into());
    builder
}

/// Convert the file at `input` into a CSV at `output` (created or truncated).
///
/// The input is opened before the output, so a missing input leaves no output file behind.
/// Both handles are released when this function returns, on success or error.
pub fn reformat_path(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    policy: FieldCountPolicy,
    terminator: LineTerminator,
) -> ConversionResult<ConversionStats> {
    let reader = BufReader::new(File::open(input)?);
    let mut wtr = csv_writer_builder(terminator).from_path(output)?;
    reformat_reader(reader, &mut wtr, policy)
}

/// Convert lines from `reader` into CSV records on `wtr`.
///
/// Writes the header, then one record per non-blank line with the label moved to the end,
/// then flushes `wtr`.
pub fn reformat_reader<R: BufRead, W: Write>(
    reader: R,
    wtr: &mut csv::Writer<W>,
    policy: FieldCountPolicy,
) -> ConversionResult<ConversionStats> {
    wtr.write_record(ATTRIBUTE_NAMES)?;

    let mut stats = ConversionStats::default();
    let mut lines = non_blank_lines(reader);
    for line in lines.by_ref() {
        let line = line?;
        let record = InputRecord::parse(&line.text);

        let found = record.field_count();
        if found != RECORD_WIDTH {
            if policy == FieldCountPolicy::Reject {
                return Err(ConversionError::FieldCount {
                    line: line.number,
                    expected: RECORD_WIDTH,
                    found,
                });
            }
            stats.malformed.push(MalformedRecord {
                line: line.number,
                fields: found,
            });
        }

        wtr.write_record(OutputRecord::from(record).fields())?;
        stats.rows_written += 1;
    }
    stats.blank_lines_skipped = lines.skipped();

    wtr.flush()?;
    Ok(stats)
}
