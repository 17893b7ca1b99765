//! Blank-line filtering over a line-oriented input.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`, so files written with any of the three
//! conventions split into the same records.

use std::collections::VecDeque;
use std::io::{self, BufRead};

/// A trimmed, non-blank input line together with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number in the input.
    pub number: usize,
    /// Line text with leading/trailing whitespace (and the terminator) removed.
    pub text: String,
}

/// Returns `true` if `line` is empty or whitespace-only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Lazy, single-pass iterator over the non-blank lines of a reader.
///
/// Blank lines are skipped and counted; see [`NonBlankLines::skipped`].
#[derive(Debug)]
pub struct NonBlankLines<R> {
    reader: R,
    buf: Vec<u8>,
    pending: VecDeque<String>,
    line_no: usize,
    skipped: usize,
}

impl<R: BufRead> NonBlankLines<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pending: VecDeque::new(),
            line_no: 0,
            skipped: 0,
        }
    }

    /// Number of blank lines skipped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Read up to the next `\n` and queue every line it contains.
    ///
    /// Returns `Ok(false)` at end of input.
    fn fill(&mut self) -> io::Result<bool> {
        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }

        let mut chunk = self.buf.as_slice();
        if let Some(rest) = chunk.strip_suffix(b"\n") {
            chunk = rest;
        }
        if let Some(rest) = chunk.strip_suffix(b"\r") {
            chunk = rest;
        }
        let text = std::str::from_utf8(chunk).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pending.extend(text.split('\r').map(str::to_owned));
        Ok(true)
    }
}

impl<R: BufRead> Iterator for NonBlankLines<R> {
    type Item = io::Result<SourceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.pending.pop_front() {
                Some(line) => line,
                None => match self.fill() {
                    Ok(true) => continue,
                    Ok(false) => return None,
                    Err(e) => return Some(Err(e)),
                },
            };
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                self.skipped += 1;
                continue;
            }
            return Some(Ok(SourceLine {
                number: self.line_no,
                text: trimmed.to_owned(),
            }));
        }
    }
}

/// Returns a [`NonBlankLines`] iterator over `reader`.
pub fn non_blank_lines<R: BufRead>(reader: R) -> NonBlankLines<R> {
    NonBlankLines::new(reader)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection_covers_whitespace_only() {
        assert!(is_blank(""));
        assert!(is_blank("   \t"));
        assert!(is_blank("\r"));
        assert!(!is_blank(" A,1 "));
    }

    #[test]
    fn skips_blank_lines_and_keeps_line_numbers() {
        let input = "A,1,2\n\n   \nB,3,4\r\n\t\n";
        let mut lines = non_blank_lines(input.as_bytes());

        let collected: Vec<SourceLine> = lines.by_ref().map(|l| l.unwrap()).collect();
        assert_eq!(
            collected,
            vec![
                SourceLine {
                    number: 1,
                    text: "A,1,2".to_string()
                },
                SourceLine {
                    number: 4,
                    text: "B,3,4".to_string()
                },
            ]
        );
        assert_eq!(lines.skipped(), 3);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let mut lines = non_blank_lines("  T,2,8  \n".as_bytes());
        assert_eq!(lines.next().unwrap().unwrap().text, "T,2,8");
        assert!(lines.next().is_none());
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        let input = "A,1\rB,2\r";
        let lines: Vec<SourceLine> = non_blank_lines(input.as_bytes()).map(|l| l.unwrap()).collect();
        assert_eq!(
            lines,
            vec![
                SourceLine {
                    number: 1,
                    text: "A,1".to_string()
                },
                SourceLine {
                    number: 2,
                    text: "B,2".to_string()
                },
            ]
        );
    }

    #[test]
    fn mixed_terminators_number_lines_consistently() {
        // \r\n is one terminator; \r\r is two.
        let input = "A,1\r\nB,2\r\rC,3\nD,4";
        let mut lines = non_blank_lines(input.as_bytes());
        let got: Vec<(usize, String)> = lines.by_ref().map(|l| l.unwrap()).map(|l| (l.number, l.text)).collect();
        assert_eq!(
            got,
            vec![
                (1, "A,1".to_string()),
                (2, "B,2".to_string()),
                (4, "C,3".to_string()),
                (5, "D,4".to_string()),
            ]
        );
        assert_eq!(lines.skipped(), 1);
    }

    #[test]
    fn surfaces_invalid_utf8_as_io_error() {
        let bytes: &[u8] = b"A,1\n\xff\xfe\n";
        let mut lines = non_blank_lines(bytes);
        assert!(lines.next().unwrap().is_ok());
        let err = lines.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
