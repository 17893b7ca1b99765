//! Record mapping: move the label from the first field to the last.

/// One input line split on `,`: the label followed by the feature values.
///
/// Tokens borrow from the line and are kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord<'a> {
    /// Class label (token 0).
    pub label: &'a str,
    /// Feature values (tokens 1..), in input order.
    pub features: Vec<&'a str>,
}

impl<'a> InputRecord<'a> {
    /// Split a (trimmed) line on the comma delimiter.
    ///
    /// No quoting rules apply on input, and the token count is not checked.
    pub fn parse(line: &'a str) -> Self {
        let mut tokens = line.split(',');
        let label = tokens.next().unwrap_or_default();
        Self {
            label,
            features: tokens.collect(),
        }
    }

    /// Total number of tokens, label included.
    pub fn field_count(&self) -> usize {
        self.features.len() + 1
    }
}

/// Features followed by the label, ready to be written as one CSV record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord<'a> {
    fields: Vec<&'a str>,
}

impl<'a> OutputRecord<'a> {
    /// Output fields in order.
    pub fn fields(&self) -> &[&'a str] {
        &self.fields
    }

    /// Number of output fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl<'a> From<InputRecord<'a>> for OutputRecord<'a> {
    fn from(input: InputRecord<'a>) -> Self {
        let mut fields = input.features;
        fields.push(input.label);
        Self { fields }
    }
}

/// Split `line` and rotate its tokens left by one (label moves to the end).
pub fn rotate_label_last(line: &str) -> OutputRecord<'_> {
    OutputRecord::from(InputRecord::parse(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotates_full_record() {
        let out = rotate_label_last("T,2,8,3,5,1,8,13,0,6,6,10,8,0,8,0,8");
        assert_eq!(out.field_count(), 17);
        assert_eq!(out.fields().join(","), "2,8,3,5,1,8,13,0,6,6,10,8,0,8,0,8,T");
    }

    #[test]
    fn parse_splits_label_and_features() {
        let rec = InputRecord::parse("Q,1,,3");
        assert_eq!(rec.label, "Q");
        assert_eq!(rec.features, vec!["1", "", "3"]);
        assert_eq!(rec.field_count(), 4);
    }

    #[test]
    fn short_record_is_rotated_not_padded() {
        let out = rotate_label_last("Z,1,2,3,4,5,6,7,8,9");
        assert_eq!(out.fields(), &["1", "2", "3", "4", "5", "6", "7", "8", "9", "Z"]);
    }

    #[test]
    fn single_token_line_is_label_only() {
        let out = rotate_label_last("A");
        assert_eq!(out.fields(), &["A"]);
    }
}
