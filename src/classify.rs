//! Record classification: quote-aware field splitting and the validity rules.

use crate::types::{Classification, FieldVector, InvalidReason, DELIMITER, QUOTE};

/// Two delimiters back to back. Matched against the raw text, so it also fires inside quotes.
const DOUBLE_DELIMITER: &str = ",,";

/// Classify
///
/// A line is invalid if its raw text contains a doubled delimiter anywhere, or if the
/// quote-aware split does not give exactly `NUM_COLUMNS` fields. Otherwise the split fields
/// become the line's `FieldVector`.
pub fn classify(line: &str) -> Classification<'_> {
	if line.contains(DOUBLE_DELIMITER) {
		return Classification::Invalid(InvalidReason::ConsecutiveDelimiters);
	}
	match FieldVector::from_fields(split_fields(line)) {
		Ok(fields) => Classification::Valid(fields),
		Err(fields) => Classification::Invalid(InvalidReason::FieldCount {
			found: fields.len(),
		}),
	}
}

/// Split Fields
///
/// Split `line` at every delimiter that is followed by an even number of quote characters
/// in the rest of the line. With balanced quotes that is every delimiter outside a quoted
/// section; with unbalanced quotes it still gives a deterministic answer rather than failing.
/// Empty fields are kept, so a line with `k` split points always yields `k + 1` fields.
pub fn split_fields(line: &str) -> Vec<&str> {
	let mut quotes_after = line.matches(QUOTE).count();
	let mut fields = Vec::new();
	let mut start = 0;
	for (idx, ch) in line.char_indices() {
		if ch == QUOTE {
			quotes_after -= 1;
		} else if ch == DELIMITER && quotes_after % 2 == 0 {
			fields.push(&line[start..idx]);
			start = idx + ch.len_utf8();
		}
	}
	fields.push(&line[start..]);
	fields
}
