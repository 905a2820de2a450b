//! Zip-code validation and input-list parsing.

use regex::Regex;

/// A 5-digit U.S. zip code with an optional ZIP+4 extension.
const ZIP_PATTERN: &str = r"^\d{5}(-\d{4})?$";

/// Returns `true` if `candidate` is a syntactically valid U.S. zip code.
#[must_use]
pub fn is_valid_zip(candidate: &str) -> bool {
    let re = Regex::new(ZIP_PATTERN).expect("valid regex");
    re.is_match(candidate)
}

/// Splits a comma-separated zip-code list into the ordered subsequence of
/// valid entries.
///
/// Segments are whitespace-trimmed; empty segments are discarded silently and
/// invalid ones are dropped with a warning. The returned order matches the
/// input order.
#[must_use]
pub fn parse_zip_list(raw: &str) -> Vec<String> {
    let re = Regex::new(ZIP_PATTERN).expect("valid regex");

    raw.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter(|segment| {
            if re.is_match(segment) {
                true
            } else {
                tracing::warn!(zip = %segment, "dropping invalid zip code");
                false
            }
        })
        .map(str::to_string)
        .collect()
}
