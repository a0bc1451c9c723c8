//! Field splitting for delimited status lines

/// Split a line into its delimited fields.
///
/// Empty fields are preserved and nothing is trimmed, so a line with N
/// delimiters always yields N + 1 fields and the empty line yields `[""]`.
/// An empty delimiter leaves the line whole.
pub fn split_fields<'a>(line: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        return vec![line];
    }
    line.split(delimiter).collect()
}
