//! String cleanup helpers.

/// Collapse every run of whitespace into a single space and trim both ends.
///
/// ```
/// use tc_core::text::remove_extra_spaces;
/// assert_eq!(remove_extra_spaces("  this    is a   test "), "this is a test");
/// ```
pub fn remove_extra_spaces(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove every `.` from `input`.
pub fn remove_dots(input: &str) -> String {
    input.replace('.', "")
}
