//! A1-style cell coordinate validation.

use regex::Regex;
use std::sync::LazyLock;

/// Column letters (A..XFD range by length) followed by a 1-based row.
static CELL_REF_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{1,3}[1-9][0-9]*$").unwrap());

/// Normalizes a cell coordinate such as `" j22 "` to `J22`.
///
/// Returns `None` if the input is not a plain A1 coordinate. Absolute
/// markers (`$J$22`), sheet prefixes and ranges are not accepted.
///
/// # Examples
///
/// ```
/// use prorator::utils::cell_ref::normalize_cell_ref;
///
/// assert_eq!(normalize_cell_ref("c6").as_deref(), Some("C6"));
/// assert_eq!(normalize_cell_ref("J0"), None);
/// assert_eq!(normalize_cell_ref("A1:B2"), None);
/// ```
pub fn normalize_cell_ref(input: &str) -> Option<String> {
    let upper = input.trim().to_ascii_uppercase();
    CELL_REF_REGEX.is_match(&upper).then_some(upper)
}
