//! Member ID scheme.
//!
//! Canonical IDs carry a `"00"` prefix with the numeric part zero-padded
//! to at least three digits, e.g. `"00001"`. Clients routinely send the
//! bare numeric form, so lookups try the exact string first and then the
//! alternate spelling.

pub const ID_PREFIX: &str = "00";

/// Zero-padding width of the numeric part.
const PAD_WIDTH: usize = 3;

/// The other spelling of an ID: stripped for a prefixed input, prefixed
/// for a bare one.
pub fn alternate(id: &str) -> String {
    match id.strip_prefix(ID_PREFIX) {
        Some(stripped) => stripped.to_string(),
        None => format!("{ID_PREFIX}{id}"),
    }
}

/// Canonical form of an assigned ID number.
pub fn format_id(number: i64) -> String {
    format!("{ID_PREFIX}{number:0width$}", width = PAD_WIDTH)
}

/// ID following the highest assigned number, starting from `"00001"` on an
/// empty roster.
pub fn next_id(max_assigned: Option<i64>) -> String {
    format_id(max_assigned.unwrap_or(0) + 1)
}
