//! String predicates shared by the instruction rules.
//!
//! Carrier and tracking fields arrive as free text, so "present" means
//! "not absent and not whitespace-only". A byte-order mark counts as
//! whitespace; spreadsheet exports leave them in otherwise empty cells.
//! Equality against carrier statuses is exact and case-sensitive; the https
//! check is not.

/// Carrier status for a label that exists but has not been handed over yet.
pub const READY_TO_SEND: &str = "Ready to send";

/// Carrier status for a completed delivery.
pub const DELIVERED: &str = "Delivered";

/// Placeholder some rows carry in `tracking_link` before a real link exists.
/// No rule tests for it directly; it simply fails the https check.
pub const EMPTY_LABEL: &str = "Empty label";

const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// `value` without surrounding whitespace or byte-order marks.
pub fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// True when `value` is absent or only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| trim(v).is_empty())
}

/// `value` itself when it is not blank.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !trim(v).is_empty())
}

/// True when `link`, once trimmed, begins with `https` in any letter case.
pub fn starts_with_https(link: &str) -> bool {
    trim(link)
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("https"))
}
