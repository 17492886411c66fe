// src/services/order.rs

//! Sort order extraction from category titles.
//!
//! Titles may carry an order prefix before the home marker, e.g. `"2#"`.
//! Titles without a usable number sort by the category id instead.

use super::SHOW_ON_HOME_MARK;

/// Extract the sort order from a title, falling back to `fallback_id`.
///
/// Only the text before the first `#` is considered when the marker is present.
pub fn extract_order(title: &str, fallback_id: i64) -> i64 {
    let order_str = title
        .split_once(SHOW_ON_HOME_MARK)
        .map_or(title, |(head, _)| head);

    parse_leading_int(order_str).unwrap_or(fallback_id)
}

/// Parse the longest base-10 integer prefix of `text`.
///
/// Leading ECMAScript whitespace and a single sign are accepted; parsing stops at the
/// first non-digit. Returns `None` when no digit is found. Values outside the
/// `i64` range saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start_matches(is_leading_space);
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_len == 0 {
        return None;
    }

    let value = unsigned[..digits_len].bytes().fold(0i64, |acc, b| {
        let digit = i64::from(b - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    });

    Some(value)
}

/// Whitespace skipped before a number: Unicode `White_Space` without NEL, plus the BOM.
fn is_leading_space(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}
