//! Substring matching against a fixed IPv4-like pattern.
//!
//! The crate exposes one question, [`is_ip_like`]: does the input contain a
//! run of four ASCII digits with one arbitrary character between each pair?
//! The separator atoms accept any character, so this deliberately is not an
//! IPv4 validator; see [`IP_LIKE_PATTERN`] for the exact pattern.

pub mod ast;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod pattern;

pub use error::PatternError;
pub use pattern::Pattern;

use once_cell::sync::Lazy;

/// The fixed IPv4-like pattern: a digit, any character, a digit, any
/// character, a digit, any character, a digit.
///
/// The separators are `.` atoms rather than literal dots, so `"192.168.1.1"`
/// matches (its digits align into such a run) while `"10.20.30.40"` does not.
pub const IP_LIKE_PATTERN: &str = "([0-9]).([0-9]).([0-9]).([0-9])";

// Compiled once per process and shared by every caller. The pattern is a
// fixed literal, so a compile failure here is a defect the test suite
// catches, not a runtime condition.
static IP_LIKE: Lazy<Pattern> =
    Lazy::new(|| Pattern::new(IP_LIKE_PATTERN).expect("fixed pattern compiles"));

/// Returns true when `input` contains an IPv4-like run.
///
/// Matching is a pure substring search: no octet-range validation, no
/// full-string anchoring, no I/O. Repeated calls with the same input return
/// the same answer.
///
/// ```
/// assert!(iplike::is_ip_like("1.2.3.4"));
/// assert!(iplike::is_ip_like("192.168.1.1"));
/// assert!(!iplike::is_ip_like("not.an.ip.address"));
/// assert!(!iplike::is_ip_like(""));
/// ```
pub fn is_ip_like(input: &str) -> bool {
    IP_LIKE.is_match(input)
}
