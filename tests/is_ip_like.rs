use anyhow::Result;

use iplike::{is_ip_like, Pattern, IP_LIKE_PATTERN};

#[test]
fn dotted_single_digit_quad_matches() {
    assert!(is_ip_like("1.2.3.4"));
    assert!(is_ip_like("0.0.0.0"));
    assert!(is_ip_like("9.9.9.9"));
}

#[test]
fn quad_embedded_in_longer_text_matches() {
    assert!(is_ip_like("ping 1.2.3.4 please"));
}

#[test]
fn dotted_decimal_matches_when_its_digits_align() {
    // "192.168" reads digit/any/digit/any/digit/any/digit from the start.
    assert!(is_ip_like("192.168.1.1"));
}

#[test]
fn dotted_decimal_without_an_aligned_run_does_not_match() {
    assert!(!is_ip_like("19.16.1.1"));
    assert!(!is_ip_like("10.20.30.40"));
}

#[test]
fn separators_need_not_be_dots() {
    assert!(is_ip_like("abc1a2b3c4xyz"));
    assert!(is_ip_like("x1y2z3w4"));
}

#[test]
fn short_inputs_do_not_match() {
    assert!(!is_ip_like(""));
    assert!(!is_ip_like("1.2.3"));
    assert!(!is_ip_like("4321"));
}

#[test]
fn inputs_without_a_digit_run_do_not_match() {
    assert!(!is_ip_like("hello"));
    assert!(!is_ip_like("a.b.c.d"));
    assert!(!is_ip_like("not.an.ip.address"));
}

#[test]
fn repeated_calls_are_idempotent() {
    for _ in 0..3 {
        assert!(is_ip_like("1.2.3.4"));
        assert!(!is_ip_like("hello"));
    }
}

#[test]
fn fixed_pattern_compiles_standalone() -> Result<()> {
    let pattern: Pattern = IP_LIKE_PATTERN.parse()?;
    assert!(pattern.is_match("4.3.2.1"));
    assert!(!pattern.is_match("dotless"));
    Ok(())
}
