//! Test assertion helpers
//!
//! Sizes and percentages are floating point; compare them with a tolerance
//! instead of `assert_eq!`.

/// Assert that two floating-point values are approximately equal
///
/// # Examples
///
/// ```ignore
/// assert_approx_eq(record.percent_diff.unwrap(), 10.0, 1e-9);
/// ```
#[allow(dead_code)]
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Float values not approximately equal:\n  actual: {}\n  expected: {}\n  diff: {} (epsilon: {})",
        actual, expected, diff, epsilon
    );
}

/// Assert that an optional KB value is present and close to `expected_kb`
#[allow(dead_code)]
pub fn assert_kb(actual: Option<f64>, expected_kb: f64) {
    match actual {
        Some(kb) => assert_approx_eq(kb, expected_kb, 1e-9),
        None => panic!("Expected {} KB, got no value", expected_kb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq_pass() {
        assert_approx_eq(0.75, 0.75, 0.01);
        assert_approx_eq(12.5, 12.45, 0.1);
    }

    #[test]
    #[should_panic(expected = "Float values not approximately equal")]
    fn test_assert_approx_eq_fail() {
        assert_approx_eq(0.75, 0.80, 0.01);
    }

    #[test]
    #[should_panic(expected = "got no value")]
    fn test_assert_kb_missing_value() {
        assert_kb(None, 1.0);
    }
}
