// testing tip: Fixture-driven tests report the 1-based fixture line of the first
//              mismatch. Use "cargo test -- --nocapture --test-threads 1" to see
//              the full output in a predictable order.
// testing tip: The fixtures live in test_fixtures/ and are read relative to the
//              current directory, so run tests from the repository root.
// benchmarking reminder: Remember to shut down unneeded processes before benching.

pub mod util;

/// Assert that `actual` is within `tolerance` of `expected`.
/// Two NaNs compare equal, so fixtures can record degenerate results.
pub fn assert_delta(label: &str, line_num: usize, expected: f64, actual: f64, tolerance: f64) {
    if expected.is_nan() && actual.is_nan() {
        return;
    }
    let diff = (expected - actual).abs();
    assert!(
        diff <= tolerance,
        "{} mismatch on line {}: expected {}{}, got {}{} (diff {})",
        label,
        line_num,
        util::help_sign(expected),
        expected.abs(),
        util::help_sign(actual),
        actual.abs(),
        diff
    );
}
