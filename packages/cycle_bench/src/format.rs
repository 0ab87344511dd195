//! Number formatting for human-readable output.

/// Formats an integer with `,` as the thousands separator, e.g. `1,234,567`.
pub(crate) fn group_thousands(value: u128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len().saturating_mul(2));

    for (index, digit) in digits.chars().enumerate() {
        let remaining = digits.len().saturating_sub(index);

        if index > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }

        grouped.push(digit);
    }

    grouped
}

/// Formats a throughput score rounded to the nearest whole operation.
///
/// Non-finite scores are shown as-is (`NaN`, `inf`).
pub(crate) fn format_score(score: f64) -> String {
    if !score.is_finite() {
        return score.to_string();
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "scores are non-negative and the cast saturates at the integer range"
    )]
    let rounded = score.round() as u128;

    group_thousands(rounded)
}
