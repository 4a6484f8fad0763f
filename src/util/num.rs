/// Renders a number as expression text that evaluates back to `value`.
///
/// Uses Rust's shortest round-trip formatting, which never produces an
/// exponent, so the result is a plain run of digits and at most one `.`.
/// Values with a negative sign (including `-0.0`) are wrapped in parentheses
/// so they remain a single operand when spliced between operators.
///
/// ## Parameters
/// - `value`: A finite number.
///
/// ## Returns
/// The textual form of `value`.
///
/// ## Example
/// ```
/// use calcite::util::num::to_literal;
///
/// assert_eq!(to_literal(5.0), "5");
/// assert_eq!(to_literal(0.25), "0.25");
/// assert_eq!(to_literal(-3.0), "(-3)");
/// ```
#[must_use]
pub fn to_literal(value: f64) -> String {
    if value.is_sign_negative() {
        format!("({value})")
    } else {
        value.to_string()
    }
}

/// Returns `true` if `a` and `b` are equal within a relative tolerance.
///
/// Both values are scaled by the larger magnitude (at least `1.0`), so the
/// tolerance acts as an absolute one near zero.
///
/// ## Example
/// ```
/// use calcite::util::num::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3, 1e-12));
/// assert!(!approx_eq(1.0, 1.1, 1e-12));
/// ```
#[must_use]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    if a == b {
        return true;
    }
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}
