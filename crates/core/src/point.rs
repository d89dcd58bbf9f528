/// One sample of a computed trajectory.
///
/// Points are immutable once constructed and ordered by the solver that
/// produces them. Construction is the single rounding boundary: solvers run
/// their recurrences at full precision and round only here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolutionPoint {
    /// Independent variable value, rounded to six decimal digits.
    pub x: f64,

    /// Numerical solution at `x`, rounded to six decimal digits.
    pub y: f64,

    /// Reference solution at `x`, when one was supplied, rounded to six
    /// decimal digits.
    pub exact: Option<f64>,

    /// Absolute difference `|y - exact|`, rounded to eight decimal digits.
    ///
    /// Holds `0.0` when `exact` is absent; that zero is a sentinel and says
    /// nothing about accuracy.
    pub error: f64,
}

impl SolutionPoint {
    /// Creates a point from full-precision values.
    ///
    /// The error is computed from the unrounded `y` and `exact` before any
    /// rounding is applied, so output truncation never leaks into it.
    #[must_use]
    pub fn new(x: f64, y: f64, exact: Option<f64>) -> Self {
        let error = exact.map_or(0.0, |exact| (y - exact).abs());

        Self {
            x: round_to(x, 6),
            y: round_to(y, 6),
            exact: exact.map(|exact| round_to(exact, 6)),
            error: round_to(error, 8),
        }
    }
}

/// Rounds `value` to `digits` decimal digits, half away from zero.
fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_values_to_output_precision() {
        let point = SolutionPoint::new(0.123_456_789, 1.987_654_321_1, Some(2.0));

        assert_eq!(point.x, 0.123_457);
        assert_eq!(point.y, 1.987_654);
        assert_eq!(point.exact, Some(2.0));
        assert_eq!(point.error, 0.012_345_68);
    }

    #[test]
    fn absent_reference_uses_zero_sentinel() {
        let point = SolutionPoint::new(1.0, 2.5, None);

        assert_eq!(point.exact, None);
        assert_eq!(point.error, 0.0);
    }

    #[test]
    fn error_is_computed_before_rounding() {
        // Both values round to 1.0, so an error derived from the rounded
        // fields would vanish; the true difference must survive.
        let point = SolutionPoint::new(0.0, 1.000_000_4, Some(0.999_999_6));

        assert_eq!(point.y, 1.0);
        assert_eq!(point.exact, Some(1.0));
        assert_eq!(point.error, 0.000_000_8);
    }

    #[test]
    fn accumulated_grid_values_round_cleanly() {
        // Ten steps of 0.1 land just shy of 1.0 in binary.
        let point = SolutionPoint::new(0.999_999_999_999_999_9, 0.0, None);

        assert_eq!(point.x, 1.0);
    }
}
