//! Classical fourth-order Runge-Kutta, one step at a time.
//!
//! ```text
//! k1 = h f(x, y)
//! k2 = h f(x + h/2, y + k1/2)
//! k3 = h f(x + h/2, y + k2/2)
//! k4 = h f(x + h,   y + k3)
//! y(x + h) ≈ y + (k1 + 2 k2 + 2 k3 + k4) / 6
//! ```
//!
//! The stepper holds no state; callers own the stepping loop. The
//! [`milne`](super::milne) solver uses it to seed its four-point bootstrap.

use milne_core::Rhs;

/// Advances `y` from `x` to `x + h` with a single RK4 step.
///
/// The right-hand side is evaluated exactly four times per call.
///
/// # Errors
///
/// Any error from the right-hand side propagates unchanged.
pub fn step<F: Rhs>(f: &F, x: f64, y: f64, h: f64) -> Result<f64, F::Error> {
    let k1 = h * f.eval(x, y)?;
    let k2 = h * f.eval(x + h / 2.0, y + k1 / 2.0)?;
    let k3 = h * f.eval(x + h / 2.0, y + k2 / 2.0)?;
    let k4 = h * f.eval(x + h, y + k3)?;

    Ok(y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;

    use approx::assert_relative_eq;

    #[test]
    fn tracks_exponential_growth_over_one_step() {
        // y' = y through (0, 1) is eˣ; one RK4 step carries an O(h⁵) error.
        let y1 = step(&|_x: f64, y: f64| y, 0.0, 1.0, 0.1).expect("should step");

        assert_relative_eq!(y1, 0.1_f64.exp(), epsilon = 1e-6);
    }

    #[test]
    fn constant_slope_is_exact() {
        let y1 = step(&|_x: f64, _y: f64| 2.0, 0.0, 1.0, 0.5).expect("should step");

        assert_relative_eq!(y1, 2.0);
    }

    #[test]
    fn evaluates_rhs_exactly_four_times() {
        let calls = Cell::new(0_usize);
        let counted = |_x: f64, y: f64| {
            calls.set(calls.get() + 1);
            y
        };

        step(&counted, 0.0, 1.0, 0.1).expect("should step");

        assert_eq!(calls.get(), 4);
    }

    #[derive(Debug, thiserror::Error)]
    #[error("undefined past x = {0}")]
    struct PastDomain(f64);

    /// Fails once evaluation moves past a domain boundary, like a bounded
    /// expression source would.
    struct Bounded {
        edge: f64,
    }

    impl Rhs for Bounded {
        type Error = PastDomain;

        fn eval(&self, x: f64, y: f64) -> Result<f64, Self::Error> {
            if x > self.edge {
                Err(PastDomain(self.edge))
            } else {
                Ok(y)
            }
        }
    }

    #[test]
    fn propagates_rhs_failure_unchanged() {
        // The k4 stage lands on x + h, past the boundary.
        let result = step(&Bounded { edge: 0.05 }, 0.0, 1.0, 0.1);

        assert!(result.is_err());
    }
}
