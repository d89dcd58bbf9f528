//! Milne's predictor-corrector method for first-order IVPs.
//!
//! This module integrates `y' = f(x, y)` over `[x0, x_end]` on the fixed
//! grid `x[i] = x0 + i h`, seeding the first four points with classical
//! RK4 steps and advancing the rest with the fourth-order Milne recurrence.
//!
//! # Algorithm
//!
//! For each grid advance past the bootstrap:
//!
//! ```text
//! predictor: yᵖ     = y[i-3] + (4h/3) (2 f[i] - f[i-1] + 2 f[i-2])
//! corrector: y[i+1] = y[i-1] + (h/3) (f[i-1] + 4 f[i] + f(x[i+1], yᵖ))
//! ```
//!
//! One predictor pass, one corrector pass: the corrector's final evaluation
//! uses the predicted value as-is, with no fixed-point iteration. The
//! recurrence runs at full precision; rounding happens once, when the
//! trajectory is emitted as [`SolutionPoint`]s.
//!
//! When a reference [`ExactSolution`] is supplied, each point is annotated
//! with the reference value and the pointwise absolute error.
//!
//! # Errors
//!
//! [`solve`] fails fast on a non-positive step, an interval that does not
//! run forward, or a grid too short to seed the four-point bootstrap. Any
//! failure raised by the right-hand side or the reference propagates out
//! unchanged as the error's source; there are no partial results.
//!
//! # Example
//!
//! ```
//! use milne_solvers::ivp::milne;
//!
//! // y' = x + y through (0, 1), whose exact solution is 2eˣ - x - 1.
//! let solution = milne::solve(
//!     &|x: f64, y: f64| x + y,
//!     Some(&|x: f64| 2.0 * x.exp() - x - 1.0),
//!     0.0,
//!     1.0,
//!     1.0,
//!     0.1,
//! )?;
//!
//! assert_eq!(solution.len(), 11);
//! assert!(solution.max_error().is_some_and(|err| err < 1e-3));
//! # Ok::<(), milne_solvers::ivp::milne::Error>(())
//! ```

mod error;
mod solution;


pub use error::Error;
pub use solution::Solution;

use milne_core::{ExactSolution, Rhs, SolutionPoint};

use super::rk4;

/// Grid points seeded by RK4 before the multistep recurrence can run.
const BOOTSTRAP_POINTS: usize = 4;

/// Integrates `y' = f(x, y)` from `(x0, y0)` to `x_end` with step `h`.
///
/// The trajectory covers `⌊(x_end - x0)/h⌋ + 1` grid points, the first
/// pinned to the initial condition. When `exact` is supplied, every point
/// carries the reference value and the pointwise error.
///
/// Each call works on its own local grid and returns a fresh [`Solution`];
/// independent calls share nothing and may run in parallel.
///
/// # Errors
///
/// - [`Error::InvalidStepSize`] if `h` is not positive and finite.
/// - [`Error::InvalidInterval`] if `x_end` does not lie beyond a finite `x0`.
/// - [`Error::IntervalTooShort`] if the grid has fewer than four points.
/// - [`Error::Rhs`] / [`Error::Reference`] wrapping any failure raised by
///   the callables, unchanged.
pub fn solve<F, G>(
    f: &F,
    exact: Option<&G>,
    x0: f64,
    y0: f64,
    x_end: f64,
    h: f64,
) -> Result<Solution, Error>
where
    F: Rhs,
    G: ExactSolution,
{
    if !h.is_finite() || h <= 0.0 {
        return Err(Error::InvalidStepSize(h));
    }
    if !x0.is_finite() || !x_end.is_finite() || x_end <= x0 {
        return Err(Error::InvalidInterval { x0, x_end });
    }

    let steps = grid_len(x0, x_end, h);
    if steps < BOOTSTRAP_POINTS {
        return Err(Error::IntervalTooShort {
            x0,
            x_end,
            h,
            steps,
        });
    }

    let mut x = vec![0.0; steps];
    let mut y = vec![0.0; steps];
    x[0] = x0;
    y[0] = y0;

    // Seed the first four grid points with single RK4 steps.
    for i in 1..BOOTSTRAP_POINTS {
        x[i] = x[i - 1] + h;
        y[i] = rk4::step(f, x[i - 1], y[i - 1], h).map_err(Error::rhs)?;
    }

    // Milne recurrence over the rest of the grid.
    for i in BOOTSTRAP_POINTS - 1..steps - 1 {
        x[i + 1] = x[i] + h;

        let f_i = f.eval(x[i], y[i]).map_err(Error::rhs)?;
        let f_prev = f.eval(x[i - 1], y[i - 1]).map_err(Error::rhs)?;
        let f_prev2 = f.eval(x[i - 2], y[i - 2]).map_err(Error::rhs)?;

        let y_pred = y[i - 3] + 4.0 * h / 3.0 * (2.0 * f_i - f_prev + 2.0 * f_prev2);
        let f_pred = f.eval(x[i + 1], y_pred).map_err(Error::rhs)?;

        y[i + 1] = y[i - 1] + h / 3.0 * (f_prev + 4.0 * f_i + f_pred);
    }

    // Output boundary: annotate against the reference and round.
    let mut points = Vec::with_capacity(steps);
    for i in 0..steps {
        let reference = match exact {
            Some(g) => Some(g.eval(x[i]).map_err(Error::reference)?),
            None => None,
        };
        points.push(SolutionPoint::new(x[i], y[i], reference));
    }

    Ok(Solution { points })
}

/// Integrates without a reference solution.
///
/// This is a convenience wrapper around [`solve`] for callers with no
/// closed-form reference; every returned point has `exact` absent and the
/// zero `error` sentinel.
///
/// # Errors
///
/// Same as [`solve`], minus [`Error::Reference`].
pub fn solve_unreferenced<F: Rhs>(
    f: &F,
    x0: f64,
    y0: f64,
    x_end: f64,
    h: f64,
) -> Result<Solution, Error> {
    solve(f, None::<&fn(f64) -> f64>, x0, y0, x_end, h)
}

/// Grid length for step `h` over `[x0, x_end]`: `⌊(x_end - x0)/h⌋ + 1`.
fn grid_len(x0: f64, x_end: f64, h: f64) -> usize {
    ((x_end - x0) / h).floor() as usize + 1
}
