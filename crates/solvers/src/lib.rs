//! Numerical solvers for the Milne framework.
//!
//! Solvers in this crate consume the capabilities defined by
//! [`milne_core`] — a right-hand side [`Rhs`] and an optional
//! [`ExactSolution`] reference — and produce trajectories of
//! [`SolutionPoint`]s.
//!
//! # Solvers
//!
//! - [`ivp::milne`] — fixed-step Milne predictor-corrector over an interval,
//!   bootstrapped by RK4
//! - [`ivp::rk4`] — the classical single-step Runge-Kutta 4 scheme
//!
//! [`Rhs`]: milne_core::Rhs
//! [`ExactSolution`]: milne_core::ExactSolution
//! [`SolutionPoint`]: milne_core::SolutionPoint

pub mod ivp;
