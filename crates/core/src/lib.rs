//! Core traits and types for the Milne framework.
//!
//! This crate defines the shared abstractions that solvers build on:
//!
//! - [`Rhs`] — the right-hand side of a first-order ODE `y' = f(x, y)`
//! - [`ExactSolution`] — an optional closed-form reference used purely for
//!   error measurement
//! - [`SolutionPoint`] — one sample of a computed trajectory, rounded for
//!   output

mod ode;
mod point;

pub use ode::{ExactSolution, Rhs};
pub use point::SolutionPoint;
