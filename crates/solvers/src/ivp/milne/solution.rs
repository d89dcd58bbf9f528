use milne_core::SolutionPoint;

/// The result of a Milne integration.
///
/// Points are ordered by increasing `x`, one per grid value, with the first
/// pinned to the initial condition. The solver retains no alias to the
/// sequence; a new call produces a wholly new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// The computed trajectory.
    pub points: Vec<SolutionPoint>,
}

impl Solution {
    /// Number of grid points in the trajectory.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the trajectory holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest pointwise error across points that carry a reference value.
    ///
    /// Returns `None` when no reference solution was supplied; the zero
    /// sentinel of unreferenced points never contributes.
    #[must_use]
    pub fn max_error(&self) -> Option<f64> {
        self.points
            .iter()
            .filter(|point| point.exact.is_some())
            .map(|point| point.error)
            .reduce(f64::max)
    }
}
