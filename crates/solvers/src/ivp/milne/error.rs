use std::error::Error as StdError;

/// Errors that can occur during Milne integration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid step size {0}: the step must be positive and finite")]
    InvalidStepSize(f64),

    #[error("invalid interval [{x0}, {x_end}]: the end must lie beyond the start")]
    InvalidInterval { x0: f64, x_end: f64 },

    #[error(
        "interval [{x0}, {x_end}] with step {h} yields {steps} grid point(s); \
         the four-point bootstrap needs at least 4"
    )]
    IntervalTooShort {
        x0: f64,
        x_end: f64,
        h: f64,
        steps: usize,
    },

    #[error("right-hand side error: {0}")]
    Rhs(#[source] Box<dyn StdError + Send + Sync>),

    #[error("reference solution error: {0}")]
    Reference(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn rhs<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Rhs(Box::new(err))
    }

    pub(crate) fn reference<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Reference(Box::new(err))
    }
}
