//! Error kinds for setup and for the inner optimization.
//!
//! Running out of outer iterations is *not* an error; see
//! [`crate::driver::Outcome::converged`].

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VfiError {
    /// Malformed grid, mismatched lengths or invalid configuration.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The bounded optimizer did not converge for one grid point.
    #[error(
        "optimization failed at grid index {index} (state = {state}) after {iterations} iterations"
    )]
    OptimizationFailure {
        index: usize,
        state: f64,
        iterations: usize,
    },
}

impl VfiError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        VfiError::InvalidInput(msg.into())
    }
}
