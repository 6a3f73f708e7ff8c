// src/systems/sdk.rs

//! # Systems SDK
//!
//! The pieces every value-function-iteration model shares: the per-state
//! optimizer and the Bellman operator that sweeps it over a grid.
//!
//! A *system* here is one dynamic-programming model with a single
//! continuous state `W` and a choice of next-period state `W'`. It plugs
//! into the operator by implementing [`Problem`]:
//!
//! 1) **discount**: β in (0, 1), the weight on continuation value.
//!
//! 2) **utility**: `(W, W') -> f64`, period payoff of moving from `W` to
//!    `W'`. May be undefined (NaN / -inf) outside the feasible set.
//!
//! 3) **action_bounds**: `W -> (lo, hi)`, the closed interval the
//!    optimizer searches. Keep it strictly inside the feasible set; the
//!    optimizer never evaluates the bounds themselves but may get within
//!    a few `xatol` of them.
//!
//! ## What the operator does
//! For a continuation guess `V'` sampled on the grid:
//!
//! ```text
//! V(W_i) = max_{W' ∈ [lo, hi]} u(W_i, W') + β · interp(V')(W')
//! ψ(W_i) = argmax
//! ```
//!
//! Each grid point is an independent subproblem. Sequentially they run in
//! index order; with the `parallel` feature they run on rayon's pool and
//! write their own slot, so both paths produce the same vectors.
//!
//! ## Failure policy
//! A subproblem whose optimizer exhausts its budget, or whose optimum is
//! not finite, fails the whole sweep with
//! [`VfiError::OptimizationFailure`] carrying the grid index and state.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::VfiError;
use crate::grid::Grid;
use crate::interp::LinearInterp;
use crate::optimize::{ScalarOptions, minimize_bounded};

/// One dynamic-programming model over a scalar state.
pub trait Problem: Sync {
    fn discount(&self) -> f64;
    fn utility(&self, state: f64, action: f64) -> f64;
    fn action_bounds(&self, state: f64) -> (f64, f64);
}

/// Optimal action and attained value for one state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateChoice {
    pub action: f64,
    pub value: f64,
}

/// Value and policy vectors from one application of the operator,
/// aligned index-for-index with the grid.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sweep {
    pub value: Vec<f64>,
    pub policy: Vec<f64>,
}

/// Maximize `utility(state, a) + β · continuation(a)` over the problem's
/// action bounds. `index` is only used to label a failure.
pub fn maximize_state<P, C>(
    problem: &P,
    index: usize,
    state: f64,
    continuation: C,
    opts: &ScalarOptions,
) -> Result<StateChoice, VfiError>
where
    P: Problem + ?Sized,
    C: Fn(f64) -> f64,
{
    let (lo, hi) = problem.action_bounds(state);
    if !(lo < hi) {
        return Err(VfiError::invalid(format!(
            "state {state} at index {index} leaves no room for an action ([{lo}, {hi}])"
        )));
    }
    let beta = problem.discount();
    let neg_objective = |a: f64| -(problem.utility(state, a) + beta * continuation(a));

    let m = minimize_bounded(neg_objective, lo, hi, opts)?;
    if !m.converged || !m.f_min.is_finite() {
        return Err(VfiError::OptimizationFailure { index, state, iterations: m.iterations });
    }
    Ok(StateChoice { action: m.x, value: -m.f_min })
}

/// Apply the Bellman operator once to the continuation guess `value_next`.
pub fn bellman<P>(
    problem: &P,
    value_next: &[f64],
    grid: &Grid,
    opts: &ScalarOptions,
) -> Result<Sweep, VfiError>
where
    P: Problem + ?Sized,
{
    let interp = LinearInterp::new(grid.points(), value_next)?;
    let continuation = |a: f64| interp.value(a);

    #[cfg(feature = "parallel")]
    let choices = grid
        .points()
        .par_iter()
        .enumerate()
        .map(|(i, &w)| maximize_state(problem, i, w, continuation, opts))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let choices = grid
        .points()
        .iter()
        .enumerate()
        .map(|(i, &w)| maximize_state(problem, i, w, continuation, opts))
        .collect::<Result<Vec<_>, _>>()?;

    let (value, policy) = choices.into_iter().map(|c| (c.value, c.action)).unzip();
    Ok(Sweep { value, policy })
}
