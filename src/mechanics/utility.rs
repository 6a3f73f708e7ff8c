//! Period utility for the cake-eating model and its feasible action set.

/// Log utility of eating `state - action` this period.
/// Returns `-inf` at `action == state` and `NaN` past it.
#[inline]
pub fn log_consumption(state: f64, action: f64) -> f64 {
    (state - action).ln()
}

/// Default margin between the search interval and the edges of `(0, state)`.
pub const SOFT_EPSILON: f64 = 1e-10;

/// Open action interval `(0, state)` shrunk by `eps` on both sides,
/// so the log argument stays strictly positive.
#[inline]
pub fn feasible_actions(state: f64, eps: f64) -> (f64, f64) {
    (eps, state - eps)
}

/// Strict feasibility: `0 < action < state`.
#[inline]
pub fn is_feasible(state: f64, action: f64) -> bool {
    action > 0.0 && action < state
}
