//! Deterministic cake eating with log utility.
//!
//! State `W` is the cake left, action `W'` the cake saved for tomorrow;
//! the agent eats `W - W'` and gets `ln(W - W')`.

use crate::mechanics::utility;
use crate::systems::sdk::Problem;

#[derive(Clone, Copy, Debug)]
pub struct Params {
    pub discount: f64,
}

/// Margin kept between the search interval and the edges of `(0, W)`.
#[derive(Clone, Copy, Debug)]
pub struct Bounds {
    pub epsilon: f64,
}
impl Bounds {
    pub fn soft_defaults() -> Self {
        Self { epsilon: utility::SOFT_EPSILON }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct CakeEating {
    pub params: Params,
    pub bounds: Bounds,
}

impl CakeEating {
    pub fn new(discount: f64) -> Self {
        Self { params: Params { discount }, bounds: Bounds::soft_defaults() }
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }
}

impl Problem for CakeEating {
    fn discount(&self) -> f64 {
        self.params.discount
    }

    fn utility(&self, state: f64, action: f64) -> f64 {
        utility::log_consumption(state, action)
    }

    fn action_bounds(&self, state: f64) -> (f64, f64) {
        utility::feasible_actions(state, self.bounds.epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::mechanics::closed_form;
    use crate::optimize::ScalarOptions;
    use crate::systems::sdk::bellman;

    #[test]
    fn search_interval_follows_epsilon() {
        let p = CakeEating::new(0.95).with_bounds(Bounds { epsilon: 1e-6 });
        assert_eq!(p.action_bounds(0.5), (1e-6, 0.5 - 1e-6));
        assert_eq!(p.discount(), 0.95);
        assert_eq!(p.utility(0.5, 0.25), 0.25_f64.ln());
    }

    #[test]
    fn closed_form_is_nearly_a_fixed_point_of_the_operator() {
        // Feeding the analytical V through one sweep on a fine interior
        // region should reproduce βW as the policy.
        let beta = 0.9;
        let grid = Grid::geomspace(1e-4, 1.0, 400).unwrap();
        let v: Vec<f64> = grid.points().iter().map(|&w| closed_form::value(beta, w)).collect();
        let sweep = bellman(&CakeEating::new(beta), &v, &grid, &ScalarOptions::default()).unwrap();
        for (i, &w) in grid.points().iter().enumerate().filter(|(_, w)| **w >= 0.01) {
            let rel = (sweep.policy[i] / closed_form::policy(beta, w) - 1.0).abs();
            assert!(rel < 5e-3, "W={w} policy={} rel={rel}", sweep.policy[i]);
        }
    }
}
