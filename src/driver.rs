//! Fixed-point driver for value-function iteration.
//!
//! Starts from an initial guess (zeros by default) and repeats the Bellman
//! operator until the squared distance between successive value functions
//! falls below `tolerance`, or `max_iter` sweeps have run.
//!
//! ```text
//! Initializing ──► Iterating ──► Converged        (distance < tolerance)
//!                      │
//!                      └───────► MaxIterExceeded  (counter == max_iter)
//! ```
//!
//! Hitting the cap is reported through [`Outcome::converged`] and
//! [`Outcome::status`]; only setup errors and inner optimizer failures come
//! back as `Err`.

use log::{debug, info, warn};

use crate::error::VfiError;
use crate::grid::Grid;
use crate::iterate_det;
use crate::mechanics::{distance, utility};
use crate::optimize::ScalarOptions;
use crate::systems::sdk::{Problem, Sweep, bellman};

/// Driver configuration. Defaults match the classroom run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub discount: f64,
    pub grid_min: f64,
    pub grid_max: f64,
    pub grid_size: usize,
    pub max_iter: usize,
    pub tolerance: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            discount: 0.9,
            grid_min: 0.01,
            grid_max: 1.0,
            grid_size: 100,
            max_iter: 200,
            tolerance: 1e-14,
        }
    }
}

impl Config {
    /// Reject anything that would make the run meaningless, before any sweep.
    pub fn validate(&self) -> Result<(), VfiError> {
        if !(self.discount > 0.0 && self.discount < 1.0) {
            return Err(VfiError::invalid(format!(
                "discount must lie in (0, 1), got {}",
                self.discount
            )));
        }
        if !(self.grid_min > 0.0 && self.grid_min.is_finite()) {
            return Err(VfiError::invalid(format!(
                "grid_min must be positive, got {}",
                self.grid_min
            )));
        }
        let (lo, hi) = utility::feasible_actions(self.grid_min, utility::SOFT_EPSILON);
        if !(lo < hi) {
            return Err(VfiError::invalid(format!(
                "grid_min {} leaves no room for an action ([{lo}, {hi}])",
                self.grid_min
            )));
        }
        if !(self.grid_max > self.grid_min && self.grid_max.is_finite()) {
            return Err(VfiError::invalid(format!(
                "grid_max ({}) must exceed grid_min ({})",
                self.grid_max, self.grid_min
            )));
        }
        if self.grid_size < 2 {
            return Err(VfiError::invalid(format!(
                "grid_size must be at least 2, got {}",
                self.grid_size
            )));
        }
        if self.max_iter < 1 {
            return Err(VfiError::invalid("max_iter must be at least 1"));
        }
        if !(self.tolerance > 0.0) {
            return Err(VfiError::invalid(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }

    /// Evenly spaced state grid on `[grid_min, grid_max]`.
    pub fn grid(&self) -> Result<Grid, VfiError> {
        Grid::linspace(self.grid_min, self.grid_max, self.grid_size)
    }
}

/// Terminal state of the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Converged,
    MaxIterExceeded,
}

/// Result record. `value` and `policy` are aligned with the grid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub value: Vec<f64>,
    pub policy: Vec<f64>,
    pub iterations: usize,
    pub final_distance: f64,
    pub converged: bool,
    /// Distance after each sweep, in order.
    pub history: Vec<f64>,
}

impl Outcome {
    pub fn status(&self) -> Status {
        if self.converged { Status::Converged } else { Status::MaxIterExceeded }
    }
}

/// Quick path: cake eating on the config's evenly spaced grid, zero
/// initial guess, default optimizer settings.
#[cfg(feature = "system-cake_eating")]
pub fn solve(cfg: &Config) -> Result<Outcome, VfiError> {
    use crate::systems::cake_eating::CakeEating;

    cfg.validate()?;
    let grid = cfg.grid()?;
    solve_ext(&CakeEating::new(cfg.discount), &grid, cfg, None, &ScalarOptions::default())
}

/// Full control: any [`Problem`], any grid, optional initial guess.
///
/// `cfg.grid_*` fields are ignored here; `grid` is used as given.
/// `cfg.discount` must equal the problem's discount, and every grid point
/// must leave the problem a non-empty action interval.
pub fn solve_ext<P>(
    problem: &P,
    grid: &Grid,
    cfg: &Config,
    initial: Option<Vec<f64>>,
    opts: &ScalarOptions,
) -> Result<Outcome, VfiError>
where
    P: Problem + ?Sized,
{
    if cfg.max_iter < 1 {
        return Err(VfiError::invalid("max_iter must be at least 1"));
    }
    if !(cfg.tolerance > 0.0) {
        return Err(VfiError::invalid(format!(
            "tolerance must be positive, got {}",
            cfg.tolerance
        )));
    }
    let beta = problem.discount();
    if !(beta > 0.0 && beta < 1.0) {
        return Err(VfiError::invalid(format!("discount must lie in (0, 1), got {beta}")));
    }
    if cfg.discount != beta {
        return Err(VfiError::invalid(format!(
            "config discount {} does not match the problem's {beta}",
            cfg.discount
        )));
    }
    for (i, &w) in grid.points().iter().enumerate() {
        let (lo, hi) = problem.action_bounds(w);
        if !(lo < hi) {
            return Err(VfiError::invalid(format!(
                "state {w} at index {i} leaves no room for an action ([{lo}, {hi}])"
            )));
        }
    }

    let n = grid.len();
    let value0 = match initial {
        Some(v) if v.len() != n => {
            return Err(VfiError::invalid(format!(
                "initial guess has {} values for a grid of {n}",
                v.len()
            )));
        }
        Some(v) => v,
        None => vec![0.0; n],
    };
    let start = Sweep { value: value0, policy: vec![0.0; n] };

    let mut history = Vec::with_capacity(cfg.max_iter.min(4096));
    let it = iterate_det(
        start,
        |prev: &Sweep| bellman(problem, &prev.value, grid, opts),
        |prev: &Sweep, next: &Sweep| distance::sum_sq_diff(&next.value, &prev.value),
        |iter, dist| {
            debug!("Iter={iter}, distance={dist:10.4e}");
            history.push(dist);
        },
        cfg.tolerance,
        cfg.max_iter,
    )?;

    if it.converged {
        info!("converged after {} sweeps (distance {:.4e})", it.iters, it.distance);
    } else {
        warn!(
            "stopped after {} sweeps without reaching tolerance {:e} (distance {:.4e})",
            it.iters, cfg.tolerance, it.distance
        );
    }

    Ok(Outcome {
        value: it.state.value,
        policy: it.state.policy,
        iterations: it.iters,
        final_distance: it.distance,
        converged: it.converged,
        history,
    })
}
