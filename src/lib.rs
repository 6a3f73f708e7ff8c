/*!
`cake_vfi` — value-function iteration for the cake-eating problem.

What it does
- Solves `V(W) = max_{0<W'<W} ln(W - W') + β V(W')` on a discretized state
  grid by repeatedly applying the Bellman operator until the value function
  stops moving.
- Composes four small pieces:
  * `interp`   : piecewise-linear interpolation of `V'` between grid points
  * `optimize` : bounded scalar minimization (Brent) for each grid point
  * `systems`  : the Bellman operator `T : V' -> (V, ψ)` and the models it runs
  * `driver`   : the fixed-point loop `V_{t+1} = T(V_t)` with a tolerance and
    an iteration cap
- The loop itself is [`iterate_det`], a generic deterministic fixed-point
  iteration over any state with a distance.

How to use (call surface only)
- Build a [`driver::Config`] (or take `Config::default()`, which mirrors the
  classroom parameters: β = 0.9, 100 points on `[0.01, 1]`, 200 sweeps,
  tolerance 1e-14).
- Call `driver::solve(&cfg) -> Result<Outcome, VfiError>`.
- Check `Outcome::converged`; running out of sweeps is an outcome, not an
  error.

What it does NOT do
- No plotting, no files, no timing. The caller owns those (see
  `demos/cake.rs`).
*/

pub mod driver;
pub mod error;
pub mod grid;
pub mod interp;
pub mod mechanics;
pub mod optimize;
pub mod report;
pub mod systems;

#[cfg(feature = "distributions")]
pub mod distributions;

pub use error::VfiError;
pub use grid::Grid;

/// Where a fixed-point iteration stopped.
#[derive(Clone, Debug)]
pub struct Iterate<T> {
    pub state: T,
    pub iters: usize,
    pub distance: f64,
    pub converged: bool,
}

/// Deterministic fixed-point iteration: x_{t+1} = step(x_t).
///
/// Runs while `iters < max_iters` and `distance(x_t, x_{t+1}) >= tol`.
/// `observe(iters, distance)` is called after every step. An error from
/// `step` aborts the loop and is returned as is.
pub fn iterate_det<T, E, Step, Dist, Obs>(
    mut x: T,
    mut step: Step,
    distance: Dist,
    mut observe: Obs,
    tol: f64,
    max_iters: usize,
) -> Result<Iterate<T>, E>
where
    Step: FnMut(&T) -> Result<T, E>,
    Dist: Fn(&T, &T) -> f64,
    Obs: FnMut(usize, f64),
{
    let mut iters = 0;
    let mut dist = f64::INFINITY;
    while iters < max_iters && dist >= tol {
        iters += 1;
        let next = step(&x)?;
        dist = distance(&x, &next);
        observe(iters, dist);
        x = next;
    }
    Ok(Iterate { state: x, iters, distance: dist, converged: dist < tol })
}
