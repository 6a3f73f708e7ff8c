//! Piecewise-linear interpolation with linear extrapolation.
//!
//! Used to turn the sampled continuation value `V(W_i)` into a function of
//! any `W'` the optimizer proposes, including points below the grid floor
//! (the optimal `W'` at `W_min` is always below it).

use crate::error::VfiError;
use crate::grid::validate_points;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueryLocation {
    Left,
    Inside(usize),
    Right,
}

/// Owns copies of the nodes; cheap to build once per sweep.
#[derive(Debug, Clone)]
pub struct LinearInterp {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl LinearInterp {
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, VfiError> {
        if x.len() != y.len() {
            return Err(VfiError::invalid(format!(
                "grid and values differ in length ({} vs {})",
                x.len(),
                y.len()
            )));
        }
        validate_points(x)?;
        if y.iter().any(|v| !v.is_finite()) {
            return Err(VfiError::invalid("values must be finite"));
        }
        Ok(Self { x: x.to_vec(), y: y.to_vec() })
    }

    /// `y(xq)`; outside the nodes the edge segment is extended.
    pub fn value(&self, xq: f64) -> f64 {
        let n = self.x.len();
        let i = match query_location(&self.x, xq) {
            QueryLocation::Left => 0,
            QueryLocation::Right => n - 2,
            QueryLocation::Inside(i) => i,
        };
        let (w0, w1) = linear_weights(self.x[i], self.x[i + 1], xq);
        w0 * self.y[i] + w1 * self.y[i + 1]
    }
}

fn query_location(x: &[f64], xq: f64) -> QueryLocation {
    if xq < x[0] {
        return QueryLocation::Left;
    }
    if xq > x[x.len() - 1] {
        return QueryLocation::Right;
    }
    let idx = x.partition_point(|v| *v <= xq);
    if idx == 0 {
        QueryLocation::Inside(0)
    } else if idx >= x.len() {
        QueryLocation::Inside(x.len() - 2)
    } else {
        QueryLocation::Inside(idx - 1)
    }
}

#[inline]
fn linear_weights(x0: f64, x1: f64, xq: f64) -> (f64, f64) {
    let w = (xq - x0) / (x1 - x0);
    (1.0 - w, w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn midpoint_is_average_of_neighbours() {
        let itp = LinearInterp::new(&[1.0, 2.0, 4.0], &[0.01, 0.02, 0.04]).unwrap();
        assert_relative_eq!(itp.value(1.5), 0.015, epsilon = 1e-12);
        assert_relative_eq!(itp.value(3.0), 0.03, epsilon = 1e-12);
    }

    #[test]
    fn extrapolates_from_both_edges() {
        let itp = LinearInterp::new(&[0.0, 1.0, 3.0], &[1.0, 2.0, 0.0]).unwrap();
        assert_relative_eq!(itp.value(-1.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(itp.value(4.0), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!(LinearInterp::new(&[0.0, 1.0], &[0.0, f64::INFINITY]).is_err());
    }
}
