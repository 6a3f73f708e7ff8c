//! Discretized state space.
//!
//! A [`Grid`] is validated once at construction and then shared read-only
//! by the operator, the interpolator and the driver.

use crate::error::VfiError;
use crate::mechanics::spacing;

/// Strictly increasing, finite, at least two points.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    points: Vec<f64>,
}

impl Grid {
    pub fn new(points: Vec<f64>) -> Result<Self, VfiError> {
        validate_points(&points)?;
        Ok(Self { points })
    }

    /// Evenly spaced grid on `[min, max]`.
    pub fn linspace(min: f64, max: f64, n: usize) -> Result<Self, VfiError> {
        check_span(min, max, n)?;
        Self::new(spacing::linspace(min, max, n))
    }

    /// Log-spaced grid on `[min, max]`; needs `min > 0`.
    pub fn geomspace(min: f64, max: f64, n: usize) -> Result<Self, VfiError> {
        check_span(min, max, n)?;
        if min <= 0.0 {
            return Err(VfiError::invalid("geomspace needs a positive lower end"));
        }
        Self::new(spacing::geomspace(min, max, n))
    }

    #[inline]
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` if the grid holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.points[0]
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.points[self.points.len() - 1]
    }
}

fn check_span(min: f64, max: f64, n: usize) -> Result<(), VfiError> {
    if n < 2 {
        return Err(VfiError::invalid(format!("grid needs at least 2 points, got {n}")));
    }
    if !(min.is_finite() && max.is_finite()) {
        return Err(VfiError::invalid("grid bounds must be finite"));
    }
    if max <= min {
        return Err(VfiError::invalid(format!("grid max ({max}) must exceed min ({min})")));
    }
    Ok(())
}

pub(crate) fn validate_points(points: &[f64]) -> Result<(), VfiError> {
    if points.len() < 2 {
        return Err(VfiError::invalid("grid needs at least 2 points"));
    }
    if points.iter().any(|v| !v.is_finite()) {
        return Err(VfiError::invalid("grid points must be finite"));
    }
    if points.windows(2).any(|w| w[1] <= w[0]) {
        return Err(VfiError::invalid("grid must be strictly increasing"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_and_unordered_grids() {
        assert!(Grid::new(vec![1.0]).is_err());
        assert!(Grid::new(vec![1.0, 0.5, 2.0]).is_err());
        assert!(Grid::new(vec![0.0, 1.0, 1.0]).is_err());
        assert!(Grid::new(vec![0.0, f64::NAN]).is_err());
        assert!(Grid::linspace(1.0, 1.0, 10).is_err());
        assert!(Grid::linspace(0.0, 1.0, 1).is_err());
        assert!(Grid::geomspace(0.0, 1.0, 10).is_err());
    }

    #[test]
    fn linspace_grid_spans_bounds() {
        let g = Grid::linspace(0.01, 1.0, 100).unwrap();
        assert_eq!(g.len(), 100);
        assert_eq!(g.min(), 0.01);
        assert_eq!(g.max(), 1.0);
    }
}
