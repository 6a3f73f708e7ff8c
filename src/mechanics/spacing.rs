//! Point layouts for 1-D state grids.

/// `n` evenly spaced points from `min` to `max` inclusive.
/// The last point is `max` exactly.
pub fn linspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (n - 1) as f64;
            let mut pts: Vec<f64> = (0..n).map(|i| min + step * i as f64).collect();
            pts[n - 1] = max;
            pts
        }
    }
}

/// `n` log-spaced points from `min` to `max` inclusive (`min > 0`).
/// Denser near `min`, where a log-shaped value function bends the most.
pub fn geomspace(min: f64, max: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let (lmin, lmax) = (min.ln(), max.ln());
            let step = (lmax - lmin) / (n - 1) as f64;
            let mut pts: Vec<f64> = (0..n).map(|i| (lmin + step * i as f64).exp()).collect();
            pts[0] = min;
            pts[n - 1] = max;
            pts
        }
    }
}
