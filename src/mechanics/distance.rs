//! Convergence distance between successive value-function iterates.

/// Sum of squared differences (not normalized by length).
/// Extra elements of the longer slice are ignored.
#[inline]
pub fn sum_sq_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_distance_is_not_normalized() {
        assert_eq!(sum_sq_diff(&[1.0, 2.0, 3.0], &[0.0, 0.0, 0.0]), 14.0);
        assert_eq!(sum_sq_diff(&[1.0, 2.0], &[1.0, 2.0, 9.0]), 0.0);
    }
}
