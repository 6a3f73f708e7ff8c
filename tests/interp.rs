// tests/interp.rs
use approx::assert_relative_eq;
use bevy_prng::WyRand;
use cake_vfi::VfiError;
use cake_vfi::interp::LinearInterp;
use rand_core::{RngCore, SeedableRng};

/// Uniform in [0, 1) from the top 53 bits.
fn uniform01(rng: &mut WyRand) -> f64 {
    ((rng.next_u64() >> 11) as f64) / ((1u64 << 53) as f64)
}

/// Strictly increasing grid of `n` points with random positive gaps.
fn random_grid(rng: &mut WyRand, n: usize) -> Vec<f64> {
    let mut x = -5.0 + 10.0 * uniform01(rng);
    (0..n)
        .map(|_| {
            let cur = x;
            x += 0.01 + uniform01(rng);
            cur
        })
        .collect()
}

#[test]
fn hits_stored_values_at_every_node() {
    let mut rng = WyRand::from_seed(7u64.to_le_bytes());
    for _ in 0..50 {
        let n = 2 + (rng.next_u64() % 40) as usize;
        let xs = random_grid(&mut rng, n);
        let ys: Vec<f64> = (0..n).map(|_| -100.0 + 200.0 * uniform01(&mut rng)).collect();
        let itp = LinearInterp::new(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(&ys) {
            assert_relative_eq!(itp.value(*x), *y, epsilon = 1e-9, max_relative = 1e-12);
        }
    }
}

#[test]
fn stays_between_neighbours_inside_each_segment() {
    let mut rng = WyRand::from_seed(11u64.to_le_bytes());
    let xs = random_grid(&mut rng, 30);
    let ys: Vec<f64> = (0..30).map(|_| uniform01(&mut rng)).collect();
    let itp = LinearInterp::new(&xs, &ys).unwrap();
    for i in 0..29 {
        let t = uniform01(&mut rng);
        let xq = xs[i] + t * (xs[i + 1] - xs[i]);
        let (lo, hi) = (ys[i].min(ys[i + 1]), ys[i].max(ys[i + 1]));
        let v = itp.value(xq);
        assert!(v >= lo - 1e-12 && v <= hi + 1e-12, "segment {i}: {v} not in [{lo}, {hi}]");
    }
}

#[test]
fn extrapolates_past_the_last_node() {
    let itp = LinearInterp::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap();
    assert_relative_eq!(itp.value(3.0), 3.0, epsilon = 1e-12);
    assert_relative_eq!(itp.value(-1.5), -1.5, epsilon = 1e-12);
}

#[test]
fn extrapolation_uses_edge_slope_not_overall_trend() {
    // Left edge slope 10, right edge slope 1.
    let itp = LinearInterp::new(&[0.0, 1.0, 2.0], &[0.0, 10.0, 11.0]).unwrap();
    assert_relative_eq!(itp.value(-0.5), -5.0, epsilon = 1e-12);
    assert_relative_eq!(itp.value(4.0), 13.0, epsilon = 1e-12);
}

#[test]
fn rejects_non_increasing_grid() {
    let r = LinearInterp::new(&[1.0, 0.5, 2.0], &[0.0, 0.0, 0.0]);
    assert!(matches!(r, Err(VfiError::InvalidInput(_))));
}

#[test]
fn rejects_mismatched_lengths_and_short_grids() {
    assert!(matches!(
        LinearInterp::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]),
        Err(VfiError::InvalidInput(_))
    ));
    assert!(matches!(LinearInterp::new(&[0.0], &[0.0]), Err(VfiError::InvalidInput(_))));
    assert!(matches!(
        LinearInterp::new(&[0.0, 0.0], &[1.0, 2.0]),
        Err(VfiError::InvalidInput(_))
    ));
}
