//! Analytical solution of the cake-eating problem with log utility.
//!
//! V(W) = A + B·ln W,  ψ(W) = β·W, with
//! B = 1 / (1 - β) and A = [ln(1 - β) + β/(1 - β)·ln β] / (1 - β).

/// `(A, B)` for discount `beta` in (0, 1).
#[inline]
pub fn value_coefficients(beta: f64) -> (f64, f64) {
    let b = 1.0 / (1.0 - beta);
    let a = ((1.0 - beta).ln() + beta * b * beta.ln()) * b;
    (a, b)
}

/// V(W).
#[inline]
pub fn value(beta: f64, w: f64) -> f64 {
    let (a, b) = value_coefficients(beta);
    a + b * w.ln()
}

/// ψ(W): save the fraction β, eat the rest.
#[inline]
pub fn policy(beta: f64, w: f64) -> f64 {
    beta * w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_form_satisfies_bellman_equation() {
        // V(W) = ln(W - ψ(W)) + β V(ψ(W)) at a few points.
        let beta = 0.9;
        for w in [0.05, 0.3, 1.0, 4.0] {
            let rhs = (w - policy(beta, w)).ln() + beta * value(beta, policy(beta, w));
            assert!((value(beta, w) - rhs).abs() < 1e-10, "w={w}");
        }
    }

    #[test]
    fn coefficients_for_beta_point_nine() {
        let (a, b) = value_coefficients(0.9);
        assert!((b - 10.0).abs() < 1e-12);
        assert!((a + 32.508_297_339).abs() < 1e-6, "a={a}");
    }
}
