//! Bounded scalar minimization (Brent's method on a closed interval).
//!
//! Golden-section steps safeguarded by parabolic interpolation. The
//! objective is only ever evaluated strictly inside `[lower, upper]`, so it
//! may be undefined at the bounds themselves.

use crate::error::VfiError;

/// (3 - √5) / 2
const GOLDEN: f64 = 0.381_966_011_250_105_1;

/// Options for [`minimize_bounded`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarOptions {
    /// Maximum number of refinement steps.
    pub max_iter: usize,
    /// Absolute tolerance on the minimizer location.
    pub xatol: f64,
}

impl Default for ScalarOptions {
    fn default() -> Self {
        Self { max_iter: 500, xatol: 1e-10 }
    }
}

/// Result of a bounded minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    /// Best point found.
    pub x: f64,
    /// Objective at `x`.
    pub f_min: f64,
    /// Refinement steps taken.
    pub iterations: usize,
    /// False when `max_iter` ran out before the bracket closed.
    pub converged: bool,
}

/// Minimize `f` over `[lower, upper]`.
///
/// Running out of iterations is reported through [`Minimum::converged`],
/// not as an error; only a malformed interval or options are rejected.
pub fn minimize_bounded<F>(
    mut f: F,
    lower: f64,
    upper: f64,
    opts: &ScalarOptions,
) -> Result<Minimum, VfiError>
where
    F: FnMut(f64) -> f64,
{
    if !(lower.is_finite() && upper.is_finite()) || lower >= upper {
        return Err(VfiError::invalid(format!(
            "bounds must be finite with lower < upper, got [{lower}, {upper}]"
        )));
    }
    if !(opts.xatol > 0.0) {
        return Err(VfiError::invalid("xatol must be positive"));
    }

    let sqrt_eps = f64::EPSILON.sqrt();
    let (mut a, mut b) = (lower, upper);

    // xf: best so far, nfc: second best, fulc: previous second best.
    let mut fulc = a + GOLDEN * (b - a);
    let (mut nfc, mut xf) = (fulc, fulc);
    let (mut rat, mut e) = (0.0_f64, 0.0_f64);
    let mut fx = f(xf);
    let (mut ffulc, mut fnfc) = (fx, fx);

    let mut xm = 0.5 * (a + b);
    let mut tol1 = sqrt_eps * xf.abs() + opts.xatol / 3.0;
    let mut tol2 = 2.0 * tol1;
    let mut iterations = 0;

    while (xf - xm).abs() > tol2 - 0.5 * (b - a) {
        if iterations >= opts.max_iter {
            return Ok(Minimum { x: xf, f_min: fx, iterations, converged: false });
        }
        iterations += 1;

        let mut golden = true;
        if e.abs() > tol1 {
            // Try a parabola through (xf, nfc, fulc).
            golden = false;
            let mut r = (xf - nfc) * (fx - ffulc);
            let mut q = (xf - fulc) * (fx - fnfc);
            let mut p = (xf - fulc) * q - (xf - nfc) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();
            r = e;
            e = rat;

            if p.abs() < (0.5 * q * r).abs() && p > q * (a - xf) && p < q * (b - xf) {
                rat = p / q;
                let x = xf + rat;
                if (x - a) < tol2 || (b - x) < tol2 {
                    rat = tol1 * sign_or_one(xm - xf);
                }
            } else {
                golden = true;
            }
        }
        if golden {
            e = if xf >= xm { a - xf } else { b - xf };
            rat = GOLDEN * e;
        }

        let x = xf + sign_or_one(rat) * rat.abs().max(tol1);
        let fu = f(x);

        if fu <= fx {
            if x >= xf {
                a = xf;
            } else {
                b = xf;
            }
            (fulc, ffulc) = (nfc, fnfc);
            (nfc, fnfc) = (xf, fx);
            (xf, fx) = (x, fu);
        } else {
            if x < xf {
                a = x;
            } else {
                b = x;
            }
            if fu <= fnfc || nfc == xf {
                (fulc, ffulc) = (nfc, fnfc);
                (nfc, fnfc) = (x, fu);
            } else if fu <= ffulc || fulc == xf || fulc == nfc {
                (fulc, ffulc) = (x, fu);
            }
        }

        xm = 0.5 * (a + b);
        tol1 = sqrt_eps * xf.abs() + opts.xatol / 3.0;
        tol2 = 2.0 * tol1;
    }

    Ok(Minimum { x: xf, f_min: fx, iterations, converged: true })
}

#[inline]
fn sign_or_one(v: f64) -> f64 {
    if v < 0.0 { -1.0 } else { 1.0 }
}
