//! Closed-form densities: Gamma, Generalized Gamma, Generalized Beta of the
//! second kind, Normal.
//!
//! Plain formula evaluation. `x = 0` is not special-cased, so shapes with
//! `alpha < 1` (or `a·p < 1`) give `inf` there.

use std::f64::consts::PI;

use statrs::function::gamma::ln_gamma;

/// GA(x; α, β) with shape α and scale β.
#[inline]
pub fn gamma_pdf(x: f64, alpha: f64, beta: f64) -> f64 {
    x.powf(alpha - 1.0) * (-x / beta).exp() / (beta.powf(alpha) * ln_gamma(alpha).exp())
}

/// GG(x; α, β, m). Reduces to GA when m = 1.
#[inline]
pub fn gengamma_pdf(x: f64, alpha: f64, beta: f64, m: f64) -> f64 {
    m * x.powf(alpha - 1.0) * (-(x / beta).powf(m)).exp()
        / (beta.powf(alpha) * ln_gamma(alpha / m).exp())
}

/// GB2(x; a, b, p, q).
#[inline]
pub fn genbeta2_pdf(x: f64, a: f64, b: f64, p: f64, q: f64) -> f64 {
    let beta_pq = (ln_gamma(p) + ln_gamma(q) - ln_gamma(p + q)).exp();
    a * x.powf(a * p - 1.0) / (b.powf(a * p) * beta_pq * (1.0 + (x / b).powf(a)).powf(p + q))
}

/// N(x; μ, σ).
#[inline]
pub fn norm_pdf(x: f64, mu: f64, sigma: f64) -> f64 {
    let z = x - mu;
    (-(z * z) / (2.0 * sigma * sigma)).exp() / (sigma * (2.0 * PI).sqrt())
}

pub fn gamma_pdf_vec(xs: &[f64], alpha: f64, beta: f64) -> Vec<f64> {
    xs.iter().map(|&x| gamma_pdf(x, alpha, beta)).collect()
}

pub fn gengamma_pdf_vec(xs: &[f64], alpha: f64, beta: f64, m: f64) -> Vec<f64> {
    xs.iter().map(|&x| gengamma_pdf(x, alpha, beta, m)).collect()
}

pub fn genbeta2_pdf_vec(xs: &[f64], a: f64, b: f64, p: f64, q: f64) -> Vec<f64> {
    xs.iter().map(|&x| genbeta2_pdf(x, a, b, p, q)).collect()
}

pub fn norm_pdf_vec(xs: &[f64], mu: f64, sigma: f64) -> Vec<f64> {
    xs.iter().map(|&x| norm_pdf(x, mu, sigma)).collect()
}
