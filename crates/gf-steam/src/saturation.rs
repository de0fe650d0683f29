//! Liquid–vapour saturation curve of water.
//!
//! Uses the Wagner–Pruss vapour-pressure equation:
//!
//! ```text
//! ln(p_sat / p_c) = (T_c / T) * Σ n_i θ^e_i,   θ = 1 - T / T_c
//! ```
//!
//! The inverse (temperature from pressure) has no closed form and is solved by
//! a bracketed Newton iteration. Both directions are strictly monotonic below
//! the critical point.

use gf_core::units::constants::ZERO_CELSIUS_K;

/// Critical temperature of water [K]
pub const CRITICAL_TEMPERATURE_K: f64 = 647.096;
/// Critical pressure of water [bar]
pub const CRITICAL_PRESSURE_BAR: f64 = 220.64;

const N: [f64; 6] = [
    -7.859_517_83,
    1.844_082_59,
    -11.786_649_7,
    22.680_741_1,
    -15.961_871_9,
    1.801_225_02,
];
const E: [f64; 6] = [1.0, 1.5, 3.0, 3.5, 4.0, 7.5];

const T_LOW_K: f64 = 200.0;
const MAX_NEWTON_ITER: usize = 50;
const NEWTON_TOL_K: f64 = 1e-9;
const RESIDUAL_TOL: f64 = 1e-13;

fn series(theta: f64) -> f64 {
    N.iter().zip(E).map(|(n, e)| n * theta.powf(e)).sum()
}

fn series_derivative(theta: f64) -> f64 {
    N.iter()
        .zip(E)
        .map(|(n, e)| n * e * theta.powf(e - 1.0))
        .sum()
}

/// ln(p_sat / p_c) at absolute temperature `t_k`.
fn ln_reduced_pressure(t_k: f64) -> f64 {
    let theta = 1.0 - t_k / CRITICAL_TEMPERATURE_K;
    (CRITICAL_TEMPERATURE_K / t_k) * series(theta)
}

fn ln_reduced_pressure_dt(t_k: f64) -> f64 {
    let theta = 1.0 - t_k / CRITICAL_TEMPERATURE_K;
    -(CRITICAL_TEMPERATURE_K / (t_k * t_k)) * series(theta) - series_derivative(theta) / t_k
}

/// Saturation pressure [bar] at temperature `t_c` [°C].
pub fn pressure_bar(t_c: f64) -> f64 {
    let t_k = (t_c + ZERO_CELSIUS_K).min(CRITICAL_TEMPERATURE_K);
    CRITICAL_PRESSURE_BAR * ln_reduced_pressure(t_k).exp()
}

/// Saturation temperature [°C] at pressure `p_bar` [bar].
///
/// Newton steps that leave the current bracket fall back to bisection, so
/// the iteration cannot diverge.
pub fn temperature_c(p_bar: f64) -> f64 {
    let target = (p_bar / CRITICAL_PRESSURE_BAR).ln();
    let mut lo = T_LOW_K;
    let mut hi = CRITICAL_TEMPERATURE_K;
    let mut t_k = 373.15;

    for _ in 0..MAX_NEWTON_ITER {
        let f = ln_reduced_pressure(t_k) - target;
        if f.abs() < RESIDUAL_TOL {
            break;
        }
        if f > 0.0 {
            hi = t_k;
        } else {
            lo = t_k;
        }

        let mut next = t_k - f / ln_reduced_pressure_dt(t_k);
        if !(next > lo && next < hi) {
            next = 0.5 * (lo + hi);
        }

        let done = (next - t_k).abs() < NEWTON_TOL_K;
        t_k = next;
        if done {
            break;
        }
    }

    t_k - ZERO_CELSIUS_K
}
