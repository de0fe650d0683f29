//! Constant-entropy expansion by bounded bisection on outlet temperature.

use crate::error::SteamResult;
use crate::model::{SpecEnthalpy, SteamProperties, validation};
use gf_core::units::{Pressure, Temperature, degc};

/// Tuning of the outlet-temperature search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IsentropicSearch {
    /// Entropy residual accepted as converged [kJ/(kg·K)]
    pub tolerance: f64,
    /// Hard cap on bisection steps
    pub max_iterations: usize,
}

impl Default for IsentropicSearch {
    fn default() -> Self {
        Self {
            tolerance: 1e-4,
            max_iterations: 100,
        }
    }
}

/// Outcome of an isentropic expansion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IsentropicDrop {
    /// h(p_in, t_in) - h(p_out, T_out) [kJ/kg]. May be negative for a compression.
    pub enthalpy_drop: SpecEnthalpy,
    /// Outlet temperature of the best candidate.
    pub outlet_temperature: Temperature,
    /// |s(p_out, T_out) - s(p_in, t_in)| of the best candidate [kJ/(kg·K)]
    pub entropy_residual: f64,
    /// Bisection steps taken.
    pub iterations: usize,
    pub converged: bool,
}

impl IsentropicDrop {
    /// True when the search hit its iteration cap and the drop is only the
    /// best candidate seen.
    pub fn is_degraded(&self) -> bool {
        !self.converged
    }
}

/// Expand from (p_in, t_in) to p_out at constant entropy.
///
/// Bisects the outlet temperature over the model's envelope. Entropy is
/// assumed non-decreasing in temperature at fixed pressure. When the target
/// entropy is not bracketed (or the cap is reached first) the candidate with
/// the smallest residual is returned with `converged == false`.
pub fn expand<S: SteamProperties + ?Sized>(
    steam: &S,
    search: &IsentropicSearch,
    p_in: Pressure,
    t_in: Temperature,
    p_out: Pressure,
) -> SteamResult<IsentropicDrop> {
    validation::validate_pressure(p_in)?;
    validation::validate_temperature(t_in)?;
    validation::validate_pressure(p_out)?;

    let envelope = steam.envelope();
    let s_target = steam.entropy(p_in, t_in)?;
    let h_in = steam.enthalpy(p_in, t_in)?;

    let mut t_low = envelope.t_min_c;
    let mut t_high = envelope.t_max_c;
    let mut best_t = 0.5 * (t_low + t_high);
    let mut best_residual = f64::INFINITY;
    let mut iterations = 0;
    let mut converged = false;

    while iterations < search.max_iterations {
        iterations += 1;
        let t_mid = 0.5 * (t_low + t_high);
        let s_mid = steam.entropy(p_out, degc(t_mid))?;
        let residual = (s_mid - s_target).abs();

        if residual < best_residual {
            best_residual = residual;
            best_t = t_mid;
        }
        if residual < search.tolerance {
            converged = true;
            break;
        }

        if s_mid < s_target {
            t_low = t_mid;
        } else {
            t_high = t_mid;
        }
    }

    let outlet_temperature = degc(best_t);
    let h_out = steam.enthalpy(p_out, outlet_temperature)?;

    Ok(IsentropicDrop {
        enthalpy_drop: h_in - h_out,
        outlet_temperature,
        entropy_residual: best_residual,
        iterations,
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CorrelationSteam;
    use gf_core::units::{bar, to_degc};

    #[test]
    fn default_search_settings() {
        let search = IsentropicSearch::default();
        assert_eq!(search.tolerance, 1e-4);
        assert_eq!(search.max_iterations, 100);
    }

    #[test]
    fn turbine_expansion_converges() {
        let steam = CorrelationSteam::new();
        let drop = expand(
            &steam,
            &IsentropicSearch::default(),
            bar(9.8),
            degc(179.0),
            bar(0.06),
        )
        .unwrap();

        assert!(drop.converged);
        assert!(!drop.is_degraded());
        assert!(drop.entropy_residual < 1e-4);
        assert!(drop.iterations <= 100);
        assert!(drop.enthalpy_drop > 300.0 && drop.enthalpy_drop < 600.0);
        assert!(to_degc(drop.outlet_temperature) < 179.0);
    }

    #[test]
    fn unreachable_entropy_is_degraded() {
        // Superheated vapour at the lowest pressure has more entropy than
        // anything the envelope offers at 25 bar.
        let steam = CorrelationSteam::new();
        let drop = expand(
            &steam,
            &IsentropicSearch::default(),
            bar(0.01),
            degc(250.0),
            bar(25.0),
        )
        .unwrap();

        assert!(drop.is_degraded());
        assert_eq!(drop.iterations, 100);
        assert!(drop.enthalpy_drop.is_finite());
        assert!((to_degc(drop.outlet_temperature) - 250.0).abs() < 1e-3);
    }

    #[test]
    fn iteration_cap_is_respected() {
        let steam = CorrelationSteam::new();
        let search = IsentropicSearch {
            tolerance: 1e-12,
            max_iterations: 3,
        };
        let drop = expand(&steam, &search, bar(9.8), degc(179.0), bar(0.06)).unwrap();

        assert_eq!(drop.iterations, 3);
        assert!(!drop.converged);
        assert!(drop.enthalpy_drop.is_finite());
    }

    #[test]
    fn rejects_non_finite_pressure() {
        let steam = CorrelationSteam::new();
        let result = expand(
            &steam,
            &IsentropicSearch::default(),
            bar(f64::NAN),
            degc(179.0),
            bar(0.06),
        );
        assert!(result.is_err());
    }
}
