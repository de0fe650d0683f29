//! Closed-form steam correlations.
//!
//! The saturation curve is the Wagner–Pruss equation (see [`crate::saturation`]).
//! Two-phase properties are smeared across a band of `QUALITY_BAND_K` centred
//! on the saturation temperature, so quality, enthalpy and entropy are all
//! continuous and non-decreasing in temperature at fixed pressure:
//!
//! ```text
//! x = clamp(0.5 + (T - T_sat) / 100, 0, 1)
//! h = c_l T + x h_fg(T_sat)
//! s = c_l ln(T / 273.15 K) + x h_fg(T_sat) / T_sat
//! v = (1 - x) v_l + x R T / p
//! ```

use crate::envelope::OperatingEnvelope;
use crate::error::SteamResult;
use crate::isentropic::{self, IsentropicDrop, IsentropicSearch};
use crate::model::{
    SpecEnthalpy, SpecEntropy, SpecVolume, SteamProperties, SteamPropertyPack, validation,
};
use crate::saturation;
use gf_core::units::constants::ZERO_CELSIUS_K;
use gf_core::units::{Pressure, Temperature, bar, degc, to_bar, to_degc};

/// Liquid specific heat [kJ/(kg·K)]
const CP_LIQUID: f64 = 4.19;
/// Latent heat at 0 °C [kJ/kg]
const HFG_0C: f64 = 2501.0;
/// Slope of the latent heat with saturation temperature [kJ/(kg·K)]
const HFG_SLOPE: f64 = 2.361;
/// Liquid specific volume [m³/kg]
const V_LIQUID: f64 = 0.001;
/// Specific gas constant of water vapour [kJ/(kg·K)]
const R_VAPOUR: f64 = 0.4615;
/// Width of the two-phase band around T_sat [K]
const QUALITY_BAND_K: f64 = 100.0;

/// Default steam property backend.
#[derive(Clone, Debug, Default)]
pub struct CorrelationSteam {
    envelope: OperatingEnvelope,
    search: IsentropicSearch,
}

impl CorrelationSteam {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same correlations, different isentropic search tuning.
    pub fn with_search(search: IsentropicSearch) -> Self {
        Self {
            envelope: OperatingEnvelope::default(),
            search,
        }
    }

    /// Validate and clamp a (P, T) pair, returning (bar, °C).
    fn clamp_state(&self, p: Pressure, t: Temperature) -> SteamResult<(f64, f64)> {
        validation::validate_pressure(p)?;
        validation::validate_temperature(t)?;
        Ok((
            self.envelope.clamp_pressure_bar(to_bar(p)),
            self.envelope.clamp_temperature_c(to_degc(t)),
        ))
    }

    fn pack_at(&self, p_bar: f64, t_c: f64) -> SteamPropertyPack {
        let t_sat = saturation::temperature_c(p_bar);
        let x = quality(t_c, t_sat);
        let hfg = latent_heat(t_sat);
        let t_k = t_c + ZERO_CELSIUS_K;

        SteamPropertyPack {
            h: CP_LIQUID * t_c + x * hfg,
            s: CP_LIQUID * (t_k / ZERO_CELSIUS_K).ln() + x * hfg / (t_sat + ZERO_CELSIUS_K),
            v: (1.0 - x) * V_LIQUID + x * R_VAPOUR * t_k / (100.0 * p_bar),
            x,
        }
    }
}

fn quality(t_c: f64, t_sat_c: f64) -> f64 {
    (0.5 + (t_c - t_sat_c) / QUALITY_BAND_K).clamp(0.0, 1.0)
}

fn latent_heat(t_sat_c: f64) -> f64 {
    HFG_0C - HFG_SLOPE * t_sat_c
}

impl SteamProperties for CorrelationSteam {
    fn name(&self) -> &str {
        "correlation"
    }

    fn envelope(&self) -> OperatingEnvelope {
        self.envelope
    }

    fn saturated_temperature(&self, p: Pressure) -> SteamResult<Temperature> {
        validation::validate_pressure(p)?;
        let p_bar = self.envelope.clamp_pressure_bar(to_bar(p));
        Ok(degc(saturation::temperature_c(p_bar)))
    }

    fn saturated_pressure(&self, t: Temperature) -> SteamResult<Pressure> {
        validation::validate_temperature(t)?;
        let t_c = self.envelope.clamp_temperature_c(to_degc(t));
        Ok(bar(saturation::pressure_bar(t_c)))
    }

    fn enthalpy(&self, p: Pressure, t: Temperature) -> SteamResult<SpecEnthalpy> {
        let (p_bar, t_c) = self.clamp_state(p, t)?;
        Ok(self.pack_at(p_bar, t_c).h)
    }

    fn entropy(&self, p: Pressure, t: Temperature) -> SteamResult<SpecEntropy> {
        let (p_bar, t_c) = self.clamp_state(p, t)?;
        Ok(self.pack_at(p_bar, t_c).s)
    }

    fn specific_volume(&self, p: Pressure, t: Temperature) -> SteamResult<SpecVolume> {
        let (p_bar, t_c) = self.clamp_state(p, t)?;
        Ok(self.pack_at(p_bar, t_c).v)
    }

    fn steam_quality(&self, p: Pressure, t: Temperature) -> SteamResult<f64> {
        let (p_bar, t_c) = self.clamp_state(p, t)?;
        Ok(quality(t_c, saturation::temperature_c(p_bar)))
    }

    fn properties(&self, p: Pressure, t: Temperature) -> SteamResult<SteamPropertyPack> {
        let (p_bar, t_c) = self.clamp_state(p, t)?;
        Ok(self.pack_at(p_bar, t_c))
    }

    fn isentropic_enthalpy_drop(
        &self,
        p_in: Pressure,
        t_in: Temperature,
        p_out: Pressure,
    ) -> SteamResult<IsentropicDrop> {
        isentropic::expand(self, &self.search, p_in, t_in, p_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SteamError;

    #[test]
    fn wellhead_quality_sits_in_the_band() {
        let steam = CorrelationSteam::new();
        // T_sat(10.5 bar) is about 182 °C, so 178 °C is just below the midpoint.
        let x = steam.steam_quality(bar(10.5), degc(178.0)).unwrap();
        assert!((x - 0.46).abs() < 0.005, "x = {x}");
    }

    #[test]
    fn quality_saturates_outside_the_band() {
        let steam = CorrelationSteam::new();
        assert_eq!(steam.steam_quality(bar(25.0), degc(10.0)).unwrap(), 0.0);
        assert_eq!(steam.steam_quality(bar(0.06), degc(200.0)).unwrap(), 1.0);
    }

    #[test]
    fn at_saturation_quality_is_one_half() {
        let steam = CorrelationSteam::new();
        let t_sat = steam.saturated_temperature(bar(5.0)).unwrap();
        let x = steam.steam_quality(bar(5.0), t_sat).unwrap();
        assert!((x - 0.5).abs() < 1e-9);
    }

    #[test]
    fn pack_matches_individual_calls() {
        let steam = CorrelationSteam::new();
        let (p, t) = (bar(9.8), degc(179.0));
        let pack = steam.properties(p, t).unwrap();
        assert_eq!(pack.h, steam.enthalpy(p, t).unwrap());
        assert_eq!(pack.s, steam.entropy(p, t).unwrap());
        assert_eq!(pack.v, steam.specific_volume(p, t).unwrap());
        assert_eq!(pack.x, steam.steam_quality(p, t).unwrap());
    }

    #[test]
    fn liquid_and_vapour_volumes() {
        let steam = CorrelationSteam::new();
        let v_liquid = steam.specific_volume(bar(10.0), degc(20.0)).unwrap();
        assert!((v_liquid - V_LIQUID).abs() < 1e-12);

        // Ideal gas at 1 bar and 200 °C: R T / p = 0.4615 * 473.15 / 100
        let v_vapour = steam.specific_volume(bar(1.0), degc(200.0)).unwrap();
        assert!((v_vapour - 2.1836).abs() < 1e-3, "v = {v_vapour}");
    }

    #[test]
    fn out_of_envelope_inputs_are_clamped() {
        let steam = CorrelationSteam::new();
        let h_clamped = steam.enthalpy(bar(100.0), degc(400.0)).unwrap();
        let h_edge = steam.enthalpy(bar(25.0), degc(250.0)).unwrap();
        assert_eq!(h_clamped, h_edge);

        let t_low = steam.saturated_temperature(bar(0.0)).unwrap();
        let t_min = steam.saturated_temperature(bar(0.01)).unwrap();
        assert_eq!(to_degc(t_low), to_degc(t_min));
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let steam = CorrelationSteam::new();
        assert!(matches!(
            steam.enthalpy(bar(f64::NAN), degc(100.0)),
            Err(SteamError::NonPhysical { .. })
        ));
        assert!(matches!(
            steam.steam_quality(bar(1.0), degc(f64::INFINITY)),
            Err(SteamError::NonPhysical { .. })
        ));
        assert!(steam.saturated_pressure(degc(f64::NAN)).is_err());
    }

    #[test]
    fn equal_pressure_drop_is_near_zero() {
        let steam = CorrelationSteam::new();
        let p = bar(9.8);
        let t_sat = steam.saturated_temperature(p).unwrap();
        let drop = steam.isentropic_enthalpy_drop(p, t_sat, p).unwrap();
        assert!(drop.converged);
        assert!(drop.enthalpy_drop.abs() < 0.5, "drop = {}", drop.enthalpy_drop);
    }

    #[test]
    fn custom_search_is_used() {
        let steam = CorrelationSteam::with_search(IsentropicSearch {
            tolerance: 1e-12,
            max_iterations: 2,
        });
        let drop = steam
            .isentropic_enthalpy_drop(bar(9.8), degc(179.0), bar(0.06))
            .unwrap();
        assert_eq!(drop.iterations, 2);
        assert!(drop.is_degraded());
    }
}
