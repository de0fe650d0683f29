//! CoolProp-based water properties.

use crate::envelope::OperatingEnvelope;
use crate::error::{SteamError, SteamResult};
use crate::isentropic::IsentropicDrop;
use crate::model::{
    SpecEnthalpy, SpecEntropy, SpecVolume, SteamProperties, SteamPropertyPack, validation,
};
use gf_core::units::{Pressure, Temperature, k, pa};
use rfluids::prelude::*;

/// Margin around T_sat inside which states are evaluated on the saturated
/// vapour line instead of at (P, T) [K]
const SATURATION_BAND_K: f64 = 1e-6;

/// Lowest temperature CoolProp accepts on the saturation curve [K]
const TRIPLE_POINT_K: f64 = 273.16;

/// Real-fluid water backend.
///
/// A single-phase (P, T) state is either liquid or vapour, so quality here is
/// a step function: 0 below saturation, 1 at or above it. Isentropic
/// expansion flashes the outlet on (P, s) directly, which lands inside the
/// two-phase dome where a (P, T) search cannot.
///
/// Thread-safe: every call builds its own rfluids `Fluid`.
#[derive(Clone, Debug, Default)]
pub struct CoolPropSteam {
    envelope: OperatingEnvelope,
}

impl CoolPropSteam {
    pub fn new() -> Self {
        Self::default()
    }

    fn clamp_state(&self, p: Pressure, t: Temperature) -> SteamResult<(f64, f64)> {
        validation::validate_pressure(p)?;
        validation::validate_temperature(t)?;
        let p = self.envelope.clamp_pressure(p);
        let t = self.envelope.clamp_temperature(t);
        Ok((p.value, t.value))
    }

    fn saturated_vapour(&self, p_pa: f64) -> SteamResult<Fluid> {
        Fluid::from(Pure::Water)
            .in_state(FluidInput::pressure(p_pa), FluidInput::quality(1.0))
            .map_err(|e| SteamError::Backend {
                message: format!("rfluids error at saturation, P={} Pa: {}", p_pa, e),
            })
    }

    fn t_sat_k(&self, p_pa: f64) -> SteamResult<f64> {
        let mut fluid = self.saturated_vapour(p_pa)?;
        fluid.temperature().map_err(|e| SteamError::Backend {
            message: format!("rfluids error getting saturation temperature: {}", e),
        })
    }

    /// Fluid at (P, T), or on the saturated vapour line when T is within
    /// `SATURATION_BAND_K` of T_sat (where a (P, T) input is ill-defined).
    fn fluid_at(&self, p_pa: f64, t_k: f64) -> SteamResult<Fluid> {
        let t_sat = self.t_sat_k(p_pa)?;
        if (t_k - t_sat).abs() < SATURATION_BAND_K {
            return self.saturated_vapour(p_pa);
        }
        Fluid::from(Pure::Water)
            .in_state(FluidInput::pressure(p_pa), FluidInput::temperature(t_k))
            .map_err(|e| SteamError::Backend {
                message: format!("rfluids error at P={} Pa, T={} K: {}", p_pa, t_k, e),
            })
    }
}

fn backend_error<E: std::fmt::Display>(property: &'static str) -> impl Fn(E) -> SteamError {
    move |e| SteamError::Backend {
        message: format!("rfluids error getting {}: {}", property, e),
    }
}

impl SteamProperties for CoolPropSteam {
    fn name(&self) -> &str {
        "coolprop"
    }

    fn envelope(&self) -> OperatingEnvelope {
        self.envelope
    }

    fn saturated_temperature(&self, p: Pressure) -> SteamResult<Temperature> {
        validation::validate_pressure(p)?;
        let p_pa = self.envelope.clamp_pressure(p).value;
        Ok(k(self.t_sat_k(p_pa)?))
    }

    fn saturated_pressure(&self, t: Temperature) -> SteamResult<Pressure> {
        validation::validate_temperature(t)?;
        let t_k = self.envelope.clamp_temperature(t).value.max(TRIPLE_POINT_K);
        let mut fluid = Fluid::from(Pure::Water)
            .in_state(FluidInput::temperature(t_k), FluidInput::quality(1.0))
            .map_err(|e| SteamError::Backend {
                message: format!("rfluids error at saturation, T={} K: {}", t_k, e),
            })?;
        let p_pa = fluid.pressure().map_err(|e| SteamError::Backend {
            message: format!("rfluids error getting saturation pressure: {}", e),
        })?;
        Ok(pa(p_pa))
    }

    fn enthalpy(&self, p: Pressure, t: Temperature) -> SteamResult<SpecEnthalpy> {
        let (p_pa, t_k) = self.clamp_state(p, t)?;
        let mut fluid = self.fluid_at(p_pa, t_k)?;
        let h = fluid.enthalpy().map_err(|e| SteamError::Backend {
            message: format!("rfluids error getting enthalpy: {}", e),
        })?;
        Ok(h / 1000.0)
    }

    fn entropy(&self, p: Pressure, t: Temperature) -> SteamResult<SpecEntropy> {
        let (p_pa, t_k) = self.clamp_state(p, t)?;
        let mut fluid = self.fluid_at(p_pa, t_k)?;
        let s = fluid.entropy().map_err(|e| SteamError::Backend {
            message: format!("rfluids error getting entropy: {}", e),
        })?;
        Ok(s / 1000.0)
    }

    fn specific_volume(&self, p: Pressure, t: Temperature) -> SteamResult<SpecVolume> {
        let (p_pa, t_k) = self.clamp_state(p, t)?;
        let mut fluid = self.fluid_at(p_pa, t_k)?;
        let rho = fluid.density().map_err(|e| SteamError::Backend {
            message: format!("rfluids error getting density: {}", e),
        })?;
        if !(rho.is_finite() && rho > 0.0) {
            return Err(SteamError::OutOfRange {
                what: "density must be positive",
            });
        }
        Ok(1.0 / rho)
    }

    fn steam_quality(&self, p: Pressure, t: Temperature) -> SteamResult<f64> {
        let (p_pa, t_k) = self.clamp_state(p, t)?;
        let t_sat = self.t_sat_k(p_pa)?;
        Ok(if t_k < t_sat { 0.0 } else { 1.0 })
    }

    fn properties(&self, p: Pressure, t: Temperature) -> SteamResult<SteamPropertyPack> {
        let (p_pa, t_k) = self.clamp_state(p, t)?;
        let t_sat = self.t_sat_k(p_pa)?;
        let mut fluid = self.fluid_at(p_pa, t_k)?;

        let h = fluid.enthalpy().map_err(backend_error("enthalpy"))?;
        let s = fluid.entropy().map_err(backend_error("entropy"))?;
        let rho = fluid.density().map_err(backend_error("density"))?;
        if !(rho.is_finite() && rho > 0.0) {
            return Err(SteamError::OutOfRange {
                what: "density must be positive",
            });
        }

        Ok(SteamPropertyPack {
            h: h / 1000.0,
            s: s / 1000.0,
            v: 1.0 / rho,
            x: if t_k < t_sat { 0.0 } else { 1.0 },
        })
    }

    fn isentropic_enthalpy_drop(
        &self,
        p_in: Pressure,
        t_in: Temperature,
        p_out: Pressure,
    ) -> SteamResult<IsentropicDrop> {
        let (p_in_pa, t_in_k) = self.clamp_state(p_in, t_in)?;
        validation::validate_pressure(p_out)?;
        let p_out_pa = self.envelope.clamp_pressure(p_out).value;

        let mut inlet = self.fluid_at(p_in_pa, t_in_k)?;
        let h_in = inlet.enthalpy().map_err(backend_error("inlet enthalpy"))?;
        let s_in = inlet.entropy().map_err(backend_error("inlet entropy"))?;

        let mut outlet = Fluid::from(Pure::Water)
            .in_state(FluidInput::pressure(p_out_pa), FluidInput::entropy(s_in))
            .map_err(|e| SteamError::Backend {
                message: format!(
                    "rfluids error at P={} Pa, s={} J/(kg·K): {}",
                    p_out_pa, s_in, e
                ),
            })?;
        let h_out = outlet.enthalpy().map_err(backend_error("outlet enthalpy"))?;
        let t_out = outlet.temperature().map_err(backend_error("outlet temperature"))?;

        Ok(IsentropicDrop {
            enthalpy_drop: (h_in - h_out) / 1000.0,
            outlet_temperature: k(t_out),
            entropy_residual: 0.0,
            iterations: 1,
            converged: true,
        })
    }
}
