//! Steam property model trait and validation helpers.

use crate::envelope::OperatingEnvelope;
use crate::error::{SteamError, SteamResult};
use crate::isentropic::{self, IsentropicDrop, IsentropicSearch};
use gf_core::units::{Pressure, Temperature};

/// Specific enthalpy [kJ/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific entropy [kJ/(kg·K)].
pub type SpecEntropy = f64;

/// Specific volume [m³/kg].
pub type SpecVolume = f64;

/// Properties evaluated together at one (P, T) state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SteamPropertyPack {
    /// Specific enthalpy [kJ/kg]
    pub h: SpecEnthalpy,
    /// Specific entropy [kJ/(kg·K)]
    pub s: SpecEntropy,
    /// Specific volume [m³/kg]
    pub v: SpecVolume,
    /// Steam quality (vapour mass fraction) in [0, 1]
    pub x: f64,
}

/// Trait for steam property providers.
///
/// Implementations must be thread-safe (Send + Sync) and hold no mutable
/// state: the same inputs always give the same outputs. Pressures are in bar,
/// temperatures in °C at the call sites, carried as uom quantities.
///
/// Inputs outside [`OperatingEnvelope`] are clamped to it. Non-finite inputs
/// are rejected with [`SteamError::NonPhysical`].
pub trait SteamProperties: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Envelope the model clamps its inputs to.
    fn envelope(&self) -> OperatingEnvelope {
        OperatingEnvelope::default()
    }

    /// Saturation temperature at the given pressure.
    fn saturated_temperature(&self, p: Pressure) -> SteamResult<Temperature>;

    /// Saturation pressure at the given temperature.
    fn saturated_pressure(&self, t: Temperature) -> SteamResult<Pressure>;

    /// Specific enthalpy [kJ/kg].
    fn enthalpy(&self, p: Pressure, t: Temperature) -> SteamResult<SpecEnthalpy>;

    /// Specific entropy [kJ/(kg·K)].
    fn entropy(&self, p: Pressure, t: Temperature) -> SteamResult<SpecEntropy>;

    /// Specific volume [m³/kg].
    fn specific_volume(&self, p: Pressure, t: Temperature) -> SteamResult<SpecVolume>;

    /// Steam quality in [0, 1].
    fn steam_quality(&self, p: Pressure, t: Temperature) -> SteamResult<f64>;

    /// Compute h, s, v and x at one state in a single call.
    ///
    /// Default implementation calls the individual property methods; backends
    /// that share intermediate results override it.
    fn properties(&self, p: Pressure, t: Temperature) -> SteamResult<SteamPropertyPack> {
        Ok(SteamPropertyPack {
            h: self.enthalpy(p, t)?,
            s: self.entropy(p, t)?,
            v: self.specific_volume(p, t)?,
            x: self.steam_quality(p, t)?,
        })
    }

    /// Enthalpy drop of a constant-entropy expansion from (p_in, t_in) down to p_out.
    ///
    /// The outlet temperature is found by bisection; a search that runs out of
    /// iterations returns its best candidate with `converged == false`.
    fn isentropic_enthalpy_drop(
        &self,
        p_in: Pressure,
        t_in: Temperature,
        p_out: Pressure,
    ) -> SteamResult<IsentropicDrop> {
        isentropic::expand(self, &IsentropicSearch::default(), p_in, t_in, p_out)
    }
}

/// Validation helpers for steam property inputs.
pub(crate) mod validation {
    use super::*;

    /// Ensure pressure is finite.
    pub fn validate_pressure(p: Pressure) -> SteamResult<()> {
        if !p.value.is_finite() {
            return Err(SteamError::NonPhysical {
                what: "pressure must be finite",
            });
        }
        Ok(())
    }

    /// Ensure temperature is finite.
    pub fn validate_temperature(t: Temperature) -> SteamResult<()> {
        if !t.value.is_finite() {
            return Err(SteamError::NonPhysical {
                what: "temperature must be finite",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::validation::*;
    use gf_core::units::{bar, degc};

    #[test]
    fn validate_finite_pressure() {
        assert!(validate_pressure(bar(10.0)).is_ok());
        assert!(validate_pressure(bar(f64::NAN)).is_err());
        assert!(validate_pressure(bar(f64::INFINITY)).is_err());
    }

    #[test]
    fn validate_finite_temperature() {
        assert!(validate_temperature(degc(178.0)).is_ok());
        assert!(validate_temperature(degc(f64::NAN)).is_err());
    }
}
