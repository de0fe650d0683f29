//! Physical operating envelope of the steam property models.

use gf_core::units::{Pressure, Temperature, bar, degc, to_bar, to_degc};

/// Pressure/temperature box the property models are defined over.
///
/// Backends clamp their inputs to this box before evaluating anything, so a
/// stage that drifts outside it (a condenser pressure decaying step after step,
/// say) sees boundary values instead of garbage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OperatingEnvelope {
    /// Minimum pressure [bar]
    pub p_min_bar: f64,
    /// Maximum pressure [bar]
    pub p_max_bar: f64,
    /// Minimum temperature [°C]
    pub t_min_c: f64,
    /// Maximum temperature [°C]
    pub t_max_c: f64,
}

impl Default for OperatingEnvelope {
    fn default() -> Self {
        Self {
            p_min_bar: 0.01,
            p_max_bar: 25.0,
            t_min_c: 0.0,
            t_max_c: 250.0,
        }
    }
}

impl OperatingEnvelope {
    /// Clamp a pressure given in bar.
    pub fn clamp_pressure_bar(&self, p_bar: f64) -> f64 {
        let clamped = p_bar.clamp(self.p_min_bar, self.p_max_bar);
        if clamped != p_bar {
            tracing::trace!(
                pressure_bar = p_bar,
                clamped_bar = clamped,
                "pressure clamped to steam envelope"
            );
        }
        clamped
    }

    /// Clamp a temperature given in °C.
    pub fn clamp_temperature_c(&self, t_c: f64) -> f64 {
        let clamped = t_c.clamp(self.t_min_c, self.t_max_c);
        if clamped != t_c {
            tracing::trace!(
                temperature_c = t_c,
                clamped_c = clamped,
                "temperature clamped to steam envelope"
            );
        }
        clamped
    }

    pub fn clamp_pressure(&self, p: Pressure) -> Pressure {
        bar(self.clamp_pressure_bar(to_bar(p)))
    }

    pub fn clamp_temperature(&self, t: Temperature) -> Temperature {
        degc(self.clamp_temperature_c(to_degc(t)))
    }
}
