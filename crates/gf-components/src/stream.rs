//! The fluid stream passed between stages.

use crate::common::check_finite;
use crate::error::ComponentResult;
use gf_core::units::{MassRate, Pressure, Temperature, to_bar, to_degc, to_kgps};

/// Pressure, temperature and mass flow at a stage boundary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FluidStream {
    pub pressure: Pressure,
    pub temperature: Temperature,
    pub flow: MassRate,
}

impl FluidStream {
    pub fn new(pressure: Pressure, temperature: Temperature, flow: MassRate) -> Self {
        Self {
            pressure,
            temperature,
            flow,
        }
    }

    pub fn pressure_bar(&self) -> f64 {
        to_bar(self.pressure)
    }

    pub fn temperature_c(&self) -> f64 {
        to_degc(self.temperature)
    }

    pub fn flow_kgps(&self) -> f64 {
        to_kgps(self.flow)
    }

    /// Reject NaN or infinite fields.
    pub fn check_finite(&self, what: &'static str) -> ComponentResult<()> {
        check_finite(self.pressure.value, what)?;
        check_finite(self.temperature.value, what)?;
        check_finite(self.flow.value, what)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_core::units::{bar, degc, kgps};

    #[test]
    fn accessors_use_plant_units() {
        let s = FluidStream::new(bar(10.5), degc(178.0), kgps(85.0));
        assert!((s.pressure_bar() - 10.5).abs() < 1e-12);
        assert!((s.temperature_c() - 178.0).abs() < 1e-9);
        assert!((s.flow_kgps() - 85.0).abs() < 1e-12);
        assert!(s.check_finite("stream").is_ok());
    }

    #[test]
    fn nan_field_is_rejected() {
        let s = FluidStream::new(bar(10.5), degc(f64::NAN), kgps(85.0));
        assert!(s.check_finite("stream").is_err());
    }
}
