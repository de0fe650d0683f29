//! Wellhead source: the adjustable inlet of the plant.

use crate::error::ComponentResult;
use crate::stream::FluidStream;
use crate::traits::{Stage, StageKind};
use gf_core::units::{
    MassRate, Pressure, Temperature, bar, degc, kgps, to_bar, to_degc, to_kgps,
};
use serde::{Deserialize, Serialize};

/// Wellhead inlet conditions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WellheadParams {
    /// Wellhead pressure [barG]
    pub pressure_bar: f64,
    /// Wellhead temperature [°C]
    pub temperature_c: f64,
    /// Total geothermal fluid flow [kg/s]
    pub flow_kgps: f64,
}

impl Default for WellheadParams {
    fn default() -> Self {
        Self {
            pressure_bar: 10.5,
            temperature_c: 178.0,
            flow_kgps: 85.0,
        }
    }
}

/// Field-by-field replacement of the held inlet conditions for one call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WellheadOverride {
    pub pressure: Option<Pressure>,
    pub temperature: Option<Temperature>,
    pub flow: Option<MassRate>,
}

/// Source of two-phase geothermal fluid.
///
/// Setters replace values unconditionally; a non-finite value is only caught
/// when the source is processed.
#[derive(Clone, Debug, Default)]
pub struct WellheadSource {
    params: WellheadParams,
}

impl WellheadSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: WellheadParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &WellheadParams {
        &self.params
    }

    pub fn pressure(&self) -> Pressure {
        bar(self.params.pressure_bar)
    }

    pub fn temperature(&self) -> Temperature {
        degc(self.params.temperature_c)
    }

    pub fn flow(&self) -> MassRate {
        kgps(self.params.flow_kgps)
    }

    pub fn set_pressure(&mut self, p: Pressure) {
        self.params.pressure_bar = to_bar(p);
    }

    pub fn set_temperature(&mut self, t: Temperature) {
        self.params.temperature_c = to_degc(t);
    }

    pub fn set_flow(&mut self, flow: MassRate) {
        self.params.flow_kgps = to_kgps(flow);
    }
}

impl Stage for WellheadSource {
    type Input = WellheadOverride;
    type Output = FluidStream;

    fn kind(&self) -> StageKind {
        StageKind::Wellhead
    }

    fn process(&self, input: WellheadOverride) -> ComponentResult<FluidStream> {
        let stream = FluidStream::new(
            input.pressure.unwrap_or_else(|| self.pressure()),
            input.temperature.unwrap_or_else(|| self.temperature()),
            input.flow.unwrap_or_else(|| self.flow()),
        );
        stream.check_finite("wellhead conditions")?;
        Ok(stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ComponentError;

    #[test]
    fn defaults_pass_through() {
        let source = WellheadSource::new();
        let out = source.process(WellheadOverride::default()).unwrap();
        assert!((out.pressure_bar() - 10.5).abs() < 1e-12);
        assert!((out.temperature_c() - 178.0).abs() < 1e-9);
        assert!((out.flow_kgps() - 85.0).abs() < 1e-12);
    }

    #[test]
    fn override_replaces_single_fields() {
        let source = WellheadSource::new();
        let out = source
            .process(WellheadOverride {
                flow: Some(kgps(120.0)),
                ..WellheadOverride::default()
            })
            .unwrap();
        assert!((out.flow_kgps() - 120.0).abs() < 1e-12);
        assert!((out.pressure_bar() - 10.5).abs() < 1e-12);
    }

    #[test]
    fn setters_replace_unconditionally() {
        let mut source = WellheadSource::new();
        source.set_pressure(bar(40.0));
        source.set_temperature(degc(-10.0));
        source.set_flow(kgps(0.0));
        assert_eq!(source.params().pressure_bar, 40.0);
        assert!((source.params().temperature_c + 10.0).abs() < 1e-9);
        assert_eq!(source.params().flow_kgps, 0.0);
    }

    #[test]
    fn nan_pressure_fails_on_process() {
        let mut source = WellheadSource::new();
        source.set_pressure(bar(f64::NAN));
        assert!(matches!(
            source.process(WellheadOverride::default()),
            Err(ComponentError::NonPhysical { .. })
        ));
    }
}
