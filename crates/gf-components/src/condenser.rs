//! Surface condenser on the turbine exhaust.

use std::sync::Arc;

use crate::common::{clamp_fraction, is_negligible_flow};
use crate::error::ComponentResult;
use crate::stream::FluidStream;
use crate::traits::{Stage, StageKind};
use gf_core::numeric::FractionRange;
use gf_core::units::{MassRate, Power, Temperature, degc, kgps, mw, to_degc, to_kgps};
use gf_steam::SteamProperties;
use serde::{Deserialize, Serialize};

pub const EFFICIENCY_RANGE: FractionRange = FractionRange::UNIT;
pub const PRESSURE_DROP_RANGE: FractionRange = FractionRange::up_to(0.2);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CondenserParams {
    pub efficiency: f64,
    /// Outlet pressure loss as a fraction of inlet pressure
    pub pressure_drop: f64,
    /// Cooling-water inlet temperature [°C]
    pub cooling_water_temp_c: f64,
    /// Cooling-water flow sent on to the cooling tower [kg/s]
    pub cooling_water_flow_kgps: f64,
}

impl Default for CondenserParams {
    fn default() -> Self {
        Self {
            efficiency: 0.95,
            pressure_drop: 0.1,
            cooling_water_temp_c: 25.0,
            cooling_water_flow_kgps: 1000.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CondenserOutput {
    /// Condensate at outlet pressure and its saturation temperature.
    pub outlet: FluidStream,
    /// Heat rejected to the cooling water, never negative.
    pub heat_duty: Power,
    pub cooling_water_flow: MassRate,
    pub cooling_water_temperature: Temperature,
}

/// Condenser.
///
/// ```text
/// p_out = max(p_in * (1 - dp), p_min)
/// Q [MW] = max(m * (h(p_in, t_in) - h(p_out, T_sat(p_out))) * eta / 1000, 0)
/// ```
///
/// `p_min` is the steam model's lowest envelope pressure, so a pressure fed
/// back into the condenser step after step settles there instead of
/// decaying toward zero.
pub struct Condenser {
    steam: Arc<dyn SteamProperties>,
    params: CondenserParams,
}

impl Condenser {
    pub fn new(steam: Arc<dyn SteamProperties>) -> Self {
        Self {
            steam,
            params: CondenserParams::default(),
        }
    }

    pub fn with_params(steam: Arc<dyn SteamProperties>, params: &CondenserParams) -> Self {
        let mut stage = Self::new(steam);
        stage.set_efficiency(params.efficiency);
        stage.set_pressure_drop(params.pressure_drop);
        stage.set_cooling_water_temperature(degc(params.cooling_water_temp_c));
        stage.set_cooling_water_flow(kgps(params.cooling_water_flow_kgps));
        stage
    }

    pub fn params(&self) -> &CondenserParams {
        &self.params
    }

    pub fn set_efficiency(&mut self, efficiency: f64) {
        self.params.efficiency =
            clamp_fraction(efficiency, EFFICIENCY_RANGE, "condenser efficiency");
    }

    pub fn set_pressure_drop(&mut self, pressure_drop: f64) {
        self.params.pressure_drop =
            clamp_fraction(pressure_drop, PRESSURE_DROP_RANGE, "condenser pressure drop");
    }

    pub fn set_cooling_water_temperature(&mut self, t: Temperature) {
        self.params.cooling_water_temp_c = to_degc(t);
    }

    /// Negative or NaN flows are stored as zero.
    pub fn set_cooling_water_flow(&mut self, flow: MassRate) {
        self.params.cooling_water_flow_kgps = to_kgps(flow).max(0.0);
    }

    pub fn cooling_water_flow(&self) -> MassRate {
        kgps(self.params.cooling_water_flow_kgps)
    }

    pub fn cooling_water_temperature(&self) -> Temperature {
        degc(self.params.cooling_water_temp_c)
    }
}

impl Stage for Condenser {
    type Input = FluidStream;
    type Output = CondenserOutput;

    fn kind(&self) -> StageKind {
        StageKind::Condenser
    }

    fn process(&self, inlet: FluidStream) -> ComponentResult<CondenserOutput> {
        inlet.check_finite("condenser inlet")?;

        let envelope = self.steam.envelope();
        let p_out = envelope.clamp_pressure(inlet.pressure * (1.0 - self.params.pressure_drop));
        let t_out = self.steam.saturated_temperature(p_out)?;
        let outlet = FluidStream::new(p_out, t_out, inlet.flow);

        let m = inlet.flow_kgps();
        let duty_mw = if is_negligible_flow(m) {
            0.0
        } else {
            let h_in = self.steam.enthalpy(inlet.pressure, inlet.temperature)?;
            let h_out = self.steam.enthalpy(p_out, t_out)?;
            (m * (h_in - h_out) * self.params.efficiency / 1000.0).max(0.0)
        };

        Ok(CondenserOutput {
            outlet,
            heat_duty: mw(duty_mw),
            cooling_water_flow: self.cooling_water_flow(),
            cooling_water_temperature: self.cooling_water_temperature(),
        })
    }
}
