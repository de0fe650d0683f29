//! Wet cooling tower closing the condenser loop.

use crate::common::{check_finite, clamp_fraction, is_negligible_flow};
use crate::error::ComponentResult;
use crate::traits::{Stage, StageKind};
use gf_core::numeric::FractionRange;
use gf_core::units::constants::CP_WATER_KJ_PER_KG_K;
use gf_core::units::{
    MassRate, Power, TempInterval, Temperature, degc, delta_k, kgps, mw, to_degc, to_kgps,
};
use serde::{Deserialize, Serialize};

pub const EFFICIENCY_RANGE: FractionRange = FractionRange::UNIT;
pub const DRIFT_LOSS_RANGE: FractionRange = FractionRange::up_to(0.01);
pub const EVAPORATION_LOSS_RANGE: FractionRange = FractionRange::up_to(0.05);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoolingTowerParams {
    pub efficiency: f64,
    /// Ambient wet-bulb temperature [°C]
    pub wet_bulb_c: f64,
    /// Fraction of the water flow lost as droplet carryover
    pub drift_loss: f64,
    /// Fraction of the water flow evaporated
    pub evaporation_loss: f64,
    /// Design approach [K], informational
    pub design_approach_k: f64,
}

impl Default for CoolingTowerParams {
    fn default() -> Self {
        Self {
            efficiency: 0.85,
            wet_bulb_c: 20.0,
            drift_loss: 0.002,
            evaporation_loss: 0.01,
            design_approach_k: 5.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoolingTowerInput {
    /// Hot water entering the tower.
    pub inlet_temperature: Temperature,
    pub water_flow: MassRate,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoolingTowerOutput {
    pub outlet_temperature: Temperature,
    /// Heat rejected to ambient. Negative when the inlet is below wet bulb.
    pub capacity: Power,
    pub water_loss: MassRate,
    /// Outlet minus wet-bulb temperature.
    pub approach: TempInterval,
}

/// Counterflow wet cooling tower.
///
/// ```text
/// Q [kW] = m * c_p * (t_in - t_wb) * eta
/// t_out  = t_in - Q / (m * c_p)
/// loss   = m * (drift + evaporation)
/// ```
#[derive(Clone, Debug, Default)]
pub struct CoolingTower {
    params: CoolingTowerParams,
}

impl CoolingTower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: &CoolingTowerParams) -> Self {
        let mut stage = Self::new();
        stage.set_efficiency(params.efficiency);
        stage.set_wet_bulb(degc(params.wet_bulb_c));
        stage.set_drift_loss(params.drift_loss);
        stage.set_evaporation_loss(params.evaporation_loss);
        stage.params.design_approach_k = params.design_approach_k;
        stage
    }

    pub fn params(&self) -> &CoolingTowerParams {
        &self.params
    }

    pub fn set_efficiency(&mut self, efficiency: f64) {
        self.params.efficiency =
            clamp_fraction(efficiency, EFFICIENCY_RANGE, "cooling tower efficiency");
    }

    pub fn set_wet_bulb(&mut self, t: Temperature) {
        self.params.wet_bulb_c = to_degc(t);
    }

    pub fn set_drift_loss(&mut self, fraction: f64) {
        self.params.drift_loss = clamp_fraction(fraction, DRIFT_LOSS_RANGE, "drift loss");
    }

    pub fn set_evaporation_loss(&mut self, fraction: f64) {
        self.params.evaporation_loss =
            clamp_fraction(fraction, EVAPORATION_LOSS_RANGE, "evaporation loss");
    }
}

impl Stage for CoolingTower {
    type Input = CoolingTowerInput;
    type Output = CoolingTowerOutput;

    fn kind(&self) -> StageKind {
        StageKind::CoolingTower
    }

    fn process(&self, input: CoolingTowerInput) -> ComponentResult<CoolingTowerOutput> {
        let t_in = to_degc(input.inlet_temperature);
        let m = to_kgps(input.water_flow);
        check_finite(t_in, "cooling tower inlet temperature")?;
        check_finite(m, "cooling tower water flow")?;
        check_finite(self.params.wet_bulb_c, "wet bulb temperature")?;

        let t_wb = self.params.wet_bulb_c;
        let (capacity_kw, t_out) = if is_negligible_flow(m) {
            (0.0, t_in)
        } else {
            let q = m * CP_WATER_KJ_PER_KG_K * (t_in - t_wb) * self.params.efficiency;
            (q, t_in - q / (m * CP_WATER_KJ_PER_KG_K))
        };

        let loss = m.max(0.0) * (self.params.drift_loss + self.params.evaporation_loss);

        Ok(CoolingTowerOutput {
            outlet_temperature: degc(t_out),
            capacity: mw(capacity_kw / 1000.0),
            water_loss: kgps(loss),
            approach: delta_k(t_out - t_wb),
        })
    }
}
