//! Synchronous generator on the turbine shaft.

use crate::common::{check_finite, clamp_fraction};
use crate::error::ComponentResult;
use crate::traits::{Stage, StageKind};
use gf_core::numeric::FractionRange;
use gf_core::units::{Power, mw, to_mw};
use serde::{Deserialize, Serialize};

pub const EFFICIENCY_RANGE: FractionRange = FractionRange::UNIT;
pub const POWER_FACTOR_RANGE: FractionRange = FractionRange::UNIT;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorParams {
    pub efficiency: f64,
    pub power_factor: f64,
    /// Terminal voltage [kV], informational
    pub voltage_kv: f64,
    /// Grid frequency [Hz], informational
    pub frequency_hz: f64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            efficiency: 0.98,
            power_factor: 0.95,
            voltage_kv: 11.0,
            frequency_hz: 50.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorOutput {
    pub electrical_power: Power,
    pub efficiency_percent: f64,
    pub voltage_kv: f64,
    pub frequency_hz: f64,
}

/// `P_el = P_mech * efficiency * power_factor`
#[derive(Clone, Debug, Default)]
pub struct Generator {
    params: GeneratorParams,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: &GeneratorParams) -> Self {
        let mut stage = Self::new();
        stage.set_efficiency(params.efficiency);
        stage.set_power_factor(params.power_factor);
        stage.set_voltage(params.voltage_kv);
        stage.set_frequency(params.frequency_hz);
        stage
    }

    pub fn params(&self) -> &GeneratorParams {
        &self.params
    }

    pub fn set_efficiency(&mut self, efficiency: f64) {
        self.params.efficiency =
            clamp_fraction(efficiency, EFFICIENCY_RANGE, "generator efficiency");
    }

    pub fn set_power_factor(&mut self, power_factor: f64) {
        self.params.power_factor =
            clamp_fraction(power_factor, POWER_FACTOR_RANGE, "power factor");
    }

    pub fn set_voltage(&mut self, kv: f64) {
        self.params.voltage_kv = kv;
    }

    pub fn set_frequency(&mut self, hz: f64) {
        self.params.frequency_hz = hz;
    }
}

impl Stage for Generator {
    type Input = Power;
    type Output = GeneratorOutput;

    fn kind(&self) -> StageKind {
        StageKind::Generator
    }

    fn process(&self, mechanical: Power) -> ComponentResult<GeneratorOutput> {
        let p_mech = to_mw(mechanical);
        check_finite(p_mech, "mechanical power")?;

        Ok(GeneratorOutput {
            electrical_power: mw(p_mech * self.params.efficiency * self.params.power_factor),
            efficiency_percent: self.params.efficiency * 100.0,
            voltage_kv: self.params.voltage_kv,
            frequency_hz: self.params.frequency_hz,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn electrical_never_exceeds_mechanical(
            p in 0.0_f64..50.0,
            eta in -1.0_f64..2.0,
            pf in -1.0_f64..2.0,
        ) {
            let mut g = Generator::new();
            g.set_efficiency(eta);
            g.set_power_factor(pf);
            let out = g.process(mw(p)).unwrap();
            prop_assert!(to_mw(out.electrical_power) <= p + 1e-12);
            prop_assert!(to_mw(out.electrical_power) >= 0.0);
        }
    }
}
