//! Moisture separator (demister) between the flash separator and the turbine.

use std::sync::Arc;

use crate::common::clamp_fraction;
use crate::error::ComponentResult;
use crate::stream::FluidStream;
use crate::traits::{Stage, StageKind};
use gf_core::numeric::FractionRange;
use gf_core::units::{MassRate, kgps};
use gf_steam::SteamProperties;
use serde::{Deserialize, Serialize};

pub const EFFICIENCY_RANGE: FractionRange = FractionRange::UNIT;
pub const PRESSURE_DROP_RANGE: FractionRange = FractionRange::up_to(0.1);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoistureSeparatorParams {
    /// Fraction of the entrained moisture removed
    pub efficiency: f64,
    /// Outlet pressure loss as a fraction of inlet pressure
    pub pressure_drop: f64,
}

impl Default for MoistureSeparatorParams {
    fn default() -> Self {
        Self {
            efficiency: 0.99,
            pressure_drop: 0.02,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoistureSeparatorOutput {
    /// Dried steam at outlet pressure and its saturation temperature.
    pub steam: FluidStream,
    /// Moisture drained off, reported as waste water.
    pub removed_moisture: MassRate,
    /// Inlet moisture content, 1 - x.
    pub moisture_content: f64,
}

pub struct MoistureSeparator {
    steam: Arc<dyn SteamProperties>,
    params: MoistureSeparatorParams,
}

impl MoistureSeparator {
    pub fn new(steam: Arc<dyn SteamProperties>) -> Self {
        Self {
            steam,
            params: MoistureSeparatorParams::default(),
        }
    }

    pub fn with_params(steam: Arc<dyn SteamProperties>, params: &MoistureSeparatorParams) -> Self {
        let mut stage = Self::new(steam);
        stage.set_efficiency(params.efficiency);
        stage.set_pressure_drop(params.pressure_drop);
        stage
    }

    pub fn params(&self) -> &MoistureSeparatorParams {
        &self.params
    }

    pub fn set_efficiency(&mut self, efficiency: f64) {
        self.params.efficiency =
            clamp_fraction(efficiency, EFFICIENCY_RANGE, "moisture separator efficiency");
    }

    pub fn set_pressure_drop(&mut self, pressure_drop: f64) {
        self.params.pressure_drop = clamp_fraction(
            pressure_drop,
            PRESSURE_DROP_RANGE,
            "moisture separator pressure drop",
        );
    }
}

impl Stage for MoistureSeparator {
    type Input = FluidStream;
    type Output = MoistureSeparatorOutput;

    fn kind(&self) -> StageKind {
        StageKind::MoistureSeparator
    }

    fn process(&self, inlet: FluidStream) -> ComponentResult<MoistureSeparatorOutput> {
        inlet.check_finite("moisture separator inlet")?;

        let quality = self.steam.steam_quality(inlet.pressure, inlet.temperature)?;
        let moisture_content = 1.0 - quality;
        let removed_fraction = moisture_content * self.params.efficiency;

        let m_in = inlet.flow_kgps();
        let m_dry = m_in * (1.0 - removed_fraction);

        let p_out = inlet.pressure * (1.0 - self.params.pressure_drop);
        let t_out = self.steam.saturated_temperature(p_out)?;

        Ok(MoistureSeparatorOutput {
            steam: FluidStream::new(p_out, t_out, kgps(m_dry)),
            removed_moisture: kgps(m_in - m_dry),
            moisture_content,
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use gf_core::units::{bar, degc, to_kgps};
    use gf_core::{Tolerances, nearly_equal};
    use gf_steam::CorrelationSteam;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn drying_conserves_mass(
            p in 1.0_f64..20.0,
            t in 100.0_f64..220.0,
            flow in 1.0_f64..100.0,
            eta in 0.0_f64..1.0,
        ) {
            let mut stage = MoistureSeparator::new(Arc::new(CorrelationSteam::new()));
            stage.set_efficiency(eta);
            let out = stage.process(FluidStream::new(bar(p), degc(t), kgps(flow))).unwrap();

            let total = out.steam.flow_kgps() + to_kgps(out.removed_moisture);
            let tol = Tolerances { abs: 1e-12, rel: 1e-6 };
            prop_assert!(nearly_equal(total, flow, tol));
            prop_assert!(out.steam.flow_kgps() >= 0.0);
            prop_assert!(out.steam.flow_kgps() <= flow);
        }
    }
}
