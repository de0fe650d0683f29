//! Flash separator: splits two-phase wellhead flow into steam and brine.

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
pub const PRESSURE_DROP_RANGE: FractionRange = FractionRange::up_to(0.2);

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeparatorParams {
    /// Fraction of the vapour mass actually captured
    pub efficiency: f64,
    /// Outlet pressure loss as a fraction of inlet pressure
    pub pressure_drop: f64,
}

impl Default for SeparatorParams {
    fn default() -> Self {
        Self {
            efficiency: 0.98,
            pressure_drop: 0.05,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeparatorOutput {
    /// Separated steam at outlet pressure and its saturation temperature.
    pub steam: FluidStream,
    /// Brine leaving the bottom of the vessel.
    pub waste_water_flow: MassRate,
    /// Inlet steam quality.
    pub quality: f64,
}

/// Flash separator.
///
/// ```text
/// steam = m_in * x(p_in, t_in) * eta
/// waste = m_in - steam
/// p_out = p_in * (1 - dp),  t_out = T_sat(p_out)
/// ```
pub struct SteamSeparator {
    steam: Arc<dyn SteamProperties>,
    params: SeparatorParams,
}

impl SteamSeparator {
    pub fn new(steam: Arc<dyn SteamProperties>) -> Self {
        Self {
            steam,
            params: SeparatorParams::default(),
        }
    }

    /// Build from stored parameters, clamping each one like its setter.
    pub fn with_params(steam: Arc<dyn SteamProperties>, params: &SeparatorParams) -> Self {
        let mut stage = Self::new(steam);
        stage.set_efficiency(params.efficiency);
        stage.set_pressure_drop(params.pressure_drop);
        stage
    }

    pub fn params(&self) -> &SeparatorParams {
        &self.params
    }

    pub fn set_efficiency(&mut self, efficiency: f64) {
        self.params.efficiency =
            clamp_fraction(efficiency, EFFICIENCY_RANGE, "separator efficiency");
    }

    pub fn set_pressure_drop(&mut self, pressure_drop: f64) {
        self.params.pressure_drop =
            clamp_fraction(pressure_drop, PRESSURE_DROP_RANGE, "separator pressure drop");
    }
}

impl Stage for SteamSeparator {
    type Input = FluidStream;
    type Output = SeparatorOutput;

    fn kind(&self) -> StageKind {
        StageKind::SteamSeparator
    }

    fn process(&self, inlet: FluidStream) -> ComponentResult<SeparatorOutput> {
        inlet.check_finite("separator inlet")?;

        let quality = self.steam.steam_quality(inlet.pressure, inlet.temperature)?;
        let m_in = inlet.flow_kgps();
        let m_steam = m_in * quality * self.params.efficiency;

        let p_out = inlet.pressure * (1.0 - self.params.pressure_drop);
        let t_out = self.steam.saturated_temperature(p_out)?;

        Ok(SeparatorOutput {
            steam: FluidStream::new(p_out, t_out, kgps(m_steam)),
            waste_water_flow: kgps(m_in - m_steam),
            quality,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_core::units::{bar, degc, to_kgps};
    use gf_steam::CorrelationSteam;

    fn separator() -> SteamSeparator {
        SteamSeparator::new(Arc::new(CorrelationSteam::new()))
    }

    fn wellhead() -> FluidStream {
        FluidStream::new(bar(10.5), degc(178.0), kgps(85.0))
    }

    #[test]
    fn default_split() {
        let out = separator().process(wellhead()).unwrap();
        assert!((out.steam.pressure_bar() - 9.975).abs() < 1e-9);
        assert!((out.steam.temperature_c() - 179.77).abs() < 0.05);
        assert!((out.quality - 0.4599).abs() < 1e-3);
        assert!((out.steam.flow_kgps() - 38.31).abs() < 0.05);
        assert!((to_kgps(out.waste_water_flow) - 46.69).abs() < 0.05);
    }

    #[test]
    fn mass_is_conserved() {
        let out = separator().process(wellhead()).unwrap();
        let total = out.steam.flow_kgps() + to_kgps(out.waste_water_flow);
        assert!((total - 85.0).abs() < 1e-9);
    }

    #[test]
    fn zero_efficiency_sends_everything_to_waste() {
        let mut sep = separator();
        sep.set_efficiency(0.0);
        let out = sep.process(wellhead()).unwrap();
        assert_eq!(out.steam.flow_kgps(), 0.0);
        assert!((to_kgps(out.waste_water_flow) - 85.0).abs() < 1e-12);
    }

    #[test]
    fn setters_clamp() {
        let mut sep = separator();
        sep.set_efficiency(-0.5);
        assert_eq!(sep.params().efficiency, 0.0);
        sep.set_efficiency(1.5);
        assert_eq!(sep.params().efficiency, 1.0);
        sep.set_pressure_drop(0.35);
        assert_eq!(sep.params().pressure_drop, 0.2);
        sep.set_pressure_drop(f64::NAN);
        assert_eq!(sep.params().pressure_drop, 0.0);
    }

    #[test]
    fn with_params_clamps_like_setters() {
        let params = SeparatorParams {
            efficiency: 2.0,
            pressure_drop: 0.5,
        };
        let sep = SteamSeparator::with_params(Arc::new(CorrelationSteam::new()), &params);
        assert_eq!(sep.params().efficiency, 1.0);
        assert_eq!(sep.params().pressure_drop, 0.2);
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
        fn split_conserves_mass(
            p in 5.0_f64..20.0,
            t in 150.0_f64..200.0,
            flow in 50.0_f64..150.0,
            eta in 0.0_f64..1.0,
        ) {
            let mut sep = SteamSeparator::new(Arc::new(CorrelationSteam::new()));
            sep.set_efficiency(eta);
            let out = sep.process(FluidStream::new(bar(p), degc(t), kgps(flow))).unwrap();

            let total = out.steam.flow_kgps() + to_kgps(out.waste_water_flow);
            let tol = Tolerances { abs: 1e-12, rel: 1e-6 };
            prop_assert!(nearly_equal(total, flow, tol));
            prop_assert!(out.steam.flow_kgps() >= 0.0);
        }
    }
}
