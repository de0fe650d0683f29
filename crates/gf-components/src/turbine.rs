//! Steam turbine stage.

use std::sync::Arc;

use crate::common::{check_finite, clamp_fraction, is_negligible_flow};
use crate::error::ComponentResult;
use crate::stream::FluidStream;
use crate::traits::{Stage, StageKind};
use gf_core::numeric::FractionRange;
use gf_core::units::{Power, Pressure, mw};
use gf_steam::{SpecEnthalpy, SteamProperties};
use serde::{Deserialize, Serialize};

pub const EFFICIENCY_RANGE: FractionRange = FractionRange::UNIT;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TurbineParams {
    pub isentropic_efficiency: f64,
    pub mechanical_efficiency: f64,
}

impl Default for TurbineParams {
    fn default() -> Self {
        Self {
            isentropic_efficiency: 0.85,
            mechanical_efficiency: 0.98,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurbineInput {
    pub inlet: FluidStream,
    /// Exhaust (condenser) pressure.
    pub back_pressure: Pressure,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurbineOutput {
    /// Exhaust at back pressure and its saturation temperature; flow is conserved.
    pub exhaust: FluidStream,
    /// Shaft power.
    pub power: Power,
    /// Isentropic enthalpy drop, floored at zero [kJ/kg]
    pub isentropic_drop: SpecEnthalpy,
    /// Drop after isentropic efficiency [kJ/kg]
    pub actual_drop: SpecEnthalpy,
    /// False when the isentropic search ran out of iterations.
    pub converged: bool,
}

/// Condensing steam turbine.
///
/// ## Model
///
/// ```text
/// dh_s   = max(h(p_in, t_in) - h(p_back, T_s), 0)     constant-entropy expansion
/// dh     = eta_s * dh_s
/// P [MW] = dh * m * eta_mech / 1000
/// ```
///
/// A stream with no flow produces no power and skips the expansion search.
pub struct TurbineStage {
    steam: Arc<dyn SteamProperties>,
    params: TurbineParams,
}

impl TurbineStage {
    pub fn new(steam: Arc<dyn SteamProperties>) -> Self {
        Self {
            steam,
            params: TurbineParams::default(),
        }
    }

    pub fn with_params(steam: Arc<dyn SteamProperties>, params: &TurbineParams) -> Self {
        let mut stage = Self::new(steam);
        stage.set_isentropic_efficiency(params.isentropic_efficiency);
        stage.set_mechanical_efficiency(params.mechanical_efficiency);
        stage
    }

    pub fn params(&self) -> &TurbineParams {
        &self.params
    }

    pub fn set_isentropic_efficiency(&mut self, efficiency: f64) {
        self.params.isentropic_efficiency =
            clamp_fraction(efficiency, EFFICIENCY_RANGE, "turbine isentropic efficiency");
    }

    pub fn set_mechanical_efficiency(&mut self, efficiency: f64) {
        self.params.mechanical_efficiency =
            clamp_fraction(efficiency, EFFICIENCY_RANGE, "turbine mechanical efficiency");
    }
}

impl Stage for TurbineStage {
    type Input = TurbineInput;
    type Output = TurbineOutput;

    fn kind(&self) -> StageKind {
        StageKind::Turbine
    }

    fn process(&self, input: TurbineInput) -> ComponentResult<TurbineOutput> {
        let inlet = input.inlet;
        inlet.check_finite("turbine inlet")?;
        check_finite(input.back_pressure.value, "turbine back pressure")?;

        let exhaust_t = self.steam.saturated_temperature(input.back_pressure)?;
        let exhaust = FluidStream::new(input.back_pressure, exhaust_t, inlet.flow);

        let m = inlet.flow_kgps();
        if is_negligible_flow(m) {
            return Ok(TurbineOutput {
                exhaust,
                power: mw(0.0),
                isentropic_drop: 0.0,
                actual_drop: 0.0,
                converged: true,
            });
        }

        let expansion = self.steam.isentropic_enthalpy_drop(
            inlet.pressure,
            inlet.temperature,
            input.back_pressure,
        )?;
        let isentropic_drop = expansion.enthalpy_drop.max(0.0);
        let actual_drop = isentropic_drop * self.params.isentropic_efficiency;
        let power_mw = actual_drop * m * self.params.mechanical_efficiency / 1000.0;

        Ok(TurbineOutput {
            exhaust,
            power: mw(power_mw),
            isentropic_drop,
            actual_drop,
            converged: !expansion.is_degraded(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_core::units::{bar, degc, kgps, to_mw};
    use gf_steam::CorrelationSteam;

    fn turbine() -> TurbineStage {
        TurbineStage::new(Arc::new(CorrelationSteam::new()))
    }

    fn design_point() -> TurbineInput {
        TurbineInput {
            inlet: FluidStream::new(bar(9.7755), degc(178.89), kgps(19.35)),
            back_pressure: bar(0.06),
        }
    }

    #[test]
    fn design_point_power() {
        let out = turbine().process(design_point()).unwrap();
        assert!(out.converged);
        assert!((out.isentropic_drop - 434.5).abs() < 1.0, "dh_s = {}", out.isentropic_drop);
        assert!((to_mw(out.power) - 7.0).abs() < 0.05, "P = {}", to_mw(out.power));
        assert!((out.exhaust.temperature_c() - 36.16).abs() < 0.05);
        assert_eq!(out.exhaust.flow_kgps(), 19.35);
    }

    #[test]
    fn capped_search_reports_not_converged() {
        let steam = CorrelationSteam::with_search(gf_steam::IsentropicSearch {
            tolerance: 1e-12,
            max_iterations: 3,
        });
        let out = TurbineStage::new(Arc::new(steam))
            .process(design_point())
            .unwrap();
        assert!(!out.converged);
        assert!(out.power.value.is_finite());
    }

    #[test]
    fn zero_flow_gives_zero_power() {
        let mut input = design_point();
        input.inlet.flow = kgps(0.0);
        let out = turbine().process(input).unwrap();
        assert_eq!(to_mw(out.power), 0.0);
        assert!(out.converged);
    }

    #[test]
    fn compression_is_floored_at_zero() {
        let input = TurbineInput {
            inlet: FluidStream::new(bar(0.06), degc(36.0), kgps(10.0)),
            back_pressure: bar(9.0),
        };
        let out = turbine().process(input).unwrap();
        assert_eq!(out.isentropic_drop, 0.0);
        assert_eq!(to_mw(out.power), 0.0);
    }

    #[test]
    fn efficiencies_scale_power() {
        let base = to_mw(turbine().process(design_point()).unwrap().power);

        let mut half = turbine();
        half.set_isentropic_efficiency(0.425);
        let p = to_mw(half.process(design_point()).unwrap().power);
        assert!((p - base / 2.0).abs() < 1e-9);

        let mut idle = turbine();
        idle.set_mechanical_efficiency(-1.0);
        assert_eq!(idle.params().mechanical_efficiency, 0.0);
        assert_eq!(to_mw(idle.process(design_point()).unwrap().power), 0.0);
    }

    #[test]
    fn nan_back_pressure_is_rejected() {
        let mut input = design_point();
        input.back_pressure = bar(f64::NAN);
        assert!(turbine().process(input).is_err());
    }
}
