//! The stepping engine.

use std::sync::Arc;

use crate::config::PlantConfig;
use crate::error::SimResult;
use crate::state::SimulationState;
use gf_components::{
    Condenser, CoolingTower, CoolingTowerInput, Generator, MoistureSeparator, Stage,
    SteamSeparator, TurbineInput, TurbineStage, WellheadOverride, WellheadSource,
};
use gf_core::units::{
    MassRate, Pressure, Temperature, bar, degc, kgps, to_bar, to_degc, to_delta_k, to_kgps, to_mw,
};
use gf_steam::{CorrelationSteam, SteamProperties};

/// Runs the plant one single-pass step at a time.
///
/// Each step runs wellhead → separator → moisture separator → turbine →
/// condenser and generator → cooling tower. Feedback is delayed by exactly one
/// step: the condenser outlet pressure of step n is the turbine back pressure
/// of step n + 1, and the tower outlet temperature becomes `condenser_temp`.
///
/// # Example
///
/// ```
/// use gf_sim::SimulationEngine;
///
/// let mut engine = SimulationEngine::new();
/// let state = engine.step().unwrap();
/// assert!(state.turbine_out_power > 0.0);
/// assert!(state.electrical_power <= state.turbine_out_power);
/// ```
pub struct SimulationEngine {
    steam: Arc<dyn SteamProperties>,
    wellhead: WellheadSource,
    separator: SteamSeparator,
    moisture_separator: MoistureSeparator,
    turbine: TurbineStage,
    condenser: Condenser,
    generator: Generator,
    cooling_tower: CoolingTower,
    state: SimulationState,
    steps: u64,
}

impl SimulationEngine {
    /// Engine on the default correlation steam model.
    pub fn new() -> Self {
        Self::with_steam(Arc::new(CorrelationSteam::new()))
    }

    /// Engine with default parameters on the given steam model.
    pub fn with_steam(steam: Arc<dyn SteamProperties>) -> Self {
        Self {
            wellhead: WellheadSource::new(),
            separator: SteamSeparator::new(Arc::clone(&steam)),
            moisture_separator: MoistureSeparator::new(Arc::clone(&steam)),
            turbine: TurbineStage::new(Arc::clone(&steam)),
            condenser: Condenser::new(Arc::clone(&steam)),
            generator: Generator::new(),
            cooling_tower: CoolingTower::new(),
            steam,
            state: SimulationState::initial(),
            steps: 0,
        }
    }

    /// Engine with every parameter taken from `config`.
    ///
    /// Values go through the same setters as interactive changes, so
    /// out-of-range fractions are clamped rather than rejected.
    pub fn from_config(config: &PlantConfig, steam: Arc<dyn SteamProperties>) -> Self {
        let mut engine = Self::with_steam(steam);

        let wellhead = &config.wellhead;
        engine.set_wellhead_pressure(bar(wellhead.pressure_bar));
        engine.set_wellhead_temperature(degc(wellhead.temperature_c));
        engine.set_wellhead_flow(kgps(wellhead.flow_kgps));

        let s = Arc::clone(&engine.steam);
        engine.separator = SteamSeparator::with_params(Arc::clone(&s), &config.separator);
        engine.moisture_separator =
            MoistureSeparator::with_params(Arc::clone(&s), &config.moisture_separator);
        engine.turbine = TurbineStage::with_params(Arc::clone(&s), &config.turbine);
        engine.condenser = Condenser::with_params(s, &config.condenser);
        engine.cooling_tower = CoolingTower::with_params(&config.cooling_tower);
        engine.generator = Generator::with_params(&config.generator);
        engine
    }

    /// Advance one step and return a snapshot of the new state.
    ///
    /// All computed fields are committed together. On error nothing is
    /// committed and the step counter does not advance.
    pub fn step(&mut self) -> SimResult<SimulationState> {
        let inlet = self.wellhead.process(WellheadOverride::default())?;
        let separated = self.separator.process(inlet)?;
        let dried = self.moisture_separator.process(separated.steam)?;
        let expanded = self.turbine.process(TurbineInput {
            inlet: dried.steam,
            back_pressure: bar(self.state.condenser_pressure),
        })?;
        let condensed = self.condenser.process(expanded.exhaust)?;
        let generated = self.generator.process(expanded.power)?;
        let cooled = self.cooling_tower.process(CoolingTowerInput {
            inlet_temperature: condensed.outlet.temperature,
            water_flow: condensed.cooling_water_flow,
        })?;

        if !expanded.converged {
            tracing::warn!(
                step = self.steps + 1,
                inlet_bar = dried.steam.pressure_bar(),
                back_pressure_bar = self.state.condenser_pressure,
                "isentropic search did not converge; using best candidate"
            );
        }

        let next = SimulationState {
            wellhead_pressure: inlet.pressure_bar(),
            wellhead_temp: inlet.temperature_c(),
            wellhead_flow: inlet.flow_kgps(),
            separator_outlet_pressure: Some(separated.steam.pressure_bar()),
            separator_outlet_steam_flow: Some(separated.steam.flow_kgps()),
            separator_outlet_steam_temp: Some(separated.steam.temperature_c()),
            waste_water_flow: Some(to_kgps(separated.waste_water_flow)),
            steam_flow: Some(dried.steam.flow_kgps()),
            turbine_out_power: to_mw(expanded.power),
            electrical_power: to_mw(generated.electrical_power),
            condenser_pressure: condensed.outlet.pressure_bar(),
            condenser_temp: to_degc(cooled.outlet_temperature),
            turbine_inlet_pressure: Some(dried.steam.pressure_bar()),
            turbine_inlet_temp: Some(dried.steam.temperature_c()),
            turbine_exhaust_temp: Some(expanded.exhaust.temperature_c()),
            condenser_heat_duty: Some(to_mw(condensed.heat_duty)),
            cooling_tower_capacity: Some(to_mw(cooled.capacity)),
            cooling_tower_water_loss: Some(to_kgps(cooled.water_loss)),
            cooling_tower_approach: Some(to_delta_k(cooled.approach)),
            isentropic_converged: Some(expanded.converged),
        };

        self.state = next;
        self.steps += 1;

        tracing::debug!(
            step = self.steps,
            steam_model = self.steam.name(),
            steam_flow_kgps = dried.steam.flow_kgps(),
            turbine_mw = self.state.turbine_out_power,
            electrical_mw = self.state.electrical_power,
            condenser_bar = self.state.condenser_pressure,
            condenser_temp_c = self.state.condenser_temp,
            "plant step"
        );

        Ok(self.state.clone())
    }

    /// Independent copy of the current state.
    pub fn state(&self) -> SimulationState {
        self.state.clone()
    }

    /// Restore the initial state and zero the step counter.
    ///
    /// Stage parameters, wellhead included, are kept; the next step reads the
    /// wellhead inputs back from the stage.
    pub fn reset(&mut self) {
        self.state = SimulationState::initial();
        tracing::info!(after_steps = self.steps, "simulation reset");
        self.steps = 0;
    }

    /// Steps committed since construction or the last reset.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn steam(&self) -> &Arc<dyn SteamProperties> {
        &self.steam
    }

    /// Current parameters of every stage.
    pub fn config(&self) -> PlantConfig {
        PlantConfig {
            wellhead: self.wellhead.params().clone(),
            separator: self.separator.params().clone(),
            moisture_separator: self.moisture_separator.params().clone(),
            turbine: self.turbine.params().clone(),
            condenser: self.condenser.params().clone(),
            cooling_tower: self.cooling_tower.params().clone(),
            generator: self.generator.params().clone(),
        }
    }

    // ---- wellhead -------------------------------------------------------

    pub fn set_wellhead_pressure(&mut self, p: Pressure) {
        self.wellhead.set_pressure(p);
        self.state.wellhead_pressure = to_bar(p);
    }

    pub fn set_wellhead_temperature(&mut self, t: Temperature) {
        self.wellhead.set_temperature(t);
        self.state.wellhead_temp = to_degc(t);
    }

    pub fn set_wellhead_flow(&mut self, flow: MassRate) {
        self.wellhead.set_flow(flow);
        self.state.wellhead_flow = to_kgps(flow);
    }

    // ---- separators -----------------------------------------------------

    pub fn set_separator_efficiency(&mut self, efficiency: f64) {
        self.separator.set_efficiency(efficiency);
    }

    pub fn set_separator_pressure_drop(&mut self, pressure_drop: f64) {
        self.separator.set_pressure_drop(pressure_drop);
    }

    pub fn set_moisture_separator_efficiency(&mut self, efficiency: f64) {
        self.moisture_separator.set_efficiency(efficiency);
    }

    pub fn set_moisture_separator_pressure_drop(&mut self, pressure_drop: f64) {
        self.moisture_separator.set_pressure_drop(pressure_drop);
    }

    // ---- turbine --------------------------------------------------------

    pub fn set_turbine_isentropic_efficiency(&mut self, efficiency: f64) {
        self.turbine.set_isentropic_efficiency(efficiency);
    }

    pub fn set_turbine_mechanical_efficiency(&mut self, efficiency: f64) {
        self.turbine.set_mechanical_efficiency(efficiency);
    }

    // ---- condenser ------------------------------------------------------

    pub fn set_condenser_efficiency(&mut self, efficiency: f64) {
        self.condenser.set_efficiency(efficiency);
    }

    pub fn set_condenser_pressure_drop(&mut self, pressure_drop: f64) {
        self.condenser.set_pressure_drop(pressure_drop);
    }

    pub fn set_cooling_water_temperature(&mut self, t: Temperature) {
        self.condenser.set_cooling_water_temperature(t);
    }

    pub fn set_cooling_water_flow(&mut self, flow: MassRate) {
        self.condenser.set_cooling_water_flow(flow);
    }

    // ---- cooling tower --------------------------------------------------

    pub fn set_cooling_tower_efficiency(&mut self, efficiency: f64) {
        self.cooling_tower.set_efficiency(efficiency);
    }

    pub fn set_wet_bulb_temperature(&mut self, t: Temperature) {
        self.cooling_tower.set_wet_bulb(t);
    }

    pub fn set_drift_loss(&mut self, fraction: f64) {
        self.cooling_tower.set_drift_loss(fraction);
    }

    pub fn set_evaporation_loss(&mut self, fraction: f64) {
        self.cooling_tower.set_evaporation_loss(fraction);
    }

    // ---- generator ------------------------------------------------------

    pub fn set_generator_efficiency(&mut self, efficiency: f64) {
        self.generator.set_efficiency(efficiency);
    }

    pub fn set_power_factor(&mut self, power_factor: f64) {
        self.generator.set_power_factor(power_factor);
    }

    /// Terminal voltage [kV]
    pub fn set_generator_voltage(&mut self, kv: f64) {
        self.generator.set_voltage(kv);
    }

    /// Grid frequency [Hz]
    pub fn set_generator_frequency(&mut self, hz: f64) {
        self.generator.set_frequency(hz);
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_fills_every_field() {
        let mut engine = SimulationEngine::new();
        let s = engine.step().unwrap();
        assert!(s.separator_outlet_pressure.is_some());
        assert!(s.steam_flow.is_some());
        assert!(s.turbine_exhaust_temp.is_some());
        assert!(s.cooling_tower_approach.is_some());
        assert_eq!(s.isentropic_converged, Some(true));
        assert_eq!(engine.steps(), 1);
    }

    #[test]
    fn snapshots_are_independent() {
        let mut engine = SimulationEngine::new();
        let mut snapshot = engine.state();
        snapshot.wellhead_pressure = 99.0;
        assert_eq!(engine.state().wellhead_pressure, 10.5);
        engine.step().unwrap();
        assert_eq!(snapshot.wellhead_pressure, 99.0);
    }

    #[test]
    fn wellhead_setters_mirror_into_state() {
        let mut engine = SimulationEngine::new();
        engine.set_wellhead_pressure(bar(12.0));
        engine.set_wellhead_temperature(degc(185.0));
        engine.set_wellhead_flow(kgps(100.0));
        let s = engine.state();
        assert!((s.wellhead_pressure - 12.0).abs() < 1e-12);
        assert!((s.wellhead_temp - 185.0).abs() < 1e-9);
        assert!((s.wellhead_flow - 100.0).abs() < 1e-12);
        assert!(s.separator_outlet_pressure.is_none());
    }

    #[test]
    fn fraction_setters_clamp() {
        let mut engine = SimulationEngine::new();
        engine.set_separator_efficiency(-0.5);
        engine.set_turbine_isentropic_efficiency(1.5);
        engine.set_condenser_pressure_drop(0.9);
        engine.set_moisture_separator_pressure_drop(0.9);
        engine.set_drift_loss(1.0);
        engine.set_evaporation_loss(1.0);
        engine.set_power_factor(f64::NAN);

        let config = engine.config();
        assert_eq!(config.separator.efficiency, 0.0);
        assert_eq!(config.turbine.isentropic_efficiency, 1.0);
        assert_eq!(config.condenser.pressure_drop, 0.2);
        assert_eq!(config.moisture_separator.pressure_drop, 0.1);
        assert_eq!(config.cooling_tower.drift_loss, 0.01);
        assert_eq!(config.cooling_tower.evaporation_loss, 0.05);
        assert_eq!(config.generator.power_factor, 0.0);
    }

    #[test]
    fn reset_keeps_other_stage_parameters() {
        let mut engine = SimulationEngine::new();
        engine.set_wellhead_flow(kgps(120.0));
        engine.set_generator_efficiency(0.9);
        engine.step().unwrap();
        engine.reset();

        let config = engine.config();
        assert_eq!(config.wellhead.flow_kgps, 120.0);
        assert_eq!(config.generator.efficiency, 0.9);
        assert_eq!(engine.steps(), 0);
    }
}
