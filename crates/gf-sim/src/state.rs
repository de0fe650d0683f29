//! The persistent plant state owned by the engine.

use serde::{Deserialize, Serialize};

/// Initial wellhead pressure [barG]
pub const INITIAL_WELLHEAD_PRESSURE_BAR: f64 = 10.5;
/// Initial wellhead temperature [°C]
pub const INITIAL_WELLHEAD_TEMP_C: f64 = 178.0;
/// Initial wellhead flow [kg/s]
pub const INITIAL_WELLHEAD_FLOW_KGPS: f64 = 85.0;
/// Initial condenser pressure [barA]
pub const INITIAL_CONDENSER_PRESSURE_BAR: f64 = 0.06;
/// Initial condenser temperature [°C]
pub const INITIAL_CONDENSER_TEMP_C: f64 = 35.0;

/// Snapshot of the plant's physical condition.
///
/// Values are plain numbers in plant units (bar, °C, kg/s, MW) so a snapshot
/// can be handed to any reader or serialized as is. Fields that only exist
/// once a step has run are `None` until then.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    /// [barG]
    pub wellhead_pressure: f64,
    /// [°C]
    pub wellhead_temp: f64,
    /// [kg/s]
    pub wellhead_flow: f64,

    /// Flash separator outlet pressure [bar]
    pub separator_outlet_pressure: Option<f64>,
    /// Steam leaving the flash separator [kg/s]
    pub separator_outlet_steam_flow: Option<f64>,
    /// [°C]
    pub separator_outlet_steam_temp: Option<f64>,
    /// Brine leaving the flash separator [kg/s]
    pub waste_water_flow: Option<f64>,
    /// Dry steam reaching the turbine [kg/s]
    pub steam_flow: Option<f64>,

    /// Turbine shaft power [MW]
    pub turbine_out_power: f64,
    /// [MW]
    pub electrical_power: f64,

    /// Condenser pressure carried into the next step as turbine back pressure [barA]
    pub condenser_pressure: f64,
    /// Cooling water temperature returned by the tower [°C]
    pub condenser_temp: f64,

    /// [bar]
    pub turbine_inlet_pressure: Option<f64>,
    /// [°C]
    pub turbine_inlet_temp: Option<f64>,
    /// [°C]
    pub turbine_exhaust_temp: Option<f64>,
    /// [MW]
    pub condenser_heat_duty: Option<f64>,
    /// [MW]
    pub cooling_tower_capacity: Option<f64>,
    /// [kg/s]
    pub cooling_tower_water_loss: Option<f64>,
    /// [K]
    pub cooling_tower_approach: Option<f64>,
    /// False when the last turbine expansion came from a degraded search.
    pub isentropic_converged: Option<bool>,
}

impl SimulationState {
    /// The state every engine starts from and returns to on reset.
    pub fn initial() -> Self {
        Self {
            wellhead_pressure: INITIAL_WELLHEAD_PRESSURE_BAR,
            wellhead_temp: INITIAL_WELLHEAD_TEMP_C,
            wellhead_flow: INITIAL_WELLHEAD_FLOW_KGPS,
            separator_outlet_pressure: None,
            separator_outlet_steam_flow: None,
            separator_outlet_steam_temp: None,
            waste_water_flow: None,
            steam_flow: None,
            turbine_out_power: 0.0,
            electrical_power: 0.0,
            condenser_pressure: INITIAL_CONDENSER_PRESSURE_BAR,
            condenser_temp: INITIAL_CONDENSER_TEMP_C,
            turbine_inlet_pressure: None,
            turbine_inlet_temp: None,
            turbine_exhaust_temp: None,
            condenser_heat_duty: None,
            cooling_tower_capacity: None,
            cooling_tower_water_loss: None,
            cooling_tower_approach: None,
            isentropic_converged: None,
        }
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::initial()
    }
}
