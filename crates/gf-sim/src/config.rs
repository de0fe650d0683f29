//! Whole-plant parameter set.

use gf_components::{
    CondenserParams, CoolingTowerParams, GeneratorParams, MoistureSeparatorParams,
    SeparatorParams, TurbineParams, WellheadParams,
};
use serde::{Deserialize, Serialize};

/// Parameters for every stage of the plant.
///
/// Missing sections or fields deserialize to their defaults. Values are not
/// validated here; [`crate::SimulationEngine::from_config`] applies them
/// through the clamping setters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlantConfig {
    pub wellhead: WellheadParams,
    pub separator: SeparatorParams,
    pub moisture_separator: MoistureSeparatorParams,
    pub turbine: TurbineParams,
    pub condenser: CondenserParams,
    pub cooling_tower: CoolingTowerParams,
    pub generator: GeneratorParams,
}
