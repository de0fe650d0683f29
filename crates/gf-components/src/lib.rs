//! gf-components: the stages of a flash-steam geothermal plant.
//!
//! Provides, in pipeline order:
//! - `WellheadSource` with field-by-field overrides
//! - `SteamSeparator` and `MoistureSeparator`
//! - `TurbineStage`
//! - `Condenser`, `Generator`, `CoolingTower`
//!
//! Every stage implements the `Stage` trait: a deterministic function of an
//! input record and the stage's own typed parameters. Stages that need steam
//! properties hold a shared `Arc<dyn SteamProperties>` handed in at
//! construction. Fraction-valued parameters are clamped by their setters.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use gf_components::{Stage, SteamSeparator, WellheadOverride, WellheadSource};
//! use gf_steam::{CorrelationSteam, SteamProperties};
//!
//! let steam: Arc<dyn SteamProperties> = Arc::new(CorrelationSteam::new());
//! let wellhead = WellheadSource::new().process(WellheadOverride::default()).unwrap();
//! let separated = SteamSeparator::new(steam).process(wellhead).unwrap();
//!
//! assert!((separated.steam.pressure_bar() - 9.975).abs() < 1e-9);
//! println!("steam flow: {:.2} kg/s", separated.steam.flow_kgps());
//! ```

pub mod common;
pub mod condenser;
pub mod cooling_tower;
pub mod error;
pub mod generator;
pub mod moisture;
pub mod separator;
pub mod stream;
pub mod traits;
pub mod turbine;
pub mod wellhead;

// Re-exports
pub use condenser::{Condenser, CondenserOutput, CondenserParams};
pub use cooling_tower::{CoolingTower, CoolingTowerInput, CoolingTowerOutput, CoolingTowerParams};
pub use error::{ComponentError, ComponentResult};
pub use generator::{Generator, GeneratorOutput, GeneratorParams};
pub use moisture::{MoistureSeparator, MoistureSeparatorOutput, MoistureSeparatorParams};
pub use separator::{SeparatorOutput, SeparatorParams, SteamSeparator};
pub use stream::FluidStream;
pub use traits::{Stage, StageKind};
pub use turbine::{TurbineInput, TurbineOutput, TurbineParams, TurbineStage};
pub use wellhead::{WellheadOverride, WellheadParams, WellheadSource};
