//! Single-pass simulation of a flash-steam geothermal plant.
//!
//! Provides:
//! - `SimulationEngine`: owns the stages and the shared steam model, steps the
//!   fixed pipeline, routes typed parameter changes
//! - `SimulationState`: value snapshots of the plant condition
//! - `PlantConfig`: serde-friendly parameters for every stage
//!
//! The engine is single-writer: `step`, `reset` and every setter take
//! `&mut self`, readers get clones. There is no convergence loop; feedback from
//! condenser and cooling tower reaches the turbine one step later.

pub mod config;
pub mod engine;
pub mod error;
pub mod state;

// Re-exports for public API
pub use config::PlantConfig;
pub use engine::SimulationEngine;
pub use error::{SimError, SimResult};
pub use state::SimulationState;
