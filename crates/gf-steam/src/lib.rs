//! gf-steam: steam property calculations for geoflash.
//!
//! Provides:
//! - `SteamProperties` trait: saturation curve, h/s/v/x at (P, T), isentropic expansion
//! - Operating envelope the plant models are valid over (inputs are clamped to it)
//! - `CorrelationSteam`: closed-form correlation backend (default)
//! - `CoolPropSteam`: real-fluid water backend (feature `coolprop`)
//!
//! # Architecture
//!
//! The rest of geoflash only sees the `SteamProperties` trait, shared as an
//! `Arc<dyn SteamProperties>`. Implementations hold no mutable state, so one
//! instance can serve every stage and every thread. Which backend a plant runs
//! on is a construction-time choice.
//!
//! # Example
//!
//! ```
//! use gf_core::units::{bar, degc, to_degc};
//! use gf_steam::{CorrelationSteam, SteamProperties};
//!
//! let steam = CorrelationSteam::new();
//! let t_sat = steam.saturated_temperature(bar(10.0)).unwrap();
//! assert!((to_degc(t_sat) - 179.9).abs() < 0.5);
//!
//! let drop = steam
//!     .isentropic_enthalpy_drop(bar(9.8), degc(179.0), bar(0.06))
//!     .unwrap();
//! assert!(drop.converged);
//! assert!(drop.enthalpy_drop > 0.0);
//! ```

#[cfg(feature = "coolprop")]
pub mod coolprop;
pub mod correlation;
pub mod envelope;
pub mod error;
pub mod isentropic;
pub mod model;
pub mod saturation;

// Re-exports for ergonomics
#[cfg(feature = "coolprop")]
pub use coolprop::CoolPropSteam;
pub use correlation::CorrelationSteam;
pub use envelope::OperatingEnvelope;
pub use error::{SteamError, SteamResult};
pub use isentropic::{IsentropicDrop, IsentropicSearch};
pub use model::{SpecEnthalpy, SpecEntropy, SpecVolume, SteamProperties, SteamPropertyPack};
