//! gf-core: stable foundation for geoflash.
//!
//! Contains:
//! - units (uom SI types + engineering-unit constructors and readers)
//! - numeric (Real + tolerances + float and fraction helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{GfError, GfResult};
pub use numeric::*;
pub use units::*;
