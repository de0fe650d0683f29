//! Common utilities for stage calculations.

use crate::error::{ComponentError, ComponentResult};
use gf_core::numeric::{FractionRange, ensure_finite};

/// Flows at or below this are treated as zero (kg/s)
pub const EPSILON_MDOT: f64 = 1e-9;

/// Ensure a value is finite, returning ComponentError if not.
pub fn check_finite(value: f64, what: &'static str) -> ComponentResult<()> {
    ensure_finite(value, what).map_err(|_| ComponentError::NonPhysical { what })?;
    Ok(())
}

/// Clamp a dimensionless parameter into its range, tracing when it moves.
pub fn clamp_fraction(value: f64, range: FractionRange, what: &'static str) -> f64 {
    let clamped = range.clamp(value);
    if clamped != value {
        tracing::trace!(parameter = what, value, clamped, "parameter clamped");
    }
    clamped
}

/// Flow too small to carry energy.
pub fn is_negligible_flow(kgps: f64) -> bool {
    kgps <= EPSILON_MDOT
}
