//! Steam property errors.

use gf_core::GfError;
use thiserror::Error;

/// Result type for steam property operations.
pub type SteamResult<T> = Result<T, SteamError>;

/// Errors that can occur during steam property calculations.
///
/// Out-of-envelope inputs are clamped, not reported, so these only surface for
/// contract violations (non-finite inputs) or backend failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SteamError {
    /// Non-physical values (NaN or infinite pressure, temperature, ...).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Value out of valid range.
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Operation not supported by this backend.
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },

    /// Backend (CoolProp) error.
    #[error("Backend error: {message}")]
    Backend { message: String },
}

impl From<SteamError> for GfError {
    fn from(err: SteamError) -> Self {
        match err {
            SteamError::NonPhysical { what } => GfError::NonFinite {
                what,
                value: f64::NAN,
            },
            SteamError::OutOfRange { what } => GfError::InvalidArg { what },
            SteamError::NotSupported { what } => GfError::Invariant { what },
            SteamError::Backend { .. } => GfError::Invariant {
                what: "steam backend error",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SteamError::NonPhysical { what: "pressure" };
        assert!(err.to_string().contains("pressure"));

        let err = SteamError::Backend {
            message: "CoolProp failed".into(),
        };
        assert!(err.to_string().contains("CoolProp"));
    }

    #[test]
    fn error_to_gf_error() {
        let steam_err = SteamError::NotSupported { what: "mixtures" };
        let gf_err: GfError = steam_err.into();
        assert!(matches!(gf_err, GfError::Invariant { .. }));
    }
}
