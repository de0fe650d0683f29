//! Error types for simulation operations.

use gf_components::ComponentError;
use gf_steam::SteamError;
use thiserror::Error;

/// Errors a step can return.
///
/// A failed step leaves the engine state exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },

    #[error("Backend error: {message}")]
    Backend { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<ComponentError> for SimError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::NonPhysical { what } => SimError::NonPhysical { what },
            ComponentError::InvalidArg { what } => SimError::InvalidArg { what },
            ComponentError::Backend { message } => SimError::Backend { message },
        }
    }
}

impl From<SteamError> for SimError {
    fn from(e: SteamError) -> Self {
        ComponentError::from(e).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_physical_survives_both_hops() {
        let err: SimError = SteamError::NonPhysical { what: "pressure" }.into();
        assert_eq!(err, SimError::NonPhysical { what: "pressure" });
    }

    #[test]
    fn backend_message_is_kept() {
        let err: SimError = ComponentError::Backend {
            message: "rfluids error".into(),
        }
        .into();
        assert!(err.to_string().contains("rfluids error"));
    }
}
