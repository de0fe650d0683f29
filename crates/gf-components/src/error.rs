//! Error types for stage operations.

use gf_core::error::GfError;
use gf_steam::SteamError;
use thiserror::Error;

/// Errors that can occur while a stage processes its input.
///
/// Out-of-range parameters never get here; setters clamp them. These are the
/// contract violations left over: non-finite inputs and backend failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Backend error: {message}")]
    Backend { message: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<SteamError> for ComponentError {
    fn from(e: SteamError) -> Self {
        match e {
            SteamError::NonPhysical { what } => ComponentError::NonPhysical { what },
            other => ComponentError::Backend {
                message: format!("Steam model error: {}", other),
            },
        }
    }
}

impl From<ComponentError> for GfError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::NonPhysical { what } => GfError::NonFinite {
                what,
                value: f64::NAN,
            },
            ComponentError::Backend { message: _ } => GfError::Invariant {
                what: "backend error",
            },
            ComponentError::InvalidArg { what } => GfError::InvalidArg { what },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ComponentError::NonPhysical {
            what: "wellhead pressure",
        };
        assert!(err.to_string().contains("wellhead pressure"));
    }

    #[test]
    fn steam_errors_keep_their_kind() {
        let err: ComponentError = SteamError::NonPhysical { what: "pressure" }.into();
        assert_eq!(err, ComponentError::NonPhysical { what: "pressure" });

        let err: ComponentError = SteamError::Backend {
            message: "CoolProp failed".into(),
        }
        .into();
        assert!(matches!(err, ComponentError::Backend { ref message } if message.contains("CoolProp")));
    }

    #[test]
    fn error_conversion() {
        let gf_err: GfError = ComponentError::InvalidArg { what: "test" }.into();
        assert!(matches!(gf_err, GfError::InvalidArg { .. }));
    }
}
