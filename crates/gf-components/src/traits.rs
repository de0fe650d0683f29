//! The uniform stage interface.

use crate::error::ComponentResult;
use std::fmt;

/// The closed set of stages in a flash-steam plant, in pipeline order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageKind {
    Wellhead,
    SteamSeparator,
    MoistureSeparator,
    Turbine,
    Condenser,
    CoolingTower,
    Generator,
}

impl StageKind {
    pub fn label(self) -> &'static str {
        match self {
            StageKind::Wellhead => "wellhead",
            StageKind::SteamSeparator => "steam separator",
            StageKind::MoistureSeparator => "moisture separator",
            StageKind::Turbine => "turbine",
            StageKind::Condenser => "condenser",
            StageKind::CoolingTower => "cooling tower",
            StageKind::Generator => "generator",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A plant stage: a deterministic function of its input record and its own
/// parameters.
///
/// Stages never mutate themselves while processing; parameters only change
/// through each stage's typed setters.
pub trait Stage: Send + Sync {
    type Input;
    type Output;

    fn kind(&self) -> StageKind;

    /// Stage name for logging.
    fn name(&self) -> &str {
        self.kind().label()
    }

    fn process(&self, input: Self::Input) -> ComponentResult<Self::Output>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_distinct() {
        let kinds = [
            StageKind::Wellhead,
            StageKind::SteamSeparator,
            StageKind::MoistureSeparator,
            StageKind::Turbine,
            StageKind::Condenser,
            StageKind::Generator,
            StageKind::CoolingTower,
        ];
        let mut labels: Vec<_> = kinds.iter().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 7);
        assert_eq!(StageKind::CoolingTower.to_string(), "cooling tower");
    }
}
