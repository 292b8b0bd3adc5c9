//! Fatal build errors.
//!
//! These are orchestrator contract violations, not problems in the input;
//! input problems become [`Diagnostic`](crate::model::Diagnostic)s instead.

use smol_str::SmolStr;
use thiserror::Error;

use crate::model::{ContainerId, ModelError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A declaration was inserted into a second owner.
    #[error("{kind} `{name}` already has a parent container")]
    AlreadyParented { kind: &'static str, name: SmolStr },

    /// A container cannot hold the declaration being inserted.
    #[error("a {container} cannot own {kind} `{name}`")]
    InvalidMember {
        kind: &'static str,
        name: SmolStr,
        container: &'static str,
    },

    /// A cursor resolved to a container of the wrong kind.
    #[error("expected {expected} for `{symbol}`, found {found}")]
    UnexpectedContainer {
        expected: &'static str,
        found: &'static str,
        symbol: SmolStr,
    },
}

impl BuildError {
    pub fn unexpected_container(
        expected: &'static str,
        found: ContainerId,
        symbol: impl Into<SmolStr>,
    ) -> Self {
        Self::UnexpectedContainer {
            expected,
            found: found.kind_name(),
            symbol: symbol.into(),
        }
    }
}

impl From<ModelError> for BuildError {
    fn from(error: ModelError) -> Self {
        match error {
            ModelError::AlreadyParented { kind, name } => Self::AlreadyParented { kind, name },
            ModelError::InvalidMember {
                kind,
                name,
                container,
            } => Self::InvalidMember {
                kind,
                name,
                container,
            },
        }
    }
}
