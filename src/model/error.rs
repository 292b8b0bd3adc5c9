//! Contract violations raised by the declaration graph itself.

use smol_str::SmolStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A declaration was attached to a second container.
    #[error("{kind} `{name}` already has a parent container")]
    AlreadyParented { kind: &'static str, name: SmolStr },

    /// The target container cannot own that kind of declaration.
    #[error("a {container} cannot own {kind} `{name}`")]
    InvalidMember {
        kind: &'static str,
        name: SmolStr,
        container: &'static str,
    },
}

impl ModelError {
    pub fn already_parented(kind: &'static str, name: impl Into<SmolStr>) -> Self {
        Self::AlreadyParented {
            kind,
            name: name.into(),
        }
    }

    pub fn invalid_member(
        kind: &'static str,
        name: impl Into<SmolStr>,
        container: &'static str,
    ) -> Self {
        Self::InvalidMember {
            kind,
            name: name.into(),
            container,
        }
    }
}
