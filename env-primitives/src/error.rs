//! Shared error definitions for environment variable access.

use thiserror::Error;

use crate::TargetType;

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while requiring or coercing an environment variable.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A variable marked as required was not set.
    #[error("missing required environment variable `{name}`")]
    MissingVariable {
        /// Name of the variable, including any resolver prefix.
        name: String,
    },

    /// The raw value did not match the grammar of the requested type.
    #[error("environment variable `{name}` is not a valid {target}: {reason} (value: {raw:?})")]
    Parse {
        /// Name of the variable, including any resolver prefix.
        name: String,
        /// Type the value was being coerced into.
        target: TargetType,
        /// The offending raw value, real or substituted default.
        raw: String,
        /// Human-readable reason for rejection.
        reason: String,
    },
}

impl Error {
    /// Helper to construct [`Error::MissingVariable`].
    #[must_use]
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingVariable { name: name.into() }
    }

    /// Helper to construct [`Error::Parse`] from string-like values.
    #[must_use]
    pub fn parse(
        name: impl Into<String>,
        target: TargetType,
        raw: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::Parse {
            name: name.into(),
            target,
            raw: raw.into(),
            reason: reason.to_string(),
        }
    }

    /// Name of the variable the error refers to.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::MissingVariable { name } | Self::Parse { name, .. } => name,
        }
    }

    /// Returns `true` for [`Error::MissingVariable`].
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingVariable { .. })
    }
}
