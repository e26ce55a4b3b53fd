//! Coercion target descriptors.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// The type a raw environment value is coerced into.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// Signed 64-bit integer.
    Int,
    /// Finite 64-bit float.
    Float,
    /// Literal `true` or `false`.
    Bool,
    /// Any well-formed JSON document.
    Json,
    /// Caller-supplied type parsed through [`std::str::FromStr`].
    Custom(&'static str),
}

impl TargetType {
    /// Human-readable label used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Int => "integer",
            Self::Float => "float",
            Self::Bool => "boolean",
            Self::Json => "JSON document",
            Self::Custom(name) => name,
        }
    }
}

impl Display for TargetType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_target_uses_type_name() {
        let target = TargetType::Custom("std::net::SocketAddr");
        assert_eq!(target.to_string(), "std::net::SocketAddr");
    }

    #[test]
    fn serializes_as_snake_case() {
        let value = serde_json::to_value(TargetType::Float).expect("serialize");
        assert_eq!(value, serde_json::json!("float"));
    }
}
