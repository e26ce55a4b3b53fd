//! Core shared types for typed environment variable access.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod target;

/// Error type and result alias shared across the workspace.
pub use error::{Error, Result};
/// Descriptor of the type a raw value was being coerced into.
pub use target::TargetType;
