//! Read-only environment mappings consumed by the resolver.
//!
//! | Source | Backing | Notes |
//! |--------|---------|-------|
//! | [`SystemEnv`] | process environment | zero-sized, reads on every lookup |
//! | [`Environment`] | `BTreeMap` | owned snapshot, ordered by name |
//! | `HashMap` / `BTreeMap` of `String` | caller map | borrowed as-is |
//!
//! None of the sources are ever written to.

#![warn(missing_docs, clippy::pedantic)]

mod snapshot;
mod source;
mod system;

/// Owned, ordered snapshot of an environment mapping.
pub use snapshot::{Environment, Iter};
/// Lookup trait implemented by every environment mapping.
pub use source::EnvSource;
/// Source backed by the current process environment.
pub use system::SystemEnv;
