//! Typed, validated environment variable access.
//!
//! Depend on this crate via `cargo add mxp-env`. It bundles the internal crates
//! behind feature flags and adds shortcuts over the process environment.
//!
//! ```
//! let path = mxp_env::var("PATH").as_string();
//! let threads = mxp_env::var_or("MXP_ENV_DOC_THREADS", "4").as_int()?;
//!
//! assert_eq!(path.is_some(), std::env::var_os("PATH").is_some());
//! assert_eq!(threads, Some(4));
//! # Ok::<(), mxp_env::Error>(())
//! ```

#![warn(missing_docs, clippy::pedantic)]

/// Re-export shared primitives for convenience.
pub use env_primitives as primitives;
/// Error type and result alias.
pub use env_primitives::{Error, Result, TargetType};

/// Environment sources (enabled by `source` feature).
#[cfg(feature = "source")]
pub use env_source as source;
#[cfg(feature = "source")]
pub use env_source::{EnvSource, Environment, SystemEnv};

/// Accessors and resolver (enabled by `accessor` feature).
#[cfg(feature = "accessor")]
pub use env_accessor as accessor;
#[cfg(feature = "accessor")]
pub use env_accessor::{EnvVar, RequiredEnvVar, Resolver, ResolverOptions};

/// Snapshots every variable of the current process environment.
#[cfg(feature = "source")]
#[must_use]
pub fn vars() -> Environment {
    SystemEnv.snapshot()
}

/// Resolves `name` against the process environment.
#[cfg(feature = "accessor")]
#[must_use]
pub fn var(name: &str) -> EnvVar {
    Resolver::new(&SystemEnv).var(name)
}

/// Resolves `name` against the process environment, substituting `fallback`
/// when it is not set.
#[cfg(feature = "accessor")]
#[must_use]
pub fn var_or(name: &str, fallback: impl Into<String>) -> EnvVar {
    Resolver::new(&SystemEnv).var_or(name, fallback)
}
