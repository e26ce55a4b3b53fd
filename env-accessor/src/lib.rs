//! Typed access to environment variables.
//!
//! A [`Resolver`] borrows an [`EnvSource`](env_source::EnvSource) and hands out
//! one [`EnvVar`] per lookup. The accessor is either coerced directly, yielding
//! `None` when the variable is unset, or first passed through
//! [`EnvVar::required`], which fails fast on an unset variable and returns a
//! [`RequiredEnvVar`] whose coercions yield plain values.
//!
//! ```
//! use env_accessor::Resolver;
//! use env_source::Environment;
//!
//! let env: Environment = [("PORT", "8080")].into_iter().collect();
//! let resolver = Resolver::new(&env);
//!
//! let port = resolver.var("PORT").required()?.as_int()?;
//! let workers = resolver.var_or("WORKERS", "4").as_int()?;
//! let debug = resolver.var("DEBUG").as_bool()?;
//!
//! assert_eq!(port, 8080);
//! assert_eq!(workers, Some(4));
//! assert_eq!(debug, None);
//! # Ok::<(), env_primitives::Error>(())
//! ```

#![warn(missing_docs, clippy::pedantic)]

mod accessor;
mod coerce;
mod resolver;

/// Accessors bound to a single resolved variable.
pub use accessor::{EnvVar, RequiredEnvVar};
/// Error type and result alias re-exported from the primitives crate.
pub use env_primitives::{Error, Result, TargetType};
/// Resolver entry point and its configuration.
pub use resolver::{Resolver, ResolverOptions};
