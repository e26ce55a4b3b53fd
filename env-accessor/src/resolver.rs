//! Resolution of variable names against an environment source.

use env_source::{EnvSource, Environment};
use tracing::debug;

use crate::EnvVar;

/// Options controlling how names are looked up and values are interpreted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ResolverOptions {
    prefix: Option<String>,
    empty_is_unset: bool,
}

impl ResolverOptions {
    /// Creates options with no prefix that treat empty values as set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepends `prefix` to every looked-up name.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.prefix = (!prefix.is_empty()).then_some(prefix);
        self
    }

    /// Treats present-but-empty values exactly like unset ones.
    #[must_use]
    pub fn empty_is_unset(mut self, enabled: bool) -> Self {
        self.empty_is_unset = enabled;
        self
    }

    /// Configured name prefix, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Whether empty values are discarded.
    #[must_use]
    pub fn treats_empty_as_unset(&self) -> bool {
        self.empty_is_unset
    }
}

/// Entry point producing [`EnvVar`] accessors from a borrowed source.
///
/// The source is only read, never written, and is held for no longer than
/// the resolver itself.
#[derive(Debug)]
pub struct Resolver<'env, S: ?Sized> {
    source: &'env S,
    options: ResolverOptions,
}

impl<S: ?Sized> Clone for Resolver<'_, S> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            options: self.options.clone(),
        }
    }
}

impl<'env, S: EnvSource + ?Sized> Resolver<'env, S> {
    /// Creates a resolver with default options.
    #[must_use]
    pub fn new(source: &'env S) -> Self {
        Self::with_options(source, ResolverOptions::default())
    }

    /// Creates a resolver with explicit options.
    #[must_use]
    pub fn with_options(source: &'env S, options: ResolverOptions) -> Self {
        Self { source, options }
    }

    /// Returns the active options.
    #[must_use]
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Returns the full, unmodified environment mapping.
    ///
    /// This is the source itself. For [`SystemEnv`](env_source::SystemEnv)
    /// that is a zero-sized handle; use [`Resolver::all_vars`] (or
    /// [`EnvSource::snapshot`]) to obtain the entries.
    #[must_use]
    pub fn all(&self) -> &'env S {
        self.source
    }

    /// Copies every entry of the source into an owned [`Environment`].
    ///
    /// Ignores the resolver prefix and empty-value policy.
    #[must_use]
    pub fn all_vars(&self) -> Environment {
        self.source.snapshot()
    }

    /// Resolves `name`; the accessor is unset when the variable is absent.
    #[must_use]
    pub fn var(&self, name: &str) -> EnvVar {
        self.resolve(name, None)
    }

    /// Resolves `name`, substituting `fallback` when the variable is absent.
    ///
    /// The fallback is indistinguishable from a real value downstream and is
    /// validated by the same coercion rules.
    #[must_use]
    pub fn var_or(&self, name: &str, fallback: impl Into<String>) -> EnvVar {
        self.resolve(name, Some(fallback.into()))
    }

    fn resolve(&self, name: &str, fallback: Option<String>) -> EnvVar {
        let key = self.key(name);
        let raw = self.discard_empty(&key, self.source.get(&key)).or_else(|| {
            let fallback = fallback?;
            debug!(variable = %key, "variable not set; using fallback");
            self.discard_empty(&key, Some(fallback))
        });
        EnvVar::new(key, raw)
    }

    fn key(&self, name: &str) -> String {
        match &self.options.prefix {
            Some(prefix) => format!("{prefix}{name}"),
            None => name.to_owned(),
        }
    }

    fn discard_empty(&self, key: &str, raw: Option<String>) -> Option<String> {
        match raw {
            Some(value) if value.is_empty() && self.options.empty_is_unset => {
                debug!(variable = key, "discarding empty value");
                None
            }
            other => other,
        }
    }
}
