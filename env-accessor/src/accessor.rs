//! Accessors bound to one resolved environment variable.

use std::fmt::Display;
use std::str::FromStr;

use env_primitives::{Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::coerce;

/// A variable name paired with its resolved raw value, which may be unset.
///
/// Coercions on `EnvVar` return `Ok(None)` when the variable is unset and
/// fail with [`Error::Parse`] when a present value is malformed. Call
/// [`EnvVar::required`] first to turn an unset variable into an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnvVar {
    name: String,
    raw: Option<String>,
}

impl EnvVar {
    /// Creates an accessor from a name and an already-resolved raw value.
    #[must_use]
    pub fn new(name: impl Into<String>, raw: Option<String>) -> Self {
        Self {
            name: name.into(),
            raw,
        }
    }

    /// Name of the variable, including any resolver prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw value, real or substituted fallback.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Returns `true` when a raw value is present, even if empty.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.raw.is_some()
    }

    /// Requires the variable to be set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingVariable`] when the raw value is absent.
    pub fn required(self) -> Result<RequiredEnvVar> {
        match self.raw {
            Some(raw) => Ok(RequiredEnvVar {
                name: self.name,
                raw,
            }),
            None => Err(Error::missing(self.name)),
        }
    }

    /// Returns the raw value as text. Never fails.
    #[must_use]
    pub fn as_string(&self) -> Option<String> {
        self.raw.clone()
    }

    /// Parses the value as a strict integer literal: an optional `-` then
    /// ASCII digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the value has a fractional part, a leading
    /// `+`, stray characters, or does not fit in an `i64`.
    pub fn as_int(&self) -> Result<Option<i64>> {
        self.coerce(coerce::int)
    }

    /// Parses the value as a finite float.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the value is not a numeric literal, or if
    /// it overflows to infinity or a nonzero literal underflows to zero.
    pub fn as_float(&self) -> Result<Option<f64>> {
        self.coerce(coerce::float)
    }

    /// Parses the value as the literal `true` or `false`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for any other text, including `1` or `TRUE`.
    pub fn as_bool(&self) -> Result<Option<bool>> {
        self.coerce(coerce::boolean)
    }

    /// Parses the value as a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the value is not well-formed JSON, or if
    /// it nests arrays and objects deeper than 128 levels.
    pub fn as_json(&self) -> Result<Option<Value>> {
        self.coerce(coerce::json)
    }

    /// Parses the value as JSON and deserializes it into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on malformed JSON, nesting deeper than 128
    /// levels, or a shape mismatch.
    pub fn deserialize_json<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        self.coerce(coerce::json)
    }

    /// Splits the value on commas, trimming items and dropping empty ones.
    #[must_use]
    pub fn as_list(&self) -> Option<Vec<String>> {
        self.raw.as_deref().map(coerce::list)
    }

    /// Parses the value with `T`'s [`FromStr`] implementation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] carrying `T`'s type name when parsing fails.
    pub fn parse<T>(&self) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.coerce(coerce::from_str)
    }

    fn coerce<T>(&self, convert: impl FnOnce(&str, &str) -> Result<T>) -> Result<Option<T>> {
        self.raw
            .as_deref()
            .map(|raw| convert(&self.name, raw))
            .transpose()
    }
}

/// An accessor whose raw value is known to be present.
///
/// Produced by [`EnvVar::required`]; coercions return the value directly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequiredEnvVar {
    name: String,
    raw: String,
}

impl RequiredEnvVar {
    /// Name of the variable, including any resolver prefix.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrows the raw value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the raw value as text. Never fails.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.raw.clone()
    }

    /// Consumes the accessor, returning the raw value.
    #[must_use]
    pub fn into_string(self) -> String {
        self.raw
    }

    /// Parses the value as a strict integer literal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the value is not an optional `-` followed
    /// by digits that fit in an `i64`.
    pub fn as_int(&self) -> Result<i64> {
        coerce::int(&self.name, &self.raw)
    }

    /// Parses the value as a finite float.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the value is not a numeric literal, or if
    /// it overflows to infinity or a nonzero literal underflows to zero.
    pub fn as_float(&self) -> Result<f64> {
        coerce::float(&self.name, &self.raw)
    }

    /// Parses the value as the literal `true` or `false`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for any other text.
    pub fn as_bool(&self) -> Result<bool> {
        coerce::boolean(&self.name, &self.raw)
    }

    /// Parses the value as a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] if the value is not well-formed JSON, or if
    /// it nests arrays and objects deeper than 128 levels.
    pub fn as_json(&self) -> Result<Value> {
        coerce::json(&self.name, &self.raw)
    }

    /// Parses the value as JSON and deserializes it into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] on malformed JSON, nesting deeper than 128
    /// levels, or a shape mismatch.
    pub fn deserialize_json<T: DeserializeOwned>(&self) -> Result<T> {
        coerce::json(&self.name, &self.raw)
    }

    /// Splits the value on commas, trimming items and dropping empty ones.
    #[must_use]
    pub fn as_list(&self) -> Vec<String> {
        coerce::list(&self.raw)
    }

    /// Parses the value with `T`'s [`FromStr`] implementation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] carrying `T`'s type name when parsing fails.
    pub fn parse<T>(&self) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        coerce::from_str(&self.name, &self.raw)
    }
}

impl From<RequiredEnvVar> for EnvVar {
    fn from(value: RequiredEnvVar) -> Self {
        Self {
            name: value.name,
            raw: Some(value.raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use env_primitives::TargetType;

    fn unset() -> EnvVar {
        EnvVar::new("UNSET", None)
    }

    fn set(raw: &str) -> EnvVar {
        EnvVar::new("VALUE", Some(raw.to_owned()))
    }

    #[test]
    fn unset_variable_coerces_to_none() {
        let var = unset();
        assert_eq!(var.as_string(), None);
        assert_eq!(var.as_int().expect("int"), None);
        assert_eq!(var.as_float().expect("float"), None);
        assert_eq!(var.as_bool().expect("bool"), None);
        assert_eq!(var.as_json().expect("json"), None);
        assert_eq!(var.as_list(), None);
        assert_eq!(var.parse::<u16>().expect("parse"), None);
    }

    #[test]
    fn required_fails_on_unset_variable() {
        let err = unset().required().expect_err("should fail");
        assert_eq!(err, Error::missing("UNSET"));
    }

    #[test]
    fn required_keeps_name_and_value() {
        let var = set("test").required().expect("required");
        assert_eq!(var.name(), "VALUE");
        assert_eq!(var.as_str(), "test");
        assert_eq!(var.as_string(), "test");
        assert_eq!(var.into_string(), "test");
    }

    #[test]
    fn required_converts_back_into_set_accessor() {
        let required = set("7").required().expect("required");
        let var = EnvVar::from(required);
        assert!(var.is_set());
        assert_eq!(var.as_int().expect("int"), Some(7));
    }

    #[test]
    fn empty_string_satisfies_required() {
        let var = set("").required().expect("empty is set");
        assert_eq!(var.as_string(), "");
        assert!(var.as_int().is_err());
    }

    #[test]
    fn zero_and_false_are_not_absent() {
        assert_eq!(set("0").as_int().expect("int"), Some(0));
        assert_eq!(set("false").as_bool().expect("bool"), Some(false));
    }

    #[test]
    fn malformed_value_names_variable_target_and_raw() {
        let err = set("1.2").as_int().expect_err("not an int");
        assert_eq!(
            err,
            Error::Parse {
                name: "VALUE".into(),
                target: TargetType::Int,
                raw: "1.2".into(),
                reason: "invalid digit found in string".into(),
            }
        );
    }

    #[test]
    fn required_coercions_return_plain_values() {
        assert_eq!(set("12").required().and_then(|v| v.as_int()).expect("int"), 12);
        assert!(!set("false").required().and_then(|v| v.as_bool()).expect("bool"));
        assert_eq!(
            set(r#"{"key":"value"}"#)
                .required()
                .and_then(|v| v.as_json())
                .expect("json"),
            json!({ "key": "value" })
        );
        assert_eq!(
            set("a, b").required().map(|v| v.as_list()).expect("list"),
            vec!["a", "b"]
        );
    }

    #[test]
    fn deserializes_json_into_caller_type() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Limits {
            max: u32,
        }

        let limits = set(r#"{"max": 5}"#)
            .deserialize_json::<Limits>()
            .expect("deserialize");
        assert_eq!(limits, Some(Limits { max: 5 }));

        let err = set(r#"{"max": "five"}"#)
            .deserialize_json::<Limits>()
            .expect_err("shape mismatch");
        assert!(matches!(
            err,
            Error::Parse {
                target: TargetType::Json,
                ..
            }
        ));
    }

    #[test]
    fn parse_uses_from_str() {
        let port = set("8080").parse::<u16>().expect("port");
        assert_eq!(port, Some(8080));
        assert!(set("70000").parse::<u16>().is_err());
    }

    #[test]
    fn repeated_coercions_are_independent() {
        let var = set("1");
        assert_eq!(var.as_int().expect("int"), Some(1));
        assert!(var.as_bool().is_err());
        assert_eq!(var.as_json().expect("json"), Some(json!(1)));
    }
}
