//! Strict conversions from raw text to typed values.
//!
//! Every function takes the variable name only to label failures. None of
//! them trim, truncate or fall back to a default.

use std::any::type_name;
use std::fmt::Display;
use std::str::FromStr;

use env_primitives::{Error, Result, TargetType};
use serde::de::DeserializeOwned;
use tracing::debug;

pub(crate) fn int(name: &str, raw: &str) -> Result<i64> {
    // `i64::from_str` also takes a leading `+`, which no integer prints as.
    if raw.starts_with('+') {
        return Err(fail(name, TargetType::Int, raw, "unexpected leading `+`"));
    }
    raw.parse::<i64>()
        .map_err(|err| fail(name, TargetType::Int, raw, err))
}

pub(crate) fn float(name: &str, raw: &str) -> Result<f64> {
    let value = raw
        .parse::<f64>()
        .map_err(|err| fail(name, TargetType::Float, raw, err))?;
    // Rejects `inf`/`NaN` spellings and literals that overflow to infinity.
    if !value.is_finite() {
        return Err(fail(name, TargetType::Float, raw, "value is not a finite number"));
    }
    // Nonzero literals below the subnormal range would otherwise flush to zero.
    if value == 0.0 && has_nonzero_mantissa(raw) {
        return Err(fail(name, TargetType::Float, raw, "value underflows to zero"));
    }
    Ok(value)
}

fn has_nonzero_mantissa(raw: &str) -> bool {
    raw.split(['e', 'E'])
        .next()
        .is_some_and(|mantissa| mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')))
}

pub(crate) fn boolean(name: &str, raw: &str) -> Result<bool> {
    match raw {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(fail(
            name,
            TargetType::Bool,
            raw,
            "expected exactly `true` or `false`",
        )),
    }
}

pub(crate) fn json<T: DeserializeOwned>(name: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|err| fail(name, TargetType::Json, raw, err))
}

pub(crate) fn list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

pub(crate) fn from_str<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    raw.parse::<T>()
        .map_err(|err| fail(name, TargetType::Custom(type_name::<T>()), raw, err))
}

fn fail(name: &str, target: TargetType, raw: &str, reason: impl Display) -> Error {
    debug!(variable = name, target_type = %target, "environment value rejected");
    Error::parse(name, target, raw, reason)
}
