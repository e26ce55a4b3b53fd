use std::env;
use std::ffi::OsString;

use tracing::warn;

use crate::{EnvSource, Environment};

/// Zero-sized type; delegates to `std::env` on every lookup.
///
/// Values that are not valid UTF-8 are converted lossily: invalid sequences
/// become `U+FFFD`, a warning naming the variable is logged, and the altered
/// text is what accessors see. Such a value therefore still satisfies a
/// required check and coerces to text. Snapshots skip names that are not
/// valid UTF-8.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn get(&self, key: &str) -> Option<String> {
        // `var_os` rejects these names on some platforms.
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        env::var_os(key).map(|value| into_text(key, value))
    }

    fn snapshot(&self) -> Environment {
        env::vars_os()
            .filter_map(|(key, value)| {
                let key = key.into_string().ok()?;
                let value = into_text(&key, value);
                Some((key, value))
            })
            .collect()
    }
}

fn into_text(key: &str, value: OsString) -> String {
    value.into_string().unwrap_or_else(|raw| {
        warn!(variable = key, "environment value is not valid UTF-8; converting lossily");
        raw.to_string_lossy().into_owned()
    })
}
