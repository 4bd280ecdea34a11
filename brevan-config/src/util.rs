use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use crate::loader::error::ConfigLoadError;

/// Environment snapshot restricted to the variables the loader reads.
pub type EnvMap = HashMap<String, String>;

pub const ENV_PREFIX: &str = "BREVAN_";

/// Parse `key` from `env` when present and non-blank.
pub fn parse_env<T>(env: &EnvMap, key: &str) -> Result<Option<T>, ConfigLoadError>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = env.get(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|err: T::Err| ConfigLoadError::InvalidEnv {
            key: key.to_string(),
            value: raw.clone(),
            reason: err.to_string(),
        })
}

/// Non-blank string value of `key`.
pub fn string_env(env: &EnvMap, key: &str) -> Option<String> {
    env.get(key)
        .map(|raw| raw.trim())
        .filter(|raw| !raw.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn blank_values_are_absent() {
        let env = env(&[("BREVAN_X", "  ")]);
        assert_eq!(parse_env::<u64>(&env, "BREVAN_X").unwrap(), None);
        assert_eq!(string_env(&env, "BREVAN_X"), None);
        assert_eq!(parse_env::<u64>(&env, "BREVAN_Y").unwrap(), None);
    }

    #[test]
    fn malformed_values_name_the_variable() {
        let env = env(&[("BREVAN_AUTOPLAY_INTERVAL_MS", "soon")]);
        let err = parse_env::<u64>(&env, "BREVAN_AUTOPLAY_INTERVAL_MS")
            .unwrap_err();
        assert!(err.to_string().contains("BREVAN_AUTOPLAY_INTERVAL_MS"));
    }
}
