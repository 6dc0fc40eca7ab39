//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;

/// Screening host configuration.
#[derive(Debug, Clone)]
pub struct ScreeningConfig {
    /// Minimum simulated typing delay before an assistant reply is shown.
    pub typing_delay: Duration,
    /// Random extra delay added on top of `typing_delay`, up to this much.
    pub typing_jitter: Duration,
    /// Seed for the technical question shuffle. `None` draws from OS entropy.
    pub question_seed: Option<u64>,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            typing_delay: Duration::from_millis(1500),
            typing_jitter: Duration::from_millis(1000),
            question_seed: None,
        }
    }
}

impl ScreeningConfig {
    /// Build from `SCREENING_*` environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let typing_delay = parse_var::<u64>(&lookup, "SCREENING_TYPING_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.typing_delay);
        let typing_jitter = parse_var::<u64>(&lookup, "SCREENING_TYPING_JITTER_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.typing_jitter);
        let question_seed = parse_var::<u64>(&lookup, "SCREENING_QUESTION_SEED")?;

        Ok(Self {
            typing_delay,
            typing_jitter,
            question_seed,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse()
                .map(Some)
                .map_err(|e: T::Err| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("{raw:?}: {e}"),
                })
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ScreeningConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.typing_delay, Duration::from_millis(1500));
        assert_eq!(config.typing_jitter, Duration::from_millis(1000));
        assert!(config.question_seed.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = ScreeningConfig::from_lookup(lookup(&[
            ("SCREENING_TYPING_DELAY_MS", "0"),
            ("SCREENING_TYPING_JITTER_MS", " 250 "),
            ("SCREENING_QUESTION_SEED", "42"),
        ]))
        .unwrap();
        assert_eq!(config.typing_delay, Duration::ZERO);
        assert_eq!(config.typing_jitter, Duration::from_millis(250));
        assert_eq!(config.question_seed, Some(42));
    }

    #[test]
    fn blank_value_uses_default() {
        let config =
            ScreeningConfig::from_lookup(lookup(&[("SCREENING_QUESTION_SEED", "  ")])).unwrap();
        assert!(config.question_seed.is_none());
    }

    #[test]
    fn rejects_garbage() {
        let err = ScreeningConfig::from_lookup(lookup(&[("SCREENING_TYPING_DELAY_MS", "soon")]))
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("SCREENING_TYPING_DELAY_MS"), "{msg}");
        assert!(msg.contains("soon"), "{msg}");
    }
}
