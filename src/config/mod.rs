//! Configuration module - environment variable parsing

use std::env;
use std::str::FromStr;

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Arena configuration loaded from environment variables
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,

    /// Seed for the arena random source
    pub seed: u64,
    pub arena_width: f32,
    pub arena_height: f32,
    /// Simulation ticks per second
    pub tps: u32,
    /// Ticks to run before the headless loop stops
    pub max_ticks: u64,

    /// Enemies kept alive at once
    pub enemy_count: usize,
    /// Every n-th spawned enemy is a fire enemy (0 disables them)
    pub fire_enemy_every: u32,

    pub player_fire_rate_ms: u64,
    pub player_bullet_speed: f32,
    pub player_speed: f32,
    pub enemy_fire_rate_ms: u64,
    pub enemy_bullet_speed: f32,
    pub enemy_speed: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            seed: 42,
            arena_width: 960.0,
            arena_height: 640.0,
            tps: 60,
            max_ticks: 3_600,
            enemy_count: 4,
            fire_enemy_every: 3,
            player_fire_rate_ms: 250,
            player_bullet_speed: 9.0,
            player_speed: 4.0,
            enemy_fire_rate_ms: 1_200,
            enemy_bullet_speed: 5.0,
            enemy_speed: 1.5,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(ConfigError::Invalid("LOG_FORMAT", other.to_string())),
        };

        let config = Self {
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format,
            seed: parse(&lookup, "ARENA_SEED", defaults.seed)?,
            arena_width: parse(&lookup, "ARENA_WIDTH", defaults.arena_width)?,
            arena_height: parse(&lookup, "ARENA_HEIGHT", defaults.arena_height)?,
            tps: parse(&lookup, "SIMULATION_TPS", defaults.tps)?,
            max_ticks: parse(&lookup, "MAX_TICKS", defaults.max_ticks)?,
            enemy_count: parse(&lookup, "ENEMY_COUNT", defaults.enemy_count)?,
            fire_enemy_every: parse(&lookup, "FIRE_ENEMY_EVERY", defaults.fire_enemy_every)?,
            player_fire_rate_ms: parse(
                &lookup,
                "PLAYER_FIRE_RATE_MS",
                defaults.player_fire_rate_ms,
            )?,
            player_bullet_speed: parse(
                &lookup,
                "PLAYER_BULLET_SPEED",
                defaults.player_bullet_speed,
            )?,
            player_speed: parse(&lookup, "PLAYER_SPEED", defaults.player_speed)?,
            enemy_fire_rate_ms: parse(&lookup, "ENEMY_FIRE_RATE_MS", defaults.enemy_fire_rate_ms)?,
            enemy_bullet_speed: parse(&lookup, "ENEMY_BULLET_SPEED", defaults.enemy_bullet_speed)?,
            enemy_speed: parse(&lookup, "ENEMY_SPEED", defaults.enemy_speed)?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tps == 0 {
            return Err(ConfigError::Invalid("SIMULATION_TPS", "0".to_string()));
        }
        if self.player_fire_rate_ms == 0 {
            return Err(ConfigError::Invalid("PLAYER_FIRE_RATE_MS", "0".to_string()));
        }
        if self.enemy_fire_rate_ms == 0 {
            return Err(ConfigError::Invalid("ENEMY_FIRE_RATE_MS", "0".to_string()));
        }
        positive("ARENA_WIDTH", self.arena_width)?;
        positive("ARENA_HEIGHT", self.arena_height)?;
        positive("PLAYER_SPEED", self.player_speed)?;
        positive("PLAYER_BULLET_SPEED", self.player_bullet_speed)?;
        positive("ENEMY_SPEED", self.enemy_speed)?;
        positive("ENEMY_BULLET_SPEED", self.enemy_bullet_speed)?;
        Ok(())
    }
}

/// `f32::from_str` accepts "NaN" and "inf", so finiteness is checked here
fn positive(key: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::Invalid(key, value.to_string()));
    }
    Ok(())
}

fn parse<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(key, raw)),
        None => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            ("ARENA_SEED", "7"),
            ("ENEMY_COUNT", " 9 "),
            ("LOG_FORMAT", "json"),
            ("ENEMY_BULLET_SPEED", "3.5"),
        ]))
        .unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.enemy_count, 9);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.enemy_bullet_speed, 3.5);
    }

    #[test]
    fn rejects_garbage_and_zero_rates() {
        let err = Config::from_lookup(lookup(&[("MAX_TICKS", "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("MAX_TICKS", _)));

        let err = Config::from_lookup(lookup(&[("ENEMY_FIRE_RATE_MS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("ENEMY_FIRE_RATE_MS", _)));

        let err = Config::from_lookup(lookup(&[("LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("LOG_FORMAT", _)));
    }

    #[test]
    fn rejects_non_finite_and_non_positive_floats() {
        let cases = [
            ("ENEMY_SPEED", "NaN"),
            ("ARENA_WIDTH", "inf"),
            ("ARENA_HEIGHT", "-640"),
            ("PLAYER_SPEED", "-inf"),
            ("PLAYER_BULLET_SPEED", "0"),
            ("ENEMY_BULLET_SPEED", "-0.5"),
        ];
        for (key, value) in cases {
            match Config::from_lookup(lookup(&[(key, value)])) {
                Err(ConfigError::Invalid(k, _)) => assert_eq!(k, key, "{}={}", key, value),
                other => panic!("{}={} accepted: {:?}", key, value, other),
            }
        }

        let config = Config::from_lookup(lookup(&[("ENEMY_SPEED", "0.25")])).unwrap();
        assert_eq!(config.enemy_speed, 0.25);
    }
}
