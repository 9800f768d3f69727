//! Server configuration from environment variables.
//!
//! | Variable           | Default                                        |
//! |--------------------|------------------------------------------------|
//! | `HOST`             | `0.0.0.0`                                      |
//! | `PORT`             | `8080`                                         |
//! | `ROUND_NAMING`     | `extended` (`simple` drops "Oitavas de Final") |
//! | `SPORTS`           | `futsal,basquete,volei,handebol,tenis-de-mesa` |
//! | `LAYOUT_DIRECTION` | `lr` (`tb` for top-to-bottom)                  |

use crate::logic::{Direction, LayoutOptions, RoundNaming};

/// Errors reading the configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    InvalidPort(String),
    UnknownRoundNaming(String),
    InvalidDirection(String),
    /// `SPORTS` was set but lists nothing.
    NoSports,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort(p) => write!(f, "PORT must be a number 0-65535, got '{}'", p),
            ConfigError::UnknownRoundNaming(n) => {
                write!(f, "ROUND_NAMING must be 'simple' or 'extended', got '{}'", n)
            }
            ConfigError::InvalidDirection(d) => {
                write!(f, "LAYOUT_DIRECTION must be 'lr' or 'tb', got '{}'", d)
            }
            ConfigError::NoSports => write!(f, "SPORTS must list at least one sport"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Everything the web service needs; shared read-only by all workers.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub naming: RoundNaming,
    /// Sport labels a bracket may be requested for.
    pub sports: Vec<String>,
    pub layout: LayoutOptions,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_sports() -> Vec<String> {
    ["futsal", "basquete", "volei", "handebol", "tenis-de-mesa"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            naming: RoundNaming::default(),
            sports: default_sports(),
            layout: LayoutOptions::default(),
        }
    }
}

impl AppConfig {
    /// Read from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through `lookup`; unset variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(naming) = lookup("ROUND_NAMING") {
            config.naming = match naming.trim().to_ascii_lowercase().as_str() {
                "simple" => RoundNaming::simple(),
                "extended" => RoundNaming::extended(),
                _ => return Err(ConfigError::UnknownRoundNaming(naming)),
            };
        }
        if let Some(sports) = lookup("SPORTS") {
            config.sports = sports
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if config.sports.is_empty() {
                return Err(ConfigError::NoSports);
            }
        }
        if let Some(direction) = lookup("LAYOUT_DIRECTION") {
            config.layout.direction = direction
                .parse::<Direction>()
                .map_err(|_| ConfigError::InvalidDirection(direction.clone()))?;
        }

        Ok(config)
    }

    pub fn is_known_sport(&self, sport: &str) -> bool {
        self.sports.iter().any(|s| s.eq_ignore_ascii_case(sport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 8080);
        assert!(config.is_known_sport("Futsal"));
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "3000"),
            ("ROUND_NAMING", "simple"),
            ("SPORTS", "futsal, xadrez ,"),
            ("LAYOUT_DIRECTION", "tb"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.naming, RoundNaming::simple());
        assert_eq!(config.sports, vec!["futsal", "xadrez"]);
        assert_eq!(config.layout.direction, Direction::TopToBottom);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("PORT", "http")])),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            AppConfig::from_lookup(lookup(&[("ROUND_NAMING", "fancy")])),
            Err(ConfigError::UnknownRoundNaming(_))
        ));
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("LAYOUT_DIRECTION", "diagonal")])),
            Err(ConfigError::InvalidDirection("diagonal".to_string()))
        );
        assert_eq!(
            AppConfig::from_lookup(lookup(&[("SPORTS", " , ")])),
            Err(ConfigError::NoSports)
        );
    }
}
