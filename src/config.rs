use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "Symptriage";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default listen address for the HTTP API.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Longest chat message accepted, in characters.
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 2_000;

pub const ENV_BIND_ADDR: &str = "SYMPTRIAGE_BIND";
pub const ENV_DB_PATH: &str = "SYMPTRIAGE_DB";
pub const ENV_MAX_MESSAGE_LEN: &str = "SYMPTRIAGE_MAX_MESSAGE_LEN";

/// Get the application data directory.
/// Platform data dir (e.g. ~/.local/share/symptriage), or ./symptriage when
/// the platform reports none.
pub fn app_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("symptriage")
}

/// Default location of the vitals database.
pub fn vitals_db_path() -> PathBuf {
    app_data_dir().join("vitals.db")
}

/// Log filter used when `RUST_LOG` is unset.
pub fn default_log_filter() -> &'static str {
    "symptriage_lib=info,symptriage=info,tower_http=info"
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub db_path: PathBuf,
    pub max_message_len: usize,
}

impl ServerConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build settings from any variable lookup; unset variables take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::InvalidValue {
                var: ENV_BIND_ADDR,
                value: bind_raw.clone(),
                reason: e.to_string(),
            }
        })?;

        let db_path = lookup(ENV_DB_PATH)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(vitals_db_path);

        let max_message_len = match lookup(ENV_MAX_MESSAGE_LEN) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                Ok(_) => {
                    return Err(ConfigError::InvalidValue {
                        var: ENV_MAX_MESSAGE_LEN,
                        value: raw,
                        reason: "must be greater than zero".into(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        var: ENV_MAX_MESSAGE_LEN,
                        value: raw,
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_MAX_MESSAGE_LEN,
        };

        Ok(Self {
            bind_addr,
            db_path,
            max_message_len,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn vitals_db_under_app_data() {
        let db = vitals_db_path();
        assert!(db.starts_with(app_data_dir()));
        assert!(db.ends_with("vitals.db"));
    }

    #[test]
    fn app_name_is_symptriage() {
        assert_eq!(APP_NAME, "Symptriage");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn defaults_when_env_empty() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.bind_addr, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(cfg.db_path, vitals_db_path());
        assert_eq!(cfg.max_message_len, 2_000);
    }

    #[test]
    fn overrides_from_env() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[
            (ENV_BIND_ADDR, "127.0.0.1:9100"),
            (ENV_DB_PATH, "/tmp/triage/vitals.db"),
            (ENV_MAX_MESSAGE_LEN, " 500 "),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr.port(), 9100);
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/triage/vitals.db"));
        assert_eq!(cfg.max_message_len, 500);
    }

    #[test]
    fn blank_db_path_uses_default() {
        let cfg = ServerConfig::from_lookup(lookup_from(&[(ENV_DB_PATH, "  ")])).unwrap();
        assert_eq!(cfg.db_path, vitals_db_path());
    }

    #[test]
    fn invalid_bind_addr_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[(ENV_BIND_ADDR, "localhost")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: ENV_BIND_ADDR, .. }));
    }

    #[test]
    fn zero_message_len_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[(ENV_MAX_MESSAGE_LEN, "0")]))
            .unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn non_numeric_message_len_rejected() {
        assert!(ServerConfig::from_lookup(lookup_from(&[(ENV_MAX_MESSAGE_LEN, "lots")])).is_err());
    }
}
