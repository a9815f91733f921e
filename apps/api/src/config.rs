use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Runtime configuration read from the environment
///
/// | Variable | Default |
/// |---|---|
/// | `SCOREBOARD_HOST` | `0.0.0.0` |
/// | `SCOREBOARD_PORT` | `3000` |
/// | `RUST_LOG` | `info` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from process environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from any key lookup, falling back to defaults
    /// for missing or unparseable values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("SCOREBOARD_HOST") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "SCOREBOARD_HOST is not an IP address, using default");
                defaults.host
            }),
            None => defaults.host,
        };

        let port = match lookup("SCOREBOARD_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "SCOREBOARD_PORT is not a port number, using default");
                defaults.port
            }),
            None => defaults.port,
        };

        let log_level = lookup("RUST_LOG").unwrap_or(defaults.log_level);

        Self {
            host,
            port,
            log_level,
        }
    }

    /// Socket address to bind the HTTP listener on
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[]));

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn reads_all_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SCOREBOARD_HOST", "127.0.0.1"),
            ("SCOREBOARD_PORT", "8080"),
            ("RUST_LOG", "debug"),
        ]));

        assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SCOREBOARD_HOST", "not-an-ip"),
            ("SCOREBOARD_PORT", "99999"),
        ]));

        assert_eq!(config.host, AppConfig::default().host);
        assert_eq!(config.port, 3000);
    }
}
