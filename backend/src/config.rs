//! Process configuration loaded via OrthoConfig.
//!
//! Values come from `--flags` and `ROSTER_*` environment variables. Every
//! field is optional; accessors supply the defaults.

use std::fmt;
use std::net::{AddrParseError, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::server::ServerConfig;

const DEFAULT_DATABASE: &str = "roster";
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;
const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:9090";
const DEFAULT_GRPC_ADDR: &str = "0.0.0.0:9091";
const DEFAULT_POOL_SIZE: u32 = 10;

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {name} address {value:?}: {source}")]
    InvalidAddress {
        name: &'static str,
        value: String,
        source: AddrParseError,
    },
}

/// Store credentials and listener addresses.
#[derive(Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct RosterConfig {
    /// Database role. Left to libpq defaults when unset.
    pub user: Option<String>,
    /// Database password. Left to libpq defaults when unset.
    pub password: Option<String>,
    /// Database name, `roster` by default.
    pub database: Option<String>,
    /// Database host, `localhost` by default.
    pub host: Option<String>,
    /// Database port, 5432 by default.
    pub port: Option<u16>,
    /// HTTP listen address, `0.0.0.0:9090` by default.
    pub http_addr: Option<String>,
    /// gRPC listen address, `0.0.0.0:9091` by default.
    pub grpc_addr: Option<String>,
    /// Maximum pooled store connections, 10 by default.
    pub pool_size: Option<u32>,
    /// HTTP worker threads; actix picks one per core when unset.
    pub http_workers: Option<usize>,
}

impl fmt::Debug for RosterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RosterConfig")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("http_addr", &self.http_addr)
            .field("grpc_addr", &self.grpc_addr)
            .field("pool_size", &self.pool_size)
            .field("http_workers", &self.http_workers)
            .finish()
    }
}

/// Quote a libpq keyword value when it is empty or contains spaces,
/// quotes or backslashes.
fn quote_value(value: &str) -> String {
    let needs_quotes = value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || c == '\'' || c == '\\');
    if !needs_quotes {
        return value.to_owned();
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for c in value.chars() {
        if c == '\'' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('\'');
    quoted
}

fn parse_addr(name: &'static str, value: &str) -> Result<SocketAddr, ConfigError> {
    value.parse().map_err(|source| ConfigError::InvalidAddress {
        name,
        value: value.to_owned(),
        source,
    })
}

impl RosterConfig {
    /// Database name, `roster` by default.
    pub fn database(&self) -> &str {
        self.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    /// Database host, `localhost` by default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Database port, 5432 by default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Maximum pooled store connections, 10 by default.
    pub fn pool_size(&self) -> u32 {
        self.pool_size.unwrap_or(DEFAULT_POOL_SIZE)
    }

    /// libpq keyword/value connection string with TLS disabled.
    ///
    /// # Examples
    /// ```
    /// use roster::config::RosterConfig;
    ///
    /// let config = RosterConfig {
    ///     user: Some("coach".into()),
    ///     ..RosterConfig::default()
    /// };
    /// assert_eq!(
    ///     config.database_url(),
    ///     "host=localhost port=5432 user=coach dbname=roster sslmode=disable"
    /// );
    /// ```
    pub fn database_url(&self) -> String {
        let mut parts = vec![
            format!("host={}", quote_value(self.host())),
            format!("port={}", self.port()),
        ];
        if let Some(user) = &self.user {
            parts.push(format!("user={}", quote_value(user)));
        }
        if let Some(password) = &self.password {
            parts.push(format!("password={}", quote_value(password)));
        }
        parts.push(format!("dbname={}", quote_value(self.database())));
        parts.push("sslmode=disable".to_owned());
        parts.join(" ")
    }

    /// # Errors
    /// [`ConfigError::InvalidAddress`] when the value is not `ip:port`.
    pub fn http_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_addr("http", self.http_addr.as_deref().unwrap_or(DEFAULT_HTTP_ADDR))
    }

    /// # Errors
    /// [`ConfigError::InvalidAddress`] when the value is not `ip:port`.
    pub fn grpc_addr(&self) -> Result<SocketAddr, ConfigError> {
        parse_addr("grpc", self.grpc_addr.as_deref().unwrap_or(DEFAULT_GRPC_ADDR))
    }

    /// Listener settings for [`crate::server::serve`].
    ///
    /// # Errors
    /// [`ConfigError::InvalidAddress`] when either address is invalid.
    pub fn server_config(&self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig::new(self.http_addr()?, self.grpc_addr()?);
        Ok(match self.http_workers {
            Some(workers) => config.with_http_workers(workers),
            None => config,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for configuration parsing.

    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use super::*;

    const VARS: [&str; 9] = [
        "ROSTER_USER",
        "ROSTER_PASSWORD",
        "ROSTER_DATABASE",
        "ROSTER_HOST",
        "ROSTER_PORT",
        "ROSTER_HTTP_ADDR",
        "ROSTER_GRPC_ADDR",
        "ROSTER_POOL_SIZE",
        "ROSTER_HTTP_WORKERS",
    ];

    fn load_from_empty_args() -> RosterConfig {
        RosterConfig::load_from_iter([OsString::from("roster")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));
        let config = load_from_empty_args();

        assert_eq!(config.database(), "roster");
        assert_eq!(config.host(), "localhost");
        assert_eq!(config.port(), 5432);
        assert_eq!(config.pool_size(), 10);
        assert_eq!(config.http_addr(), Ok("0.0.0.0:9090".parse().expect("addr")));
        assert_eq!(config.grpc_addr(), Ok("0.0.0.0:9091".parse().expect("addr")));
        assert_eq!(
            config.database_url(),
            "host=localhost port=5432 dbname=roster sslmode=disable"
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ROSTER_USER", Some("coach".to_owned())),
            ("ROSTER_PASSWORD", Some("s3cret".to_owned())),
            ("ROSTER_DATABASE", Some("league".to_owned())),
            ("ROSTER_HOST", Some("db.internal".to_owned())),
            ("ROSTER_PORT", Some("6543".to_owned())),
            ("ROSTER_HTTP_ADDR", Some("127.0.0.1:8080".to_owned())),
            ("ROSTER_GRPC_ADDR", Some("127.0.0.1:8081".to_owned())),
            ("ROSTER_POOL_SIZE", Some("3".to_owned())),
            ("ROSTER_HTTP_WORKERS", Some("2".to_owned())),
        ]);
        let config = load_from_empty_args();

        assert_eq!(
            config.database_url(),
            "host=db.internal port=6543 user=coach password=s3cret dbname=league sslmode=disable"
        );
        assert_eq!(config.pool_size(), 3);
        let server = config.server_config().expect("valid addresses");
        assert_eq!(server.http_addr(), "127.0.0.1:8080".parse().expect("addr"));
        assert_eq!(server.grpc_addr(), "127.0.0.1:8081".parse().expect("addr"));
    }

    #[rstest]
    fn invalid_address_is_reported() {
        let config = RosterConfig {
            grpc_addr: Some(":9091".to_owned()),
            ..RosterConfig::default()
        };
        let err = config.server_config().expect_err("missing host");
        assert!(matches!(err, ConfigError::InvalidAddress { name: "grpc", .. }));
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("", "''")]
    #[case("two words", "'two words'")]
    #[case(r"it's\here", r"'it\'s\\here'")]
    fn values_are_quoted_for_libpq(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(quote_value(raw), expected);
    }

    #[rstest]
    fn debug_output_redacts_the_password() {
        let config = RosterConfig {
            password: Some("s3cret".to_owned()),
            ..RosterConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }
}
