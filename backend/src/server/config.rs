//! Application settings and the HTTP server configuration built from them.

use std::net::SocketAddr;

use blog_backend::outbound::persistence::DbPool;
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Settings read from `BLOG_*` environment variables and CLI flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOG")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Without it posts live in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub max_connections: Option<u32>,
    /// Leave the schema alone at startup.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
}

impl AppSettings {
    /// The configured listen address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err| {
            std::io::Error::other(format!("invalid bind address {raw:?}: {err}"))
        })
    }

    /// The configured pool size, falling back to ten.
    pub fn max_connections(&self) -> u32 {
        self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Serve on `bind_addr` from the in-memory store until a pool is set.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the Diesel adapters.
    ///
    /// Without one the server keeps posts in process memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "BLOG_BIND_ADDR",
        "BLOG_DATABASE_URL",
        "BLOG_MAX_CONNECTIONS",
        "BLOG_SKIP_MIGRATIONS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("blog-backend")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("default address parses"),
            SocketAddr::from(([0, 0, 0, 0], 8080))
        );
        assert!(settings.database_url.is_none());
        assert_eq!(settings.max_connections(), 10);
        assert!(!settings.skip_migrations);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("BLOG_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "BLOG_DATABASE_URL",
                Some("postgres://blog@localhost/blog".to_owned()),
            ),
            ("BLOG_MAX_CONNECTIONS", Some("4".to_owned())),
            ("BLOG_SKIP_MIGRATIONS", Some("true".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(
            settings.bind_addr().expect("address parses"),
            SocketAddr::from(([127, 0, 0, 1], 9000))
        );
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://blog@localhost/blog")
        );
        assert_eq!(settings.max_connections(), 4);
        assert!(settings.skip_migrations);
    }

    #[rstest]
    fn malformed_bind_address_is_an_error() {
        let _guard = lock_env([("BLOG_BIND_ADDR", Some("not-an-address".to_owned()))]);

        let settings = load_from_empty_args();

        assert!(settings.bind_addr().is_err());
    }
}
