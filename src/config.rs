//! Runtime settings from environment variables (with `.env` support in the binary).

/// Settings for the server process. Every field has a default so the service
/// runs with no environment at all.
#[derive(Clone, Debug)]
pub struct Settings {
    /// SQLite URL, e.g. `sqlite://cupcakes.db`. In-memory: `sqlite::memory:`.
    pub database_url: String,
    /// Listen address for the HTTP server.
    pub bind_addr: String,
    /// Connection pool size.
    pub max_connections: u32,
}

impl Settings {
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://cupcakes.db".into());
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".into());
        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        Settings {
            database_url,
            bind_addr,
            max_connections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_env() {
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("MAX_CONNECTIONS");
        let s = Settings::from_env();
        assert_eq!(s.database_url, "sqlite://cupcakes.db");
        assert_eq!(s.bind_addr, "127.0.0.1:3000");
        assert_eq!(s.max_connections, 5);
    }
}
