use db::DbConfig;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db: DbConfig,
}

impl ServerConfig {
    /// Reads the full configuration surface from the environment.
    /// Defaults: `HOST=0.0.0.0`, `PORT=3001`, store settings per
    /// [`DbConfig::from_env`].
    pub fn from_env() -> Self {
        let port = match std::env::var("PORT") {
            Ok(raw) => match raw.trim().parse() {
                Ok(port) => port,
                Err(err) => {
                    tracing::warn!(value = raw, error = %err, "Invalid PORT; using default 3001");
                    3001
                }
            },
            Err(_) => 3001,
        };

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            db: DbConfig::from_env(),
        }
    }
}
