use tracing::{debug, info};

/// Port the backend binds when nothing is configured.
pub const DEFAULT_API_PORT: u16 = 8000;

/// Application configuration.
///
/// The accounting API address is not discovered at runtime: the port is read
/// from the environment once at startup and handed to whoever needs it. In
/// debug builds a `.env` file is loaded first so the port can be overridden
/// per checkout.
#[derive(Clone, Debug)]
pub struct Config {
    /// Port the accounting API listens on (always on localhost).
    pub api_port: u16,
}

impl Config {
    /// Load configuration from the environment.
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: dev mode - loaded .env file");
            }
        }

        Self::from_env()
    }

    fn from_env() -> Self {
        let api_port = std::env::var("LEDGERDESK_API_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_API_PORT);

        debug!("Config: accounting API on port {}", api_port);

        Self { api_port }
    }

    /// Base address every API request is built from.
    pub fn api_base_url(&self) -> String {
        format!("http://localhost:{}/api/v0", self.api_port)
    }
}
