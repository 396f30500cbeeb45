use std::env;

/// Process configuration. Built once in `main` and handed to the router through `AppState`.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Upstox broker credentials. Only their presence is reported; they are never used.
    pub upstox_api_key: String,
    pub upstox_api_secret: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            upstox_api_key: String::new(),
            upstox_api_secret: String::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            upstox_api_key: env::var("UPSTOX_API_KEY").unwrap_or_default(),
            upstox_api_secret: env::var("UPSTOX_API_SECRET").unwrap_or_default(),
        }
    }

    pub fn upstox_configured(&self) -> bool {
        !self.upstox_api_key.is_empty() && !self.upstox_api_secret.is_empty()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
