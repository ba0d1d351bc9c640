use std::env;

/// Runtime settings, all overridable from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model_path: String,
    pub workers: usize,
}

impl ServerConfig {
    /// Read settings from the environment. Unset or unparsable values fall
    /// back to the defaults, so this never fails.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);
        let model_path = env::var("MODEL_PATH").unwrap_or_else(|_| "model.json".to_string());
        let workers = env::var("WORKERS")
            .ok()
            .and_then(|w| w.parse().ok())
            .unwrap_or_else(num_cpus::get);

        ServerConfig {
            host,
            port,
            model_path,
            workers,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
