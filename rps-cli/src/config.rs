use rps_core::ClientConfig;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub client: ClientConfig,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rps"),
            client: ClientConfig::from_env(),
        }
    }
}

impl CliConfig {
    /// Defaults overridden by whatever was given on the command line
    pub fn with_overrides(data_dir: Option<PathBuf>, server: Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(data_dir) = data_dir {
            config.data_dir = data_dir;
        }
        if let Some(server) = server {
            config.client.base_server_url = server;
        }
        config
    }
}
