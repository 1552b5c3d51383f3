use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
pub const SERVER_ENV_VAR: &str = "REPORTDESK_SERVER";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReportDeskConfig {
    pub server: Option<ServerConfig>,
    pub upload: Option<UploadConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct UploadConfig {
    pub ai_model: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct OutputConfig {
    pub directory: Option<String>,
}

/// Effective settings after merging flags, environment and the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub ai_model: Option<String>,
    pub export_dir: PathBuf,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            ai_model: None,
            export_dir: PathBuf::from("."),
        }
    }
}

impl ClientSettings {
    /// Resolve settings with precedence: explicit flag, environment, file, default.
    pub fn resolve(
        server_flag: Option<&str>,
        server_env: Option<&str>,
        file: Option<&ReportDeskConfig>,
    ) -> Self {
        let server = file.and_then(|c| c.server.as_ref());

        let base_url = server_flag
            .or(server_env)
            .map(str::to_string)
            .or_else(|| server.and_then(|s| s.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs = server
            .and_then(|s| s.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let ai_model = file.and_then(|c| c.upload.as_ref()?.ai_model.clone());

        let export_dir = file
            .and_then(|c| c.output.as_ref()?.directory.clone())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
            ai_model,
            export_dir,
        }
    }
}
