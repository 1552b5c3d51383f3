use std::path::Path;
use crate::errors::ReportDeskError;
use super::types::ReportDeskConfig;
use super::security::validate_security_patterns;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<ReportDeskConfig, ReportDeskError> {
    if !path.exists() {
        return Err(ReportDeskError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(ReportDeskError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

pub fn parse_config_str(content: &str) -> Result<ReportDeskConfig, ReportDeskError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    if yaml.is_null() {
        return Ok(ReportDeskConfig::default());
    }

    validate_security_patterns(&yaml)?;
    validate_schema(&yaml)?;

    let config: ReportDeskConfig = serde_yaml::from_value(yaml)?;
    validate_semantics(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), ReportDeskError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| ReportDeskError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| ReportDeskError::Config(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(&json_value) {
        // Advisory only; the typed parse below is the hard check
        for e in errors {
            warn!(validation_error = %format!("{} at {}", e, e.instance_path), "Config schema warning");
        }
    }

    Ok(())
}

fn validate_semantics(config: &ReportDeskConfig) -> Result<(), ReportDeskError> {
    if let Some(server) = &config.server {
        if let Some(base_url) = &server.base_url {
            let url = reqwest::Url::parse(base_url)
                .map_err(|e| ReportDeskError::Config(format!("Invalid server.base_url '{}': {}", base_url, e)))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ReportDeskError::Config(format!(
                    "server.base_url must use http or https, got '{}'",
                    url.scheme()
                )));
            }
        }
        if server.timeout_secs == Some(0) {
            return Err(ReportDeskError::Config("server.timeout_secs must be at least 1".into()));
        }
    }

    if let Some(model) = config.upload.as_ref().and_then(|u| u.ai_model.as_ref()) {
        if model.trim().is_empty() {
            warn!("upload.ai_model is empty, the server default will be used");
        }
    }

    Ok(())
}
