pub mod profiles;
pub mod toml_config;

use crate::adapters::DEFAULT_BASE_URL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8100;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;
pub const DEFAULT_MAX_RETRIES: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    #[default]
    Stdio,
    Http,
}

#[derive(Clone, Serialize, Deserialize, Parser)]
#[command(name = "meraki-mcp")]
#[command(about = "MCP server exposing the Cisco Meraki Dashboard API as tools")]
pub struct ServerConfig {
    #[arg(long, env = "MERAKI_API_KEY", hide_env_values = true)]
    #[serde(skip_serializing)]
    pub api_key: Option<String>,

    #[arg(long, env = "MERAKI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "MCP_PROFILE", default_value = profiles::DEFAULT_PROFILE)]
    pub profile: String,

    /// Modules or module groups to load instead of the profile's.
    #[arg(long, env = "MCP_MODULES", value_delimiter = ',')]
    pub modules: Vec<String>,

    #[arg(long, env = "MCP_EXCLUDE", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Only register GET tools.
    #[arg(long, env = "MCP_READ_ONLY")]
    pub read_only: bool,

    #[arg(long, env = "MCP_TRANSPORT", value_enum, default_value_t = Transport::Stdio)]
    pub transport: Transport,

    #[arg(long, env = "SERVER_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Bearer token required by the HTTP transport.
    #[arg(long, env = "MCP_AUTH_TOKEN", hide_env_values = true)]
    #[serde(skip_serializing)]
    pub auth_token: Option<String>,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
    pub max_retries: u32,

    /// TOML file with [meraki], [server] and [tools] tables.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl ServerConfig {
    /// Loads `--config` if given and overlays it.
    pub fn load_file(mut self) -> Result<Self> {
        if let Some(path) = self.config.clone() {
            let file = TomlConfig::from_file(&path)?;
            file.validate()?;
            tracing::info!("📄 Loaded configuration from {}", path.display());
            self.apply_toml(&file);
        }
        Ok(self)
    }

    /// Values from the file fill settings still at their defaults; anything
    /// given on the command line or through the environment is kept.
    pub fn apply_toml(&mut self, file: &TomlConfig) {
        if let Some(meraki) = &file.meraki {
            if self.api_key.is_none() {
                self.api_key = meraki.api_key.clone();
            }
            overlay(&mut self.base_url, DEFAULT_BASE_URL.to_string(), &meraki.base_url);
            overlay(&mut self.timeout_seconds, DEFAULT_TIMEOUT_SECONDS, &meraki.timeout_seconds);
            overlay(&mut self.max_retries, DEFAULT_MAX_RETRIES, &meraki.max_retries);
        }
        if let Some(server) = &file.server {
            overlay(&mut self.transport, Transport::Stdio, &server.transport);
            overlay(&mut self.host, DEFAULT_HOST.to_string(), &server.host);
            overlay(&mut self.port, DEFAULT_PORT, &server.port);
            if self.auth_token.is_none() {
                self.auth_token = server.auth_token.clone();
            }
        }
        if let Some(tools) = &file.tools {
            overlay(&mut self.profile, profiles::DEFAULT_PROFILE.to_string(), &tools.profile);
            if self.modules.is_empty() {
                self.modules = tools.modules.clone().unwrap_or_default();
            }
            if self.exclude.is_empty() {
                self.exclude = tools.exclude.clone().unwrap_or_default();
            }
            if !self.read_only {
                self.read_only = tools.read_only.unwrap_or(false);
            }
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Secrets are shown only as present or absent.
impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |secret: &Option<String>| secret.as_ref().map(|_| "<redacted>");
        f.debug_struct("ServerConfig")
            .field("api_key", &redact(&self.api_key))
            .field("base_url", &self.base_url)
            .field("profile", &self.profile)
            .field("modules", &self.modules)
            .field("exclude", &self.exclude)
            .field("read_only", &self.read_only)
            .field("transport", &self.transport)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("auth_token", &redact(&self.auth_token))
            .field("timeout_seconds", &self.timeout_seconds)
            .field("max_retries", &self.max_retries)
            .field("config", &self.config)
            .field("verbose", &self.verbose)
            .field("log_json", &self.log_json)
            .finish()
    }
}

fn overlay<T: PartialEq + Clone>(current: &mut T, default: T, from_file: &Option<T>) {
    if let Some(value) = from_file {
        if *current == default {
            *current = value.clone();
        }
    }
}

impl ConfigProvider for ServerConfig {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn max_retries(&self) -> u32 {
        self.max_retries
    }

    fn profile(&self) -> &str {
        &self.profile
    }

    fn custom_modules(&self) -> &[String] {
        &self.modules
    }

    fn excluded_modules(&self) -> &[String] {
        &self.exclude
    }

    fn read_only(&self) -> bool {
        self.read_only
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 600)?;
        validate_range("max_retries", self.max_retries, 0, 10)?;
        validate_non_empty_string("profile", &self.profile)?;
        if self.transport == Transport::Http {
            validate_non_empty_string("host", &self.host)?;
            validate_positive_number("port", u64::from(self.port), 1)?;
        }
        if profiles::PROFILES
            .iter()
            .all(|p| !p.key.eq_ignore_ascii_case(&self.profile))
        {
            tracing::warn!("⚠️ Unknown profile '{}', using FULL", self.profile);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::MerakiError;

    fn parse(args: &[&str]) -> ServerConfig {
        let mut argv = vec!["meraki-mcp"];
        argv.extend_from_slice(args);
        ServerConfig::parse_from(argv)
    }

    #[test]
    fn test_flags_are_parsed() {
        let config = parse(&[
            "--api-key",
            "abc",
            "--profile",
            "WIRELESS",
            "--modules",
            "SDK_switch,helpers",
            "--read-only",
            "--transport",
            "http",
            "--port",
            "9000",
        ]);
        assert_eq!(config.api_key(), Some("abc"));
        assert_eq!(config.custom_modules(), ["SDK_switch", "helpers"]);
        assert!(config.read_only());
        assert_eq!(config.transport, Transport::Http);
        assert_eq!(config.bind_address(), format!("{}:9000", config.host));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let config = parse(&["--base-url", "ftp://example.com", "--api-key", "k"]);
        assert!(config.validate().is_err());

        let config = parse(&["--timeout-seconds", "0", "--api-key", "k"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_file_rejects_invalid_values() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[meraki]\ntimeout_seconds = 0").unwrap();
        let path = file.path().to_string_lossy().to_string();

        let err = parse(&["--api-key", "k", "--config", &path])
            .load_file()
            .unwrap_err();
        assert!(matches!(
            err,
            MerakiError::InvalidConfigValue { ref field, .. } if field == "meraki.timeout_seconds"
        ));
    }

    #[test]
    fn test_debug_output_redacts_secrets() {
        let config = parse(&["--api-key", "SECRET-KEY-123", "--auth-token", "TOK-456"]);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("SECRET-KEY-123"));
        assert!(!debug.contains("TOK-456"));
        assert!(debug.contains("api_key: Some(\"<redacted>\")"));
        assert!(debug.contains("auth_token: Some(\"<redacted>\")"));
    }

    #[test]
    fn test_toml_overlay_keeps_explicit_flags() {
        let file = TomlConfig::from_toml_str(
            r#"
[meraki]
api_key = "from-file"
timeout_seconds = 30

[server]
transport = "http"
port = 8200

[tools]
profile = "NETWORK"
read_only = true
"#,
        )
        .unwrap();

        let mut config = parse(&["--api-key", "from-cli", "--port", "8300"]);
        config.apply_toml(&file);
        assert_eq!(config.api_key(), Some("from-cli"));
        assert_eq!(config.timeout_seconds, 30);
        assert_eq!(config.transport, Transport::Http);
        assert_eq!(config.port, 8300);
        assert_eq!(config.profile, "NETWORK");
        assert!(config.read_only);
    }
}
