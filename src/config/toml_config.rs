use crate::config::Transport;
use crate::utils::error::{MerakiError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional configuration file. Every table and key may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub meraki: Option<MerakiSection>,
    pub server: Option<ServerSection>,
    pub tools: Option<ToolsSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MerakiSection {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub max_retries: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub transport: Option<Transport>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub auth_token: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolsSection {
    pub profile: Option<String>,
    pub modules: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub read_only: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;
        let mut config: TomlConfig = toml::from_str(&processed).map_err(|e| MerakiError::Config {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.drop_unresolved_secrets();
        Ok(config)
    }

    /// Replaces `${VAR}` with the variable's value. Unknown variables are
    /// left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MerakiError::Config {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    // A secret still reading `${VAR}` means the variable was not set.
    fn drop_unresolved_secrets(&mut self) {
        let unresolved = |v: &Option<String>| v.as_deref().is_some_and(|s| s.starts_with("${"));
        if let Some(meraki) = self.meraki.as_mut() {
            if unresolved(&meraki.api_key) {
                tracing::warn!("⚠️ meraki.api_key references an unset environment variable");
                meraki.api_key = None;
            }
        }
        if let Some(server) = self.server.as_mut() {
            if unresolved(&server.auth_token) {
                tracing::warn!("⚠️ server.auth_token references an unset environment variable");
                server.auth_token = None;
            }
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(meraki) = &self.meraki {
            if let Some(url) = &meraki.base_url {
                validate_url("meraki.base_url", url)?;
            }
            if let Some(timeout) = meraki.timeout_seconds {
                validate_range("meraki.timeout_seconds", timeout, 1, 600)?;
            }
            if let Some(retries) = meraki.max_retries {
                validate_range("meraki.max_retries", retries, 0, 10)?;
            }
        }
        if let Some(tools) = &self.tools {
            for module in tools.modules.iter().flatten() {
                crate::utils::validation::validate_non_empty_string("tools.modules", module)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_file() {
        let config = TomlConfig::from_toml_str(
            r#"
[meraki]
base_url = "https://api.meraki.ca/api/v1"
max_retries = 4

[server]
transport = "http"
host = "127.0.0.1"

[tools]
profile = "MINIMAL"
modules = ["SDK_switch", "helpers"]
exclude = ["SDK_sm"]
"#,
        )
        .unwrap();

        let meraki = config.meraki.as_ref().unwrap();
        assert_eq!(meraki.base_url.as_deref(), Some("https://api.meraki.ca/api/v1"));
        assert_eq!(meraki.max_retries, Some(4));
        let server = config.server.as_ref().unwrap();
        assert_eq!(server.transport, Some(Transport::Http));
        assert_eq!(config.tools.as_ref().unwrap().modules.as_ref().unwrap().len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.meraki.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MERAKI_TOML_TEST_KEY", "secret-from-env");

        let config = TomlConfig::from_toml_str(
            r#"
[meraki]
api_key = "${MERAKI_TOML_TEST_KEY}"

[server]
auth_token = "${MERAKI_TOML_TEST_UNSET_TOKEN}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.meraki.unwrap().api_key.as_deref(),
            Some("secret-from-env")
        );
        assert!(config.server.unwrap().auth_token.is_none());

        std::env::remove_var("MERAKI_TOML_TEST_KEY");
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = TomlConfig::from_toml_str(
            r#"
[meraki]
base_url = "not a url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
        assert!(TomlConfig::from_toml_str("[meraki\nbroken").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[tools]\nprofile = \"WIRELESS\"\nread_only = true\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        let tools = config.tools.unwrap();
        assert_eq!(tools.profile.as_deref(), Some("WIRELESS"));
        assert_eq!(tools.read_only, Some(true));
    }
}
