use crate::core::SwapConfig;
use crate::utils::error::{Result, SwapError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub app: AppSection,
    pub data: DataSection,
    pub backend: Option<BackendSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSection {
    pub dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSection {
    pub api_delay_ms: Option<u64>,
    pub swap_delay_ms: Option<u64>,
    pub simulate_errors: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SwapError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SwapError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replace `${VAR_NAME}` placeholders with environment values. Unset
    /// variables are left as-is so validation can point at them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("app.name", &self.app.name)?;
        validation::validate_path("data.dir", &self.data.dir)?;
        validation::validate_range(
            "backend.api_delay_ms",
            self.api_delay_ms(),
            0,
            60_000,
        )?;
        validation::validate_range(
            "backend.swap_delay_ms",
            self.swap_delay_ms(),
            0,
            60_000,
        )?;
        Ok(())
    }

    pub fn api_delay_ms(&self) -> u64 {
        self.backend
            .as_ref()
            .and_then(|b| b.api_delay_ms)
            .unwrap_or(300)
    }

    pub fn swap_delay_ms(&self) -> u64 {
        self.backend
            .as_ref()
            .and_then(|b| b.swap_delay_ms)
            .unwrap_or(2000)
    }
}

impl SwapConfig for TomlConfig {
    fn data_dir(&self) -> &str {
        &self.data.dir
    }

    fn api_delay(&self) -> Duration {
        Duration::from_millis(self.api_delay_ms())
    }

    fn swap_delay(&self) -> Duration {
        Duration::from_millis(self.swap_delay_ms())
    }

    fn simulate_errors(&self) -> bool {
        self.backend
            .as_ref()
            .and_then(|b| b.simulate_errors)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
