use crate::adapters::AuditFormat;
use crate::core::ClinicSettings;
use crate::utils::error::{ClinicError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_AUDIT_PATH: &str = "clinica_veterinaria.log";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    pub clinic: ClinicSection,
    pub audit: AuditConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicSection {
    pub name: String,
}

impl Default for ClinicSection {
    fn default() -> Self {
        Self {
            name: ClinicSettings::default().name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub enabled: bool,
    pub path: String,
    pub format: AuditFormat,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: DEFAULT_AUDIT_PATH.to_string(),
            format: AuditFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Title-case names, species, breeds and addresses.
    pub normalize_case: bool,
    pub max_selection_attempts: u32,
}

impl Default for InputConfig {
    fn default() -> Self {
        let settings = ClinicSettings::default();
        Self {
            normalize_case: settings.normalize_case,
            max_selection_attempts: settings.max_selection_attempts,
        }
    }
}

impl ClinicConfig {
    /// Loads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClinicError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn settings(&self) -> ClinicSettings {
        ClinicSettings {
            name: self.clinic.name.trim().to_string(),
            normalize_case: self.input.normalize_case,
            max_selection_attempts: self.input.max_selection_attempts,
        }
    }
}

impl Validate for ClinicConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("clinic.name", &self.clinic.name)?;

        if self.audit.enabled {
            crate::utils::validation::validate_path("audit.path", &self.audit.path)?;
        }

        crate::utils::validation::validate_positive_number(
            "input.max_selection_attempts",
            self.input.max_selection_attempts,
            1,
        )?;

        Ok(())
    }
}
