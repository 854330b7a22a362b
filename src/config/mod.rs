pub mod toml_config;

pub use toml_config::ClinicConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "vet-clinic")]
#[command(about = "Interactive records for a veterinary clinic: owners, pets and consultations")]
pub struct CliConfig {
    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Audit log path, overrides the configuration file
    #[arg(long)]
    pub audit_log: Option<String>,

    #[arg(long, help = "Disable the audit log file")]
    pub no_audit: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the configuration file (or defaults) and applies the command-line overrides.
    pub fn resolve(&self) -> crate::Result<ClinicConfig> {
        let mut config = match &self.config {
            Some(path) => ClinicConfig::from_file(path)?,
            None => ClinicConfig::default(),
        };

        if let Some(path) = &self.audit_log {
            config.audit.path = path.clone();
            config.audit.enabled = true;
        }
        if self.no_audit {
            config.audit.enabled = false;
        }
        Ok(config)
    }
}
