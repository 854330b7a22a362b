pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::{AuditFormat, ConsoleIo, FileAuditLog, MemoryAudit, ScriptedPrompt, TracingAudit};
pub use crate::app::{run_menu, MenuAction};
pub use crate::config::ClinicConfig;
pub use crate::core::{Clinic, ClinicSettings, OwnerForm, PetForm};
pub use crate::domain::model::{Owner, OwnerId, Pet, PetId, Registration, Severity};
pub use crate::utils::error::{ClinicError, Result};
