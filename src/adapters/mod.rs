// Adapters layer: concrete implementations of the domain ports.

pub mod audit;
pub mod console;
pub mod scripted;

pub use audit::{AuditFormat, FileAuditLog, MemoryAudit, TracingAudit};
pub use console::ConsoleIo;
pub use scripted::ScriptedPrompt;
