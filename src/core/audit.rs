use crate::domain::model::Severity;
use crate::domain::ports::AuditSink;

/// Sends an event to the audit sink and mirrors it to tracing.
pub fn emit(sink: &dyn AuditSink, severity: Severity, message: &str) {
    match severity {
        Severity::Info => tracing::info!("{}", message),
        Severity::Warning => tracing::warn!("{}", message),
        Severity::Error | Severity::Critical => tracing::error!("[{}] {}", severity, message),
    }
    sink.record(severity, message);
}
