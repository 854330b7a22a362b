use crate::domain::model::Severity;
use crate::utils::error::Result;

/// Line-based question/answer channel to whoever is operating the clinic.
pub trait Prompt {
    /// Shows `question` and returns the raw answer line.
    /// Fails with `ClinicError::InputClosed` once no more input is available.
    fn ask(&mut self, question: &str) -> Result<String>;

    fn say(&mut self, message: &str);
}

/// Append-only record of significant events.
pub trait AuditSink {
    fn record(&self, severity: Severity, message: &str);
}

impl<T: AuditSink + ?Sized> AuditSink for Box<T> {
    fn record(&self, severity: Severity, message: &str) {
        (**self).record(severity, message)
    }
}

impl<T: AuditSink + ?Sized> AuditSink for std::sync::Arc<T> {
    fn record(&self, severity: Severity, message: &str) {
        (**self).record(severity, message)
    }
}
