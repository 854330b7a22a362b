pub mod audit;
pub mod clinic;
pub mod consultations;
pub mod lookup;
pub mod owners;
pub mod pets;
pub mod report;

pub use crate::domain::model::{Consultation, Owner, Pet, Registration, Severity};
pub use crate::domain::ports::{AuditSink, Prompt};
pub use crate::utils::error::Result;
pub use clinic::{Clinic, ClinicSettings, ConsultationForm, OwnerForm, PetForm};
