use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::error::{ClinicError, Result};

/// Position of an owner in the owner registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub(crate) usize);

/// Position of a pet in the pet registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PetId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConsultationId(pub(crate) usize);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl Owner {
    pub fn new(name: String, phone: String, address: String) -> Self {
        Self {
            name,
            phone,
            address,
        }
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Address: {}",
            self.name, self.phone, self.address
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u32,
    pub owner: OwnerId,
}

impl Pet {
    /// Builds a pet, rejecting negative ages or ages that do not fit the record.
    pub fn new(
        name: String,
        species: String,
        breed: String,
        age: i64,
        owner: OwnerId,
    ) -> Result<Self> {
        if age < 0 {
            return Err(ClinicError::validation("age", "age cannot be negative"));
        }
        let age = u32::try_from(age)
            .map_err(|_| ClinicError::validation("age", format!("age {} is too large", age)))?;

        Ok(Self {
            name,
            species,
            breed,
            age,
            owner,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Consultation {
    /// Free-form, usually `DD/MM/YYYY`.
    pub date: String,
    pub reason: String,
    pub diagnosis: String,
    pub pet: PetId,
}

/// Result of a registration call. A duplicate is not a failure: the caller
/// gets the identifier of the record that was already stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration<I> {
    Created(I),
    AlreadyRegistered(I),
}

impl<I: Copy> Registration<I> {
    pub fn id(&self) -> I {
        match self {
            Registration::Created(id) | Registration::AlreadyRegistered(id) => *id,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Registration::Created(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
