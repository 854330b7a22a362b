use std::fmt;

use crate::core::owners::OwnerRegistry;
use crate::domain::model::{Consultation, Pet};

pub const PET_SEPARATOR: &str = "------------------------------";
pub const CONSULTATION_SEPARATOR: &str = "--------------------";

/// A pet joined with the owner details shown next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetCard {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: u32,
    pub owner_name: String,
    pub owner_phone: String,
}

impl PetCard {
    pub fn build(pet: &Pet, owners: &OwnerRegistry) -> Self {
        let (owner_name, owner_phone) = owners
            .get(pet.owner)
            .map(|owner| (owner.name.clone(), owner.phone.clone()))
            .unwrap_or_default();

        Self {
            name: pet.name.clone(),
            species: pet.species.clone(),
            breed: pet.breed.clone(),
            age: pet.age,
            owner_name,
            owner_phone,
        }
    }
}

impl fmt::Display for PetCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Name: {}, Species: {}, Breed: {}, Age: {} years",
            self.name, self.species, self.breed, self.age
        )?;
        write!(f, "  Owner: {} (Phone: {})", self.owner_name, self.owner_phone)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationCard {
    pub date: String,
    pub pet_name: String,
    pub owner_name: String,
    pub reason: String,
    pub diagnosis: String,
}

impl ConsultationCard {
    pub fn build(consultation: &Consultation, pet: &PetCard) -> Self {
        Self {
            date: consultation.date.clone(),
            pet_name: pet.name.clone(),
            owner_name: pet.owner_name.clone(),
            reason: consultation.reason.clone(),
            diagnosis: consultation.diagnosis.clone(),
        }
    }
}

impl fmt::Display for ConsultationCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date: {}", self.date)?;
        writeln!(f, "  Pet: {} (Owner: {})", self.pet_name, self.owner_name)?;
        writeln!(f, "  Reason: {}", self.reason)?;
        write!(f, "  Diagnosis: {}", self.diagnosis)
    }
}

/// A pet and its visits, oldest first. An empty history is a normal result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryReport {
    pub pet: PetCard,
    pub entries: Vec<ConsultationCard>,
}

impl HistoryReport {
    pub fn header(&self) -> String {
        format!(
            "--- History of '{}' (Owner: {}) ---",
            self.pet.name, self.pet.owner_name
        )
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PetId;

    #[test]
    fn test_pet_card_display() {
        let mut owners = OwnerRegistry::new();
        let alice = owners
            .register("Alice".into(), "555-1111".into(), "Main St".into())
            .id();
        let pet = Pet::new("Rex".into(), "Dog".into(), "Labrador".into(), 3, alice).unwrap();

        let card = PetCard::build(&pet, &owners);
        assert_eq!(
            card.to_string(),
            "Name: Rex, Species: Dog, Breed: Labrador, Age: 3 years\n  Owner: Alice (Phone: 555-1111)"
        );

        let consultation = Consultation {
            date: "01/01/2024".into(),
            reason: "Checkup".into(),
            diagnosis: "Healthy".into(),
            pet: PetId(0),
        };
        let entry = ConsultationCard::build(&consultation, &card);
        assert!(entry.to_string().starts_with("Date: 01/01/2024\n  Pet: Rex (Owner: Alice)"));
    }
}
