use crate::domain::model::{Consultation, ConsultationId, PetId};

#[derive(Debug, Default, Clone)]
pub struct ConsultationLog {
    consultations: Vec<Consultation>,
}

impl ConsultationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a visit. Visits are never deduplicated.
    pub fn register(
        &mut self,
        date: String,
        reason: String,
        diagnosis: String,
        pet: PetId,
    ) -> ConsultationId {
        let id = ConsultationId(self.consultations.len());
        self.consultations.push(Consultation {
            date,
            reason,
            diagnosis,
            pet,
        });
        id
    }

    /// Visits for one pet, oldest first.
    pub fn history_for(&self, pet: PetId) -> Vec<&Consultation> {
        self.consultations
            .iter()
            .filter(|consultation| consultation.pet == pet)
            .collect()
    }

    pub fn get(&self, id: ConsultationId) -> Option<&Consultation> {
        self.consultations.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.consultations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.consultations.is_empty()
    }
}
