use crate::core::audit;
use crate::core::consultations::ConsultationLog;
use crate::core::lookup::PetSelector;
use crate::core::owners::OwnerRegistry;
use crate::core::pets::PetRegistry;
use crate::core::report::{ConsultationCard, HistoryReport, PetCard};
use crate::domain::model::{ConsultationId, Owner, OwnerId, Pet, PetId, Registration, Severity};
use crate::domain::ports::{AuditSink, Prompt};
use crate::utils::error::{ClinicError, Result};
use crate::utils::validation::{parse_age, title_case};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClinicSettings {
    pub name: String,
    pub normalize_case: bool,
    pub max_selection_attempts: u32,
}

impl Default for ClinicSettings {
    fn default() -> Self {
        Self {
            name: "Amigos Peludos".to_string(),
            normalize_case: true,
            max_selection_attempts: 5,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct OwnerForm {
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// Raw answers for a pet registration. `age` is validated by the clinic.
#[derive(Debug, Clone, Default)]
pub struct PetForm {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub owner_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConsultationForm {
    pub date: String,
    pub reason: String,
    pub diagnosis: String,
}

/// Where a pet registration found its owner.
enum OwnerSlot {
    Existing(OwnerId),
    Pending(OwnerForm),
}

/// Application state: the three registries plus the audit sink.
pub struct Clinic<A: AuditSink> {
    owners: OwnerRegistry,
    pets: PetRegistry,
    consultations: ConsultationLog,
    audit: A,
    settings: ClinicSettings,
}

impl<A: AuditSink> Clinic<A> {
    pub fn new(audit: A) -> Self {
        Self::with_settings(audit, ClinicSettings::default())
    }

    pub fn with_settings(audit: A, settings: ClinicSettings) -> Self {
        Self {
            owners: OwnerRegistry::new(),
            pets: PetRegistry::new(),
            consultations: ConsultationLog::new(),
            audit,
            settings,
        }
    }

    pub fn settings(&self) -> &ClinicSettings {
        &self.settings
    }

    pub fn owners(&self) -> &OwnerRegistry {
        &self.owners
    }

    pub fn pets(&self) -> &PetRegistry {
        &self.pets
    }

    pub fn consultations(&self) -> &ConsultationLog {
        &self.consultations
    }

    pub fn audit_sink(&self) -> &A {
        &self.audit
    }

    pub fn owner(&self, id: OwnerId) -> Option<&Owner> {
        self.owners.get(id)
    }

    pub fn pet(&self, id: PetId) -> Option<&Pet> {
        self.pets.get(id)
    }

    pub fn record(&self, severity: Severity, message: &str) {
        audit::emit(&self.audit, severity, message);
    }

    pub fn register_owner(&mut self, form: OwnerForm) -> Registration<OwnerId> {
        let name = self.clean_title(&form.name);
        let phone = form.phone.trim().to_string();
        let address = self.clean_title(&form.address);

        let registration = self.owners.register(name.clone(), phone.clone(), address);
        match registration {
            Registration::Created(_) => {
                self.record(Severity::Info, &format!("Owner registered: {}", name))
            }
            Registration::AlreadyRegistered(_) => self.record(
                Severity::Info,
                &format!("Attempt to register existing owner: {} ({})", name, phone),
            ),
        }
        registration
    }

    /// Registers a pet. When the owner is unknown, the owner's phone and
    /// address are asked through `prompt`; the new owner is stored together
    /// with the pet, so a failed call leaves both registries untouched.
    pub fn register_pet(
        &mut self,
        form: PetForm,
        prompt: &mut dyn Prompt,
    ) -> Result<Registration<PetId>> {
        let result = self.try_register_pet(form, prompt);
        if let Err(err) = &result {
            self.record_failure("registering pet", err);
        }
        result
    }

    fn try_register_pet(
        &mut self,
        form: PetForm,
        prompt: &mut dyn Prompt,
    ) -> Result<Registration<PetId>> {
        let name = self.clean_title(&form.name);
        let species = self.clean_title(&form.species);
        let breed = self.clean_title(&form.breed);
        let age = parse_age(&form.age)?;
        let owner_name = self.clean_title(&form.owner_name);

        let slot = match self.owners.find_by_name(&owner_name) {
            Some(id) => OwnerSlot::Existing(id),
            None => {
                prompt.say(&format!(
                    "Owner '{}' is not registered. Registering now.",
                    owner_name
                ));
                self.record(
                    Severity::Warning,
                    &format!("Owner not found while registering pet, registering owner: {}", owner_name),
                );
                let phone = prompt.ask("Owner phone: ")?;
                let address = prompt.ask("Owner address: ")?;
                OwnerSlot::Pending(OwnerForm {
                    name: owner_name.clone(),
                    phone,
                    address,
                })
            }
        };

        if let OwnerSlot::Existing(owner) = &slot {
            if let Some(existing) = self.pets.find_for_owner(&name, *owner) {
                self.record(
                    Severity::Info,
                    &format!("Attempt to register existing pet: {} (Owner: {})", name, owner_name),
                );
                return Ok(Registration::AlreadyRegistered(existing));
            }
        }

        let owner = match slot {
            OwnerSlot::Existing(id) => id,
            OwnerSlot::Pending(owner_form) => self.register_owner(owner_form).id(),
        };

        let registration = self
            .pets
            .register(name.clone(), species, breed, i64::from(age), owner)?;
        let owner_label = self
            .owners
            .get(owner)
            .map(|o| o.name.clone())
            .unwrap_or_default();

        match registration {
            Registration::Created(_) => self.record(
                Severity::Info,
                &format!("Pet registered: {} (Owner: {})", name, owner_label),
            ),
            Registration::AlreadyRegistered(_) => self.record(
                Severity::Info,
                &format!("Attempt to register existing pet: {} (Owner: {})", name, owner_label),
            ),
        }
        Ok(registration)
    }

    /// Resolves the pet by name (asking to disambiguate when needed) and
    /// returns its id without touching any registry.
    pub fn resolve_pet(&self, pet_name: &str, purpose: &str, prompt: &mut dyn Prompt) -> Result<PetId> {
        let name = self.clean_title(pet_name);
        let selector = PetSelector::new(
            &self.pets,
            &self.owners,
            &self.audit,
            self.settings.max_selection_attempts,
        );
        selector.resolve(&name, purpose, prompt)
    }

    /// Appends a visit to an already resolved pet.
    pub fn add_consultation(&mut self, pet: PetId, form: ConsultationForm) -> Result<ConsultationId> {
        let pet_name = self
            .pets
            .get(pet)
            .map(|p| p.name.clone())
            .ok_or_else(|| ClinicError::unexpected(format!("unknown pet id {:?}", pet)))?;

        let date = form.date.trim().to_string();
        let id = self.consultations.register(
            date.clone(),
            form.reason.trim().to_string(),
            form.diagnosis.trim().to_string(),
            pet,
        );
        self.record(
            Severity::Info,
            &format!("Consultation registered for: {} (Date: {})", pet_name, date),
        );
        Ok(id)
    }

    /// Resolves the pet, then asks for date, reason and diagnosis.
    pub fn register_consultation(
        &mut self,
        pet_name: &str,
        prompt: &mut dyn Prompt,
    ) -> Result<ConsultationId> {
        let result = self.try_register_consultation(pet_name, prompt);
        if let Err(err) = &result {
            self.record_failure("registering consultation", err);
        }
        result
    }

    fn try_register_consultation(
        &mut self,
        pet_name: &str,
        prompt: &mut dyn Prompt,
    ) -> Result<ConsultationId> {
        let pet = self.resolve_pet(pet_name, "consultation registration", prompt)?;

        let form = ConsultationForm {
            date: prompt.ask("Consultation date (DD/MM/YYYY): ")?,
            reason: prompt.ask("Reason for the visit: ")?,
            diagnosis: prompt.ask("Diagnosis: ")?,
        };
        self.add_consultation(pet, form)
    }

    /// Every pet in registration order.
    pub fn list_pets(&self) -> Vec<PetCard> {
        let cards: Vec<PetCard> = self
            .pets
            .iter()
            .map(|(_, pet)| PetCard::build(pet, &self.owners))
            .collect();

        if cards.is_empty() {
            self.record(Severity::Info, "Pet listing requested: no pets yet");
        } else {
            self.record(Severity::Info, &format!("Listed {} pets", cards.len()));
        }
        cards
    }

    pub fn history_for(&self, pet: PetId) -> Option<HistoryReport> {
        let card = PetCard::build(self.pets.get(pet)?, &self.owners);
        let entries = self
            .consultations
            .history_for(pet)
            .into_iter()
            .map(|consultation| ConsultationCard::build(consultation, &card))
            .collect();
        Some(HistoryReport { pet: card, entries })
    }

    pub fn history_report(&self, pet_name: &str, prompt: &mut dyn Prompt) -> Result<HistoryReport> {
        let result = self
            .resolve_pet(pet_name, "history view", prompt)
            .and_then(|pet| {
                self.history_for(pet)
                    .ok_or_else(|| ClinicError::unexpected(format!("unknown pet id {:?}", pet)))
            });

        match &result {
            Ok(report) if report.is_empty() => self.record(
                Severity::Info,
                &format!("No consultations yet for {}", report.pet.name),
            ),
            Ok(report) => self.record(
                Severity::Info,
                &format!("Consultation history listed for {}", report.pet.name),
            ),
            Err(err) => self.record_failure("viewing history", err),
        }
        result
    }

    /// Audits a failed operation at the error's own severity.
    pub fn record_failure(&self, operation: &str, err: &ClinicError) {
        let message = match err {
            ClinicError::NotFoundError { entity, name } => {
                format!("{} not found while {}: {}", entity, operation, name)
            }
            other => format!("Error while {}: {}", operation, other),
        };
        self.record(err.audit_severity(), &message);
    }

    fn clean_title(&self, value: &str) -> String {
        let trimmed = value.trim();
        if self.settings.normalize_case {
            title_case(trimmed)
        } else {
            trimmed.to_string()
        }
    }
}
