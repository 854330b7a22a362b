//! Resolving "the pet named X" when several pets may share a name.

use crate::core::audit;
use crate::core::owners::OwnerRegistry;
use crate::core::pets::PetRegistry;
use crate::domain::model::{PetId, Severity};
use crate::domain::ports::{AuditSink, Prompt};
use crate::utils::error::{ClinicError, Result};
use crate::utils::validation::parse_selection;

/// One line of the disambiguation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// 1-based, as shown to the user.
    pub index: usize,
    pub id: PetId,
    pub name: String,
    pub species: String,
    pub owner_name: String,
}

impl Candidate {
    pub fn line(&self) -> String {
        format!(
            "{}. Name: {}, Species: {}, Owner: {}",
            self.index, self.name, self.species, self.owner_name
        )
    }
}

pub fn candidates(pets: &PetRegistry, owners: &OwnerRegistry, name: &str) -> Vec<Candidate> {
    pets.find_by_name(name)
        .into_iter()
        .filter_map(|id| pets.get(id).map(|pet| (id, pet)))
        .enumerate()
        .map(|(position, (id, pet))| Candidate {
            index: position + 1,
            id,
            name: pet.name.clone(),
            species: pet.species.clone(),
            owner_name: owners
                .get(pet.owner)
                .map(|owner| owner.name.clone())
                .unwrap_or_default(),
        })
        .collect()
}

/// Picks one pet among several with the same name by asking the user.
pub struct PetSelector<'a> {
    pets: &'a PetRegistry,
    owners: &'a OwnerRegistry,
    audit: &'a dyn AuditSink,
    max_attempts: u32,
}

impl<'a> PetSelector<'a> {
    pub fn new(
        pets: &'a PetRegistry,
        owners: &'a OwnerRegistry,
        audit: &'a dyn AuditSink,
        max_attempts: u32,
    ) -> Self {
        Self {
            pets,
            owners,
            audit,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Zero matches is `NotFoundError`, one match is taken as is, several
    /// matches are listed and the user picks by number. Bad answers are
    /// re-asked until `max_attempts` is used up.
    pub fn resolve(&self, name: &str, purpose: &str, prompt: &mut dyn Prompt) -> Result<PetId> {
        let found = candidates(self.pets, self.owners, name);

        match found.as_slice() {
            [] => Err(ClinicError::not_found("Pet", name)),
            [only] => Ok(only.id),
            _ => self.choose(name, purpose, &found, prompt),
        }
    }

    fn choose(
        &self,
        name: &str,
        purpose: &str,
        found: &[Candidate],
        prompt: &mut dyn Prompt,
    ) -> Result<PetId> {
        prompt.say(&format!("Several pets are named '{}':", name));
        for candidate in found {
            prompt.say(&candidate.line());
        }

        for _ in 0..self.max_attempts {
            let selection = match prompt.ask("Select the number of the right pet: ") {
                Ok(answer) => parse_selection(&answer, found.len()),
                Err(ClinicError::InputClosed) => return Err(ClinicError::InputClosed),
                // An unreadable line is just another bad answer.
                Err(err) => Err(ClinicError::InputFormatError {
                    input: "<unreadable>".to_string(),
                    reason: err.to_string(),
                }),
            };

            match selection {
                Ok(index) => return Ok(found[index].id),
                Err(err) => {
                    let input = match &err {
                        ClinicError::InputFormatError { input, .. } => input.as_str(),
                        _ => "",
                    };
                    prompt.say(&format!("{}. Try again.", err.user_friendly_message()));
                    audit::emit(
                        self.audit,
                        Severity::Warning,
                        &format!("Invalid pet selection during {}: '{}'", purpose, input),
                    );
                }
            }
        }

        Err(ClinicError::SelectionAbandoned {
            attempts: self.max_attempts,
        })
    }
}
