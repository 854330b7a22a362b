//! Text menu driving the clinic operations.
//!
//! Each action prompts for its fields, calls into [`Clinic`], and prints the
//! outcome. Failures are reported and the loop goes on; only the exit action
//! or the end of input stops it.

use crate::core::report::{CONSULTATION_SEPARATOR, PET_SEPARATOR};
use crate::core::{Clinic, PetForm};
use crate::domain::model::{Registration, Severity};
use crate::domain::ports::{AuditSink, Prompt};
use crate::utils::error::{ClinicError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    RegisterPet,
    RegisterConsultation,
    ListPets,
    ViewHistory,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 5] = [
        MenuAction::RegisterPet,
        MenuAction::RegisterConsultation,
        MenuAction::ListPets,
        MenuAction::ViewHistory,
        MenuAction::Exit,
    ];

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuAction::RegisterPet),
            "2" => Some(MenuAction::RegisterConsultation),
            "3" => Some(MenuAction::ListPets),
            "4" => Some(MenuAction::ViewHistory),
            "5" => Some(MenuAction::Exit),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::RegisterPet => "Register pet",
            MenuAction::RegisterConsultation => "Register consultation",
            MenuAction::ListPets => "List pets",
            MenuAction::ViewHistory => "View a pet's consultation history",
            MenuAction::Exit => "Exit",
        }
    }
}

/// Runs the menu until the user exits or input runs out.
pub fn run_menu<A: AuditSink>(clinic: &mut Clinic<A>, prompt: &mut dyn Prompt) -> Result<()> {
    let clinic_name = clinic.settings().name.clone();
    clinic.record(
        Severity::Info,
        &format!("Application '{}' started", clinic_name),
    );

    loop {
        prompt.say("");
        prompt.say(&format!("--- {} Main Menu ---", clinic_name));
        for (number, action) in MenuAction::ALL.iter().enumerate() {
            prompt.say(&format!("{}. {}", number + 1, action.label()));
        }

        let choice = match prompt.ask("Select an option: ") {
            Ok(choice) => choice,
            Err(ClinicError::InputClosed) => {
                clinic.record(Severity::Warning, "Input closed, leaving the menu");
                break;
            }
            Err(err) => {
                prompt.say("Invalid option. Please try again.");
                clinic.record(
                    err.audit_severity(),
                    &format!("Could not read menu option: {}", err),
                );
                continue;
            }
        };

        let Some(action) = MenuAction::parse(&choice) else {
            prompt.say("Invalid option. Please try again.");
            clinic.record(
                Severity::Warning,
                &format!("Invalid menu option selected: '{}'", choice.trim()),
            );
            continue;
        };

        if action == MenuAction::Exit {
            prompt.say(&format!("Thank you for choosing {}! See you soon.", clinic_name));
            break;
        }

        match perform(clinic, action, prompt) {
            Ok(()) => {}
            Err(ClinicError::InputClosed) => {
                clinic.record(Severity::Warning, "Input closed, leaving the menu");
                break;
            }
            Err(err) => report_error(prompt, &err),
        }
    }

    clinic.record(
        Severity::Info,
        &format!("Application '{}' closed", clinic_name),
    );
    Ok(())
}

/// Runs a single menu action. Errors are already audited by the clinic.
pub fn perform<A: AuditSink>(
    clinic: &mut Clinic<A>,
    action: MenuAction,
    prompt: &mut dyn Prompt,
) -> Result<()> {
    match action {
        MenuAction::RegisterPet => register_pet(clinic, prompt),
        MenuAction::RegisterConsultation => register_consultation(clinic, prompt),
        MenuAction::ListPets => {
            list_pets(clinic, prompt);
            Ok(())
        }
        MenuAction::ViewHistory => view_history(clinic, prompt),
        MenuAction::Exit => Ok(()),
    }
}

fn register_pet<A: AuditSink>(clinic: &mut Clinic<A>, prompt: &mut dyn Prompt) -> Result<()> {
    prompt.say("");
    prompt.say("--- Register Pet ---");
    let form = PetForm {
        name: ask_field(clinic, prompt, "registering pet", "Pet name: ")?,
        species: ask_field(clinic, prompt, "registering pet", "Species: ")?,
        breed: ask_field(clinic, prompt, "registering pet", "Breed: ")?,
        age: ask_field(clinic, prompt, "registering pet", "Age (years): ")?,
        owner_name: ask_field(
            clinic,
            prompt,
            "registering pet",
            "Owner name (created if missing): ",
        )?,
    };

    let registration = clinic.register_pet(form, prompt)?;
    let Some(pet) = clinic.pet(registration.id()) else {
        return Err(ClinicError::unexpected("registered pet is missing"));
    };
    let owner_name = clinic
        .owner(pet.owner)
        .map(|owner| owner.name.as_str())
        .unwrap_or_default();

    match registration {
        Registration::Created(_) => prompt.say(&format!(
            "Pet '{}' registered successfully for {}.",
            pet.name, owner_name
        )),
        Registration::AlreadyRegistered(_) => prompt.say(&format!(
            "Pet '{}' is already registered with this owner.",
            pet.name
        )),
    }
    Ok(())
}

fn register_consultation<A: AuditSink>(
    clinic: &mut Clinic<A>,
    prompt: &mut dyn Prompt,
) -> Result<()> {
    prompt.say("");
    prompt.say("--- Register Consultation ---");
    let pet_name = ask_field(
        clinic,
        prompt,
        "registering consultation",
        "Pet name for the consultation: ",
    )?;

    let id = clinic.register_consultation(&pet_name, prompt)?;
    let pet_name = clinic
        .consultations()
        .get(id)
        .and_then(|consultation| clinic.pet(consultation.pet))
        .map(|pet| pet.name.clone())
        .unwrap_or(pet_name);
    prompt.say(&format!("Consultation registered successfully for '{}'.", pet_name));
    Ok(())
}

fn list_pets<A: AuditSink>(clinic: &Clinic<A>, prompt: &mut dyn Prompt) {
    prompt.say("");
    prompt.say("--- Pet List ---");
    let cards = clinic.list_pets();
    if cards.is_empty() {
        prompt.say("No pets registered yet.");
        return;
    }

    for card in cards {
        prompt.say(&card.to_string());
        prompt.say(PET_SEPARATOR);
    }
}

fn view_history<A: AuditSink>(clinic: &Clinic<A>, prompt: &mut dyn Prompt) -> Result<()> {
    prompt.say("");
    prompt.say("--- Pet Consultation History ---");
    let pet_name = ask_field(
        clinic,
        prompt,
        "viewing history",
        "Pet name to view its history: ",
    )?;

    let report = clinic.history_report(&pet_name, prompt)?;
    prompt.say("");
    prompt.say(&report.header());
    if report.is_empty() {
        prompt.say(&format!(
            "No consultations registered for '{}' yet.",
            report.pet.name
        ));
        return Ok(());
    }

    for entry in &report.entries {
        prompt.say(&entry.to_string());
        prompt.say(CONSULTATION_SEPARATOR);
    }
    Ok(())
}

/// Reads one form field. A read failure other than end of input is audited
/// here, since the clinic never sees it.
fn ask_field<A: AuditSink>(
    clinic: &Clinic<A>,
    prompt: &mut dyn Prompt,
    operation: &str,
    question: &str,
) -> Result<String> {
    prompt.ask(question).inspect_err(|err| {
        if !matches!(err, ClinicError::InputClosed) {
            clinic.record_failure(operation, err);
        }
    })
}

fn report_error(prompt: &mut dyn Prompt, err: &ClinicError) {
    tracing::debug!(
        "Operation failed: {} (Category: {:?}, Severity: {:?})",
        err,
        err.category(),
        err.severity()
    );
    prompt.say(&format!("Error: {}", err.user_friendly_message()));
    prompt.say(&format!("Hint: {}", err.recovery_suggestion()));
}
