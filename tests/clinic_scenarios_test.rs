use anyhow::Result;
use vet_clinic::core::{ConsultationForm, OwnerForm};
use vet_clinic::{Clinic, ClinicError, MemoryAudit, PetForm, Registration, ScriptedPrompt, Severity};

fn pet_form(name: &str, species: &str, breed: &str, age: &str, owner: &str) -> PetForm {
    PetForm {
        name: name.to_string(),
        species: species.to_string(),
        breed: breed.to_string(),
        age: age.to_string(),
        owner_name: owner.to_string(),
    }
}

fn alice() -> OwnerForm {
    OwnerForm {
        name: "Alice".to_string(),
        phone: "555-1111".to_string(),
        address: "Main St".to_string(),
    }
}

/// Owner, pet, one visit, then the history shows exactly that visit.
#[test]
fn test_alice_rex_checkup_history() -> Result<()> {
    let mut clinic = Clinic::new(MemoryAudit::new());
    let mut prompt = ScriptedPrompt::new(["01/01/2024", "Checkup", "Healthy"]);

    clinic.register_owner(alice());
    let rex = clinic.register_pet(pet_form("Rex", "Dog", "Labrador", "3", "Alice"), &mut prompt)?;
    assert!(rex.is_created());

    clinic.register_consultation("Rex", &mut prompt)?;

    let report = clinic.history_report("Rex", &mut prompt)?;
    assert_eq!(report.entries.len(), 1);
    let visit = &report.entries[0];
    assert_eq!(visit.date, "01/01/2024");
    assert_eq!(visit.reason, "Checkup");
    assert_eq!(visit.diagnosis, "Healthy");
    assert_eq!(visit.owner_name, "Alice");
    assert_eq!(prompt.remaining(), 0);
    Ok(())
}

#[test]
fn test_register_same_owner_twice() {
    let mut clinic = Clinic::new(MemoryAudit::new());

    let first = clinic.register_owner(alice());
    let second = clinic.register_owner(OwnerForm {
        name: "ALICE".to_string(),
        ..alice()
    });

    assert_eq!(second, Registration::AlreadyRegistered(first.id()));
    assert_eq!(clinic.owners().len(), 1);
    assert!(clinic
        .audit_sink()
        .contains("Attempt to register existing owner"));
}

#[test]
fn test_pet_for_unregistered_owner_creates_owner() -> Result<()> {
    let mut clinic = Clinic::new(MemoryAudit::new());
    let mut prompt = ScriptedPrompt::new(["555-2222", "Elm St"]);

    let registration = clinic.register_pet(pet_form("Max", "Cat", "Persian", "2", "Bob"), &mut prompt)?;

    let bob = clinic.owners().find_by_name("bob").expect("owner created");
    assert_eq!(clinic.owner(bob).unwrap().phone, "555-2222");
    assert_eq!(clinic.pet(registration.id()).unwrap().owner, bob);
    assert_eq!(clinic.pets().find_by_name("MAX"), vec![registration.id()]);
    assert!(prompt.said("Owner 'Bob' is not registered"));
    Ok(())
}

#[test]
fn test_duplicate_pet_is_stored_once() -> Result<()> {
    let mut clinic = Clinic::new(MemoryAudit::new());
    let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
    clinic.register_owner(alice());

    let first = clinic.register_pet(pet_form("Rex", "Dog", "Labrador", "3", "Alice"), &mut prompt)?;
    let second = clinic.register_pet(pet_form("rex", "Dog", "Labrador", "3", "alice"), &mut prompt)?;

    assert!(first.is_created());
    assert_eq!(second, Registration::AlreadyRegistered(first.id()));
    assert_eq!(clinic.pets().len(), 1);
    Ok(())
}

#[test]
fn test_bad_ages_store_nothing() {
    let mut clinic = Clinic::new(MemoryAudit::new());
    clinic.register_owner(alice());

    for age in ["-1", "three", "4.5"] {
        let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
        let result = clinic.register_pet(pet_form("Rex", "Dog", "Labrador", age, "Alice"), &mut prompt);
        assert!(matches!(result, Err(ClinicError::ValidationError { .. })), "age {age}");
    }

    assert!(clinic.pets().is_empty());
    assert_eq!(clinic.audit_sink().count(Severity::Error), 3);
}

#[test]
fn test_two_rexes_pick_second() -> Result<()> {
    let mut clinic = Clinic::new(MemoryAudit::new());
    let mut setup = ScriptedPrompt::new(["555-2222", "Elm St"]);
    clinic.register_owner(alice());
    clinic.register_pet(pet_form("Rex", "Dog", "Labrador", "3", "Alice"), &mut setup)?;
    let bobs_rex = clinic.register_pet(pet_form("Rex", "Cat", "Persian", "5", "Bob"), &mut setup)?;

    let mut prompt = ScriptedPrompt::new(["2", "02/02/2024", "Vaccine", "Fine"]);
    let visit = clinic.register_consultation("rex", &mut prompt)?;

    assert_eq!(clinic.consultations().get(visit).unwrap().pet, bobs_rex.id());
    assert!(prompt.said("1. Name: Rex, Species: Dog, Owner: Alice"));
    assert!(prompt.said("2. Name: Rex, Species: Cat, Owner: Bob"));
    Ok(())
}

#[test]
fn test_history_only_for_queried_pet_in_order() -> Result<()> {
    let mut clinic = Clinic::new(MemoryAudit::new());
    let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
    clinic.register_owner(alice());
    let rex = clinic.register_pet(pet_form("Rex", "Dog", "Labrador", "3", "Alice"), &mut prompt)?.id();
    let luna = clinic.register_pet(pet_form("Luna", "Cat", "Siamese", "1", "Alice"), &mut prompt)?.id();

    for (pet, date) in [(rex, "01/01/2024"), (luna, "05/01/2024"), (rex, "10/02/2024")] {
        clinic.add_consultation(
            pet,
            ConsultationForm {
                date: date.to_string(),
                reason: "Checkup".to_string(),
                diagnosis: "Healthy".to_string(),
            },
        )?;
    }

    let dates: Vec<String> = clinic
        .history_for(rex)
        .unwrap()
        .entries
        .into_iter()
        .map(|entry| entry.date)
        .collect();
    assert_eq!(dates, vec!["01/01/2024", "10/02/2024"]);
    assert_eq!(clinic.history_for(luna).unwrap().entries.len(), 1);
    Ok(())
}

#[test]
fn test_history_for_pet_without_visits_is_empty() -> Result<()> {
    let mut clinic = Clinic::new(MemoryAudit::new());
    let mut prompt = ScriptedPrompt::new(["555-2222", "Elm St"]);
    clinic.register_pet(pet_form("Max", "Cat", "Persian", "2", "Bob"), &mut prompt)?;

    let report = clinic.history_report("max", &mut prompt)?;

    assert!(report.is_empty());
    assert_eq!(report.header(), "--- History of 'Max' (Owner: Bob) ---");
    assert!(clinic.audit_sink().contains("No consultations yet for Max"));
    Ok(())
}

#[test]
fn test_consultation_for_unknown_pet_is_not_found() {
    let mut clinic = Clinic::new(MemoryAudit::new());
    let mut prompt = ScriptedPrompt::new(["01/01/2024", "Checkup", "Healthy"]);

    let result = clinic.register_consultation("Ghost", &mut prompt);

    assert!(matches!(result, Err(ClinicError::NotFoundError { .. })));
    assert!(clinic.consultations().is_empty());
    assert_eq!(prompt.remaining(), 3);
    assert_eq!(clinic.audit_sink().count(Severity::Warning), 1);
}

#[test]
fn test_list_pets_in_registration_order() -> Result<()> {
    let mut clinic = Clinic::new(MemoryAudit::new());
    assert!(clinic.list_pets().is_empty());

    let mut prompt = ScriptedPrompt::new(Vec::<String>::new());
    clinic.register_owner(alice());
    clinic.register_pet(pet_form("Rex", "Dog", "Labrador", "3", "Alice"), &mut prompt)?;
    clinic.register_pet(pet_form("Luna", "Cat", "Siamese", "1", "Alice"), &mut prompt)?;

    let names: Vec<String> = clinic.list_pets().into_iter().map(|card| card.name).collect();
    assert_eq!(names, vec!["Rex", "Luna"]);
    Ok(())
}
