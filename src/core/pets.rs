use crate::domain::model::{OwnerId, Pet, PetId, Registration};
use crate::utils::error::Result;

/// Append-only store of pets. Each pet points at its owner by id.
#[derive(Debug, Default, Clone)]
pub struct PetRegistry {
    pets: Vec<Pet>,
}

impl PetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All pets with this name, ignoring case, in registration order.
    pub fn find_by_name(&self, name: &str) -> Vec<PetId> {
        let needle = name.to_lowercase();
        self.pets
            .iter()
            .enumerate()
            .filter(|(_, pet)| pet.name.to_lowercase() == needle)
            .map(|(index, _)| PetId(index))
            .collect()
    }

    pub fn find_for_owner(&self, name: &str, owner: OwnerId) -> Option<PetId> {
        let needle = name.to_lowercase();
        self.pets
            .iter()
            .position(|pet| pet.owner == owner && pet.name.to_lowercase() == needle)
            .map(PetId)
    }

    /// Stores a new pet unless the owner already has one with the same name.
    /// The age check runs before anything is stored.
    pub fn register(
        &mut self,
        name: String,
        species: String,
        breed: String,
        age: i64,
        owner: OwnerId,
    ) -> Result<Registration<PetId>> {
        let pet = Pet::new(name, species, breed, age, owner)?;

        if let Some(existing) = self.find_for_owner(&pet.name, owner) {
            return Ok(Registration::AlreadyRegistered(existing));
        }

        let id = PetId(self.pets.len());
        self.pets.push(pet);
        Ok(Registration::Created(id))
    }

    pub fn get(&self, id: PetId) -> Option<&Pet> {
        self.pets.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (PetId, &Pet)> {
        self.pets
            .iter()
            .enumerate()
            .map(|(index, pet)| (PetId(index), pet))
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}
