use crate::domain::model::{Owner, OwnerId, Registration};

/// Append-only store of clinic clients, in registration order.
#[derive(Debug, Default, Clone)]
pub struct OwnerRegistry {
    owners: Vec<Owner>,
}

impl OwnerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// First owner whose name matches, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Option<OwnerId> {
        let needle = name.to_lowercase();
        self.owners
            .iter()
            .position(|owner| owner.name.to_lowercase() == needle)
            .map(OwnerId)
    }

    /// Owner with the same name (ignoring case) and the same phone, if any.
    pub fn find_exact(&self, name: &str, phone: &str) -> Option<OwnerId> {
        let needle = name.to_lowercase();
        self.owners
            .iter()
            .position(|owner| owner.name.to_lowercase() == needle && owner.phone == phone)
            .map(OwnerId)
    }

    pub fn register(&mut self, name: String, phone: String, address: String) -> Registration<OwnerId> {
        if let Some(existing) = self.find_exact(&name, &phone) {
            tracing::debug!("Owner {} ({}) already registered", name, phone);
            return Registration::AlreadyRegistered(existing);
        }

        let id = OwnerId(self.owners.len());
        self.owners.push(Owner::new(name, phone, address));
        Registration::Created(id)
    }

    pub fn get(&self, id: OwnerId) -> Option<&Owner> {
        self.owners.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OwnerId, &Owner)> {
        self.owners
            .iter()
            .enumerate()
            .map(|(index, owner)| (OwnerId(index), owner))
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice(registry: &mut OwnerRegistry) -> Registration<OwnerId> {
        registry.register(
            "Alice".to_string(),
            "555-1111".to_string(),
            "Main St".to_string(),
        )
    }

    #[test]
    fn test_iter_in_registration_order() {
        let mut registry = OwnerRegistry::new();
        let alice = registry
            .register("Alice".into(), "555-1111".into(), "Main St".into())
            .id();
        let bob = registry
            .register("Bob".into(), "555-2222".into(), "Elm St".into())
            .id();
        registry.register("Alice".into(), "555-1111".into(), "Main St".into());

        let listed: Vec<(OwnerId, &str)> = registry
            .iter()
            .map(|(id, owner)| (id, owner.name.as_str()))
            .collect();
        assert_eq!(listed, [(alice, "Alice"), (bob, "Bob")]);
    }

    #[test]
    fn test_register_same_owner_twice_keeps_one() {
        let mut registry = OwnerRegistry::new();
        let first = alice(&mut registry);
        let second = registry.register(
            "alice".to_string(),
            "555-1111".to_string(),
            "Other St".to_string(),
        );

        assert!(first.is_created());
        assert_eq!(second, Registration::AlreadyRegistered(first.id()));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(first.id()).unwrap().address, "Main St");
    }

    #[test]
    fn test_same_name_different_phone_is_new_owner() {
        let mut registry = OwnerRegistry::new();
        let first = alice(&mut registry);
        let second = registry.register(
            "Alice".to_string(),
            "555-2222".to_string(),
            "Main St".to_string(),
        );

        assert!(second.is_created());
        assert_ne!(first.id(), second.id());
        assert_eq!(registry.find_by_name("ALICE"), Some(first.id()));
    }

    #[test]
    fn test_duplicate_detected_beyond_first_name_match() {
        let mut registry = OwnerRegistry::new();
        alice(&mut registry);
        let second = registry.register(
            "Alice".to_string(),
            "555-2222".to_string(),
            "Elm St".to_string(),
        );
        let again = registry.register(
            "Alice".to_string(),
            "555-2222".to_string(),
            "Elm St".to_string(),
        );

        assert_eq!(again, Registration::AlreadyRegistered(second.id()));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_find_by_name_missing() {
        let registry = OwnerRegistry::new();
        assert!(registry.find_by_name("Bob").is_none());
        assert!(registry.is_empty());
    }
}
