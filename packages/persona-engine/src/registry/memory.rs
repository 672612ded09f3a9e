//! In-memory persona registry for tests and development.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{EngineError, Result};
use crate::traits::registry::PersonaRegistry;
use crate::types::persona::{ImportStatus, PersonaRecord};

/// Vec-backed registry preserving insertion order. Lost on restart.
#[derive(Default)]
pub struct MemoryRegistry {
    personas: RwLock<Vec<PersonaRecord>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn update<F>(&self, name: &str, apply: F) -> Result<()>
    where
        F: FnOnce(&mut PersonaRecord),
    {
        let mut personas = self.personas.write().unwrap();
        match personas.iter_mut().find(|p| p.name == name) {
            Some(persona) => {
                apply(persona);
                Ok(())
            }
            None => Err(EngineError::Registry(
                format!("no persona named {name:?}").into(),
            )),
        }
    }
}

#[async_trait]
impl PersonaRegistry for MemoryRegistry {
    async fn find(&self, name: &str) -> Result<Option<PersonaRecord>> {
        Ok(self
            .personas
            .read()
            .unwrap()
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn insert(&self, persona: &PersonaRecord) -> Result<()> {
        let mut personas = self.personas.write().unwrap();
        if personas.iter().any(|p| p.name == persona.name) {
            return Err(EngineError::Registry(
                format!("persona {:?} already exists", persona.name).into(),
            ));
        }
        personas.push(persona.clone());
        Ok(())
    }

    async fn set_farcaster_id(&self, name: &str, farcaster_id: &str) -> Result<()> {
        self.update(name, |p| p.farcaster_id = Some(farcaster_id.to_string()))
    }

    async fn set_status(&self, name: &str, status: ImportStatus) -> Result<()> {
        self.update(name, |p| p.status = status)
    }

    async fn list_ready(&self) -> Result<Vec<PersonaRecord>> {
        Ok(self
            .personas
            .read()
            .unwrap()
            .iter()
            .filter(|p| p.is_ready())
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_find() {
        let registry = MemoryRegistry::new();
        registry.insert(&PersonaRecord::new("alice", "42")).await.unwrap();

        let found = registry.find("alice").await.unwrap().unwrap();
        assert_eq!(found.twitter_id, "42");
        assert!(registry.find("bob").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_names_are_rejected() {
        let registry = MemoryRegistry::new();
        registry.insert(&PersonaRecord::new("alice", "42")).await.unwrap();

        assert!(registry.insert(&PersonaRecord::new("alice", "43")).await.is_err());
    }

    #[tokio::test]
    async fn updates_require_an_existing_row() {
        let registry = MemoryRegistry::new();

        assert!(registry.set_farcaster_id("ghost", "1").await.is_err());
        assert!(registry.set_status("ghost", ImportStatus::FullyImported).await.is_err());
    }

    #[tokio::test]
    async fn list_ready_filters_and_preserves_order() {
        let registry = MemoryRegistry::new();
        registry.insert(&PersonaRecord::new("alice", "1")).await.unwrap();
        registry.insert(&PersonaRecord::new("bob", "2")).await.unwrap();
        registry.insert(&PersonaRecord::new("carol", "3")).await.unwrap();

        registry.set_status("carol", ImportStatus::FullyImported).await.unwrap();
        registry.set_status("alice", ImportStatus::FullyImported).await.unwrap();

        let ready: Vec<String> = registry
            .list_ready()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(ready, vec!["alice", "carol"]);
    }
}
