use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use orbit_core::CapabilityError;

use crate::part::{Part, PartsFilter};
use crate::PartCatalog;

/// In-memory catalog backing tests and single-process deployments.
#[derive(Default)]
pub struct InMemoryCatalog {
    parts: RwLock<HashMap<Uuid, Part>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-populated from an iterator of parts.
    pub fn seeded(parts: impl IntoIterator<Item = Part>) -> Self {
        let catalog = Self::new();
        for part in parts {
            catalog.insert(part);
        }
        catalog
    }

    pub fn insert(&self, part: Part) {
        self.parts.write().insert(part.id, part);
    }

    pub fn len(&self) -> usize {
        self.parts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.read().is_empty()
    }
}

#[async_trait]
impl PartCatalog for InMemoryCatalog {
    async fn list_parts(&self, filter: &PartsFilter) -> Result<Vec<Part>, CapabilityError> {
        let parts = self.parts.read();
        Ok(parts
            .values()
            .filter(|part| filter.matches(part))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::part::{Manufacturer, PartCategory};

    fn part(name: &str, price: f64, category: PartCategory) -> Part {
        Part {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            price,
            category,
            manufacturer: Manufacturer {
                name: "Orbit Dynamics".to_string(),
                country: "DE".to_string(),
            },
            tags: vec!["stock".to_string()],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn lists_only_matching_parts() {
        let engine = part("engine", 1_000.0, PartCategory::Engine);
        let wing = part("wing", 400.0, PartCategory::Wing);
        let catalog = InMemoryCatalog::seeded([engine.clone(), wing]);

        let listed = catalog
            .list_parts(&PartsFilter::by_ids(vec![engine.id]))
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, engine.id);
    }

    #[tokio::test]
    async fn empty_id_set_yields_no_parts() {
        let catalog = InMemoryCatalog::seeded([
            part("engine", 1_000.0, PartCategory::Engine),
            part("wing", 400.0, PartCategory::Wing),
        ]);

        let listed = catalog
            .list_parts(&PartsFilter::by_ids(Vec::new()))
            .await
            .unwrap();

        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn unconstrained_filter_lists_the_catalog() {
        let catalog = InMemoryCatalog::seeded([
            part("engine", 1_000.0, PartCategory::Engine),
            part("wing", 400.0, PartCategory::Wing),
        ]);

        let listed = catalog.list_parts(&PartsFilter::default()).await.unwrap();
        assert_eq!(listed.len(), 2);
    }

    #[tokio::test]
    async fn duplicate_requested_ids_resolve_once() {
        let engine = part("engine", 1_000.0, PartCategory::Engine);
        let catalog = InMemoryCatalog::seeded([engine.clone()]);

        let listed = catalog
            .list_parts(&PartsFilter::by_ids(vec![engine.id, engine.id]))
            .await
            .unwrap();

        assert_eq!(listed.len(), 1);
    }
}
