use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Part categories in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartCategory {
    Unknown,
    Engine,
    Fuel,
    Porthole,
    Wing,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manufacturer {
    pub name: String,
    pub country: String,
}

/// A priced catalog item. Owned by the catalog; the orchestrator only reads
/// it for filter matching and price aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: PartCategory,
    pub manufacturer: Manufacturer,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Conjunctive filter over catalog parts.
///
/// `None` leaves a field unconstrained; `Some(set)` requires membership, so a
/// present-but-empty set matches nothing. Order resolution depends on that
/// distinction: an explicit empty id set resolves to no parts, not to the
/// whole catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartsFilter {
    pub ids: Option<Vec<Uuid>>,
    pub names: Option<Vec<String>>,
    pub categories: Option<Vec<PartCategory>>,
    pub manufacturer_countries: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

impl PartsFilter {
    /// Filter that resolves exactly the given ids.
    pub fn by_ids(ids: Vec<Uuid>) -> Self {
        Self {
            ids: Some(ids),
            ..Self::default()
        }
    }

    /// Fields combine with AND; within a field, membership is enough.
    pub fn matches(&self, part: &Part) -> bool {
        if let Some(ids) = &self.ids {
            if !ids.contains(&part.id) {
                return false;
            }
        }

        if let Some(names) = &self.names {
            if !names.contains(&part.name) {
                return false;
            }
        }

        if let Some(categories) = &self.categories {
            if !categories.contains(&part.category) {
                return false;
            }
        }

        if let Some(countries) = &self.manufacturer_countries {
            if !countries.contains(&part.manufacturer.country) {
                return false;
            }
        }

        if let Some(tags) = &self.tags {
            // One shared tag is enough.
            if !tags.iter().any(|tag| part.tags.contains(tag)) {
                return false;
            }
        }

        true
    }
}
