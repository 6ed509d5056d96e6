pub mod memory;
pub mod part;

pub use memory::InMemoryCatalog;
pub use part::{Manufacturer, Part, PartCategory, PartsFilter};

use async_trait::async_trait;
use orbit_core::CapabilityError;

/// Parts catalog contract.
#[async_trait]
pub trait PartCatalog: Send + Sync {
    /// Parts matching the filter. An empty result is ordinary data, never an
    /// error; absence of a requested part is the caller's call to make.
    async fn list_parts(&self, filter: &PartsFilter) -> Result<Vec<Part>, CapabilityError>;
}
