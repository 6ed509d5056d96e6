use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::order::{NewOrder, Order, OrderStatus, OrderUpdate};

/// Outcome of an atomic status swap.
#[derive(Debug, Clone)]
pub enum StatusSwap {
    /// The swap applied; carries the post-swap snapshot.
    Swapped(Order),
    /// The current status did not match the expected one; nothing changed.
    Refused(OrderStatus),
}

/// Process-lifetime keyed storage of orders.
///
/// Each operation is atomic on its own. Operations never nest, so one
/// exclusive lock per store is sufficient.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a draft, assigning the order id.
    async fn insert(&self, draft: NewOrder) -> Result<Uuid, StoreError>;

    /// Current snapshot of an order.
    async fn get(&self, id: Uuid) -> Result<Order, StoreError>;

    /// Patch the supplied fields, refreshing `updated_at`.
    async fn apply_update(&self, id: Uuid, update: OrderUpdate) -> Result<(), StoreError>;

    /// Swap `expected` for `next` atomically, or report the observed status.
    async fn compare_and_set_status(
        &self,
        id: Uuid,
        expected: OrderStatus,
        next: OrderStatus,
    ) -> Result<StatusSwap, StoreError>;
}
