use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use orbit_core::{
    NewOrder, Order, OrderStatus, OrderStore, OrderUpdate, StatusSwap, StoreError,
};

/// Process-lifetime order storage: one exclusive lock around a keyed map.
///
/// The lock is only ever held across pure memory work; capability calls
/// happen outside it.
#[derive(Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<Uuid, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, draft: NewOrder) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        let order = draft.into_order(id);

        tracing::info!(
            order_id = %order.id,
            user_id = %order.user_id,
            total_price = order.total_price,
            "order stored"
        );

        self.orders.write().insert(id, order);
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<Order, StoreError> {
        self.orders
            .read()
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    async fn apply_update(&self, id: Uuid, update: OrderUpdate) -> Result<(), StoreError> {
        let mut orders = self.orders.write();
        let order = orders.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        if let Some(status) = update.status {
            order.status = status;
        }
        if let Some(method) = update.payment_method {
            order.payment_method = Some(method);
        }
        if let Some(transaction_id) = update.transaction_id {
            order.transaction_id = Some(transaction_id);
        }
        order.updated_at = Some(Utc::now());

        Ok(())
    }

    async fn compare_and_set_status(
        &self,
        id: Uuid,
        expected: OrderStatus,
        next: OrderStatus,
    ) -> Result<StatusSwap, StoreError> {
        let mut orders = self.orders.write();
        let order = orders.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        if order.status != expected {
            tracing::debug!(
                order_id = %id,
                observed = ?order.status,
                expected = ?expected,
                "status swap refused"
            );
            return Ok(StatusSwap::Refused(order.status));
        }

        order.status = next;
        order.updated_at = Some(Utc::now());

        Ok(StatusSwap::Swapped(order.clone()))
    }
}
