use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use orbit_catalog::{PartCatalog, PartsFilter};
use orbit_core::{
    CapabilityError, NewOrder, Order, OrderCreation, OrderError, OrderStatus, OrderStore,
    OrderUpdate, PaymentGateway, PaymentMethod, StatusSwap,
};
use orbit_store::CapabilityConfig;

/// Upper bounds on capability calls. `None` waits indefinitely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deadlines {
    pub catalog: Option<Duration>,
    pub payment: Option<Duration>,
}

impl From<&CapabilityConfig> for Deadlines {
    fn from(cfg: &CapabilityConfig) -> Self {
        Self {
            catalog: Some(Duration::from_millis(cfg.catalog_deadline_ms)),
            payment: Some(Duration::from_millis(cfg.payment_deadline_ms)),
        }
    }
}

/// Coordinates the order lifecycle across the store and both capabilities.
///
/// Status transitions are `PendingPayment → Paid` and
/// `PendingPayment → Cancelled`, both terminal; payment claims the
/// transition with an atomic status swap before the gateway is called, so
/// concurrent payers cannot double-charge.
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    catalog: Arc<dyn PartCatalog>,
    payment: Arc<dyn PaymentGateway>,
    deadlines: Deadlines,
}

impl OrderService {
    pub fn new(
        store: Arc<dyn OrderStore>,
        catalog: Arc<dyn PartCatalog>,
        payment: Arc<dyn PaymentGateway>,
    ) -> Self {
        Self {
            store,
            catalog,
            payment,
            deadlines: Deadlines::default(),
        }
    }

    pub fn with_deadlines(mut self, deadlines: Deadlines) -> Self {
        self.deadlines = deadlines;
        self
    }

    /// Resolve the requested parts, price the order and persist it as
    /// `PendingPayment`.
    ///
    /// The id filter is passed explicitly even when empty, so an order with
    /// zero parts resolves zero parts and is created with a total of 0.
    /// Every requested id must resolve: the catalog returns each matching
    /// part once, so an unknown id — and likewise a duplicated one — fails
    /// the count check.
    pub async fn create_order(
        &self,
        user_id: Uuid,
        part_ids: Vec<Uuid>,
    ) -> Result<OrderCreation, OrderError> {
        let filter = PartsFilter::by_ids(part_ids.clone());
        let parts = bounded(self.deadlines.catalog, self.catalog.list_parts(&filter)).await?;

        if parts.len() != part_ids.len() {
            return Err(OrderError::PartsMismatch {
                requested: part_ids.len(),
                resolved: parts.len(),
            });
        }

        // Summation order over f64 is not pinned down; totals agree within
        // 1e-9 regardless of how the catalog orders its answer.
        let total_price: f64 = parts.iter().map(|part| part.price).sum();

        let order_id = self
            .store
            .insert(NewOrder {
                user_id,
                part_ids,
                total_price,
            })
            .await?;

        tracing::info!(%order_id, %user_id, total_price, "order created");

        Ok(OrderCreation {
            order_id,
            total_price,
        })
    }

    /// Current snapshot of an order.
    pub async fn get_order(&self, order_id: Uuid) -> Result<Order, OrderError> {
        Ok(self.store.get(order_id).await?)
    }

    /// Cancel a pending order. Paid and cancelled orders are terminal, and
    /// an order claimed by an in-flight payment keeps its claim.
    pub async fn cancel_order(&self, order_id: Uuid) -> Result<(), OrderError> {
        let outcome = self
            .store
            .compare_and_set_status(order_id, OrderStatus::PendingPayment, OrderStatus::Cancelled)
            .await?;

        match outcome {
            StatusSwap::Swapped(_) => {
                tracing::info!(%order_id, "order cancelled");
                Ok(())
            }
            StatusSwap::Refused(status) => Err(transition_conflict(status)),
        }
    }

    /// Pay a pending order, returning the processor's transaction id.
    ///
    /// The status is first swapped to the transient `PaymentInFlight`
    /// marker, so exactly one of any number of concurrent callers reaches
    /// the gateway; the rest fail with a conflict without waiting. On
    /// gateway failure or timeout the marker is swapped back and the order
    /// stays payable. The returned future should be driven to completion:
    /// dropping it between claim and commit leaves the order claimed.
    pub async fn pay_order(
        &self,
        order_id: Uuid,
        method: PaymentMethod,
    ) -> Result<Uuid, OrderError> {
        let claimed = self
            .store
            .compare_and_set_status(
                order_id,
                OrderStatus::PendingPayment,
                OrderStatus::PaymentInFlight,
            )
            .await?;

        let order = match claimed {
            StatusSwap::Swapped(order) => order,
            StatusSwap::Refused(status) => return Err(transition_conflict(status)),
        };

        let charge = bounded(
            self.deadlines.payment,
            self.payment.pay_order(order.user_id, order_id, method),
        )
        .await;

        let transaction_id = match charge {
            Ok(transaction_id) => transaction_id,
            Err(err) => {
                if let Err(release_err) = self.release_claim(order_id).await {
                    tracing::warn!(%order_id, error = %release_err, "failed to release payment claim");
                }
                return Err(err);
            }
        };

        self.store
            .apply_update(order_id, OrderUpdate::paid(method, transaction_id))
            .await?;

        tracing::info!(%order_id, %transaction_id, ?method, "order paid");

        Ok(transaction_id)
    }

    /// Return a claimed order to `PendingPayment` after a failed charge.
    async fn release_claim(&self, order_id: Uuid) -> Result<(), OrderError> {
        let outcome = self
            .store
            .compare_and_set_status(
                order_id,
                OrderStatus::PaymentInFlight,
                OrderStatus::PendingPayment,
            )
            .await?;

        match outcome {
            StatusSwap::Swapped(_) => Ok(()),
            // The claim is exclusive to this call; losing it means the store
            // was mutated behind the marker.
            StatusSwap::Refused(status) => Err(OrderError::Internal(format!(
                "payment claim lost: order moved to {status:?} mid-flight"
            ))),
        }
    }
}

/// Conflict for an order observed outside `PendingPayment`.
fn transition_conflict(observed: OrderStatus) -> OrderError {
    match observed {
        OrderStatus::Paid => OrderError::AlreadyPaid,
        OrderStatus::Cancelled => OrderError::AlreadyCancelled,
        OrderStatus::PaymentInFlight => OrderError::PaymentInProgress,
        // A refusal always carries a status other than the expected one.
        OrderStatus::PendingPayment => {
            OrderError::Internal("status swap refused without a conflict".to_string())
        }
    }
}

/// Run a capability call under an optional deadline; an elapsed deadline is
/// transient unavailability, not a logical failure.
async fn bounded<T, F>(limit: Option<Duration>, call: F) -> Result<T, OrderError>
where
    F: Future<Output = Result<T, CapabilityError>>,
{
    match limit {
        Some(limit) => match tokio::time::timeout(limit, call).await {
            Ok(result) => result.map_err(OrderError::from),
            Err(_) => Err(OrderError::Unavailable(format!(
                "capability call exceeded {limit:?} deadline"
            ))),
        },
        None => call.await.map_err(OrderError::from),
    }
}
