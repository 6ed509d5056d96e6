use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CapabilityError;
use crate::order::PaymentMethod;

/// External payment processor contract.
///
/// No idempotency key crosses this boundary: a caller that retries after a
/// timeout may charge twice for the same order. The gap sits in the upstream
/// contract itself; retry policy stays with the caller.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Execute a charge and return the processor's transaction id.
    async fn pay_order(
        &self,
        user_id: Uuid,
        order_id: Uuid,
        method: PaymentMethod,
    ) -> Result<Uuid, CapabilityError>;
}
