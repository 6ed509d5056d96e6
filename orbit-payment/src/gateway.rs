use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use uuid::Uuid;

use orbit_core::{CapabilityError, PaymentGateway, PaymentMethod};

/// Stand-in payment processor: every charge succeeds with a fresh
/// transaction id unless a failure has been queued.
///
/// Like the real processor it stands in for, it accepts no idempotency key,
/// so a retry after a timeout is a second charge.
#[derive(Default)]
pub struct SimulatedGateway {
    latency: Option<Duration>,
    fail_with: Mutex<Option<CapabilityError>>,
}

impl SimulatedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay every charge; used to widen race windows in concurrency tests.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Fail the next charge with the given error; later charges succeed.
    pub fn fail_next(&self, err: CapabilityError) {
        *self.fail_with.lock() = Some(err);
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn pay_order(
        &self,
        user_id: Uuid,
        order_id: Uuid,
        method: PaymentMethod,
    ) -> Result<Uuid, CapabilityError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        if let Some(err) = self.fail_with.lock().take() {
            tracing::warn!(%order_id, error = %err, "charge refused");
            return Err(err);
        }

        let transaction_id = Uuid::new_v4();
        tracing::info!(%user_id, %order_id, ?method, %transaction_id, "charge processed");

        Ok(transaction_id)
    }
}
