use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order status in the lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    PendingPayment,
    /// Transient claim held by a single in-progress payment call; never the
    /// final state of a completed operation.
    PaymentInFlight,
    Paid,
    Cancelled,
}

impl OrderStatus {
    /// Terminal states admit no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Paid | OrderStatus::Cancelled)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Unspecified,
    Card,
    Sbp,
    CreditCard,
    InvestorMoney,
}

/// A purchase of a fixed set of parts, priced once at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Requested part ids, in request order, duplicates preserved.
    pub part_ids: Vec<Uuid>,
    pub total_price: f64,
    pub payment_method: Option<PaymentMethod>,
    /// Set exactly when the order reaches `Paid`.
    pub transaction_id: Option<Uuid>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Draft accepted by the store, which assigns the id and timestamps.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Uuid,
    pub part_ids: Vec<Uuid>,
    pub total_price: f64,
}

impl NewOrder {
    /// Materialize the draft under a store-assigned identifier.
    pub fn into_order(self, id: Uuid) -> Order {
        Order {
            id,
            user_id: self.user_id,
            part_ids: self.part_ids,
            total_price: self.total_price,
            payment_method: None,
            transaction_id: None,
            status: OrderStatus::PendingPayment,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Partial update: only the supplied fields are written.
///
/// Carries no total-price field; the total is computed once at creation and
/// never rewritten.
#[derive(Debug, Clone, Default)]
pub struct OrderUpdate {
    pub status: Option<OrderStatus>,
    pub payment_method: Option<PaymentMethod>,
    pub transaction_id: Option<Uuid>,
}

impl OrderUpdate {
    /// The update committed after a successful charge.
    pub fn paid(method: PaymentMethod, transaction_id: Uuid) -> Self {
        Self {
            status: Some(OrderStatus::Paid),
            payment_method: Some(method),
            transaction_id: Some(transaction_id),
        }
    }
}

/// What a successful creation reports back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreation {
    pub order_id: Uuid,
    pub total_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_materializes_as_pending_payment() {
        let id = Uuid::new_v4();
        let draft = NewOrder {
            user_id: Uuid::new_v4(),
            part_ids: vec![Uuid::new_v4(), Uuid::new_v4()],
            total_price: 42.5,
        };

        let order = draft.clone().into_order(id);

        assert_eq!(order.id, id);
        assert_eq!(order.user_id, draft.user_id);
        assert_eq!(order.part_ids, draft.part_ids);
        assert_eq!(order.status, OrderStatus::PendingPayment);
        assert!(order.payment_method.is_none());
        assert!(order.transaction_id.is_none());
        assert!(order.updated_at.is_none());
    }

    #[test]
    fn only_paid_and_cancelled_are_terminal() {
        assert!(OrderStatus::Paid.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::PendingPayment.is_terminal());
        assert!(!OrderStatus::PaymentInFlight.is_terminal());
    }

    #[test]
    fn status_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&OrderStatus::PendingPayment).unwrap();
        assert_eq!(json, "\"PENDING_PAYMENT\"");
    }
}
