use uuid::Uuid;

/// Coarse error classes; the transport layer maps these onto wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Unavailable,
    Internal,
}

/// Errors surfaced by the order lifecycle operations.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order not found: {0}")]
    NotFound(Uuid),

    #[error("part count mismatch: requested {requested}, resolved {resolved}")]
    PartsMismatch { requested: usize, resolved: usize },

    #[error("order already paid")]
    AlreadyPaid,

    #[error("order already cancelled")]
    AlreadyCancelled,

    #[error("payment already in progress")]
    PaymentInProgress,

    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl OrderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            OrderError::NotFound(_) => ErrorKind::NotFound,
            OrderError::PartsMismatch { .. }
            | OrderError::AlreadyPaid
            | OrderError::AlreadyCancelled
            | OrderError::PaymentInProgress => ErrorKind::Conflict,
            OrderError::Unavailable(_) => ErrorKind::Unavailable,
            OrderError::Internal(_) => ErrorKind::Internal,
        }
    }
}

/// Failure reported by an external capability.
#[derive(Debug, thiserror::Error)]
pub enum CapabilityError {
    #[error("capability unavailable: {0}")]
    Unavailable(String),

    #[error("capability failure: {0}")]
    Internal(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("order not found: {0}")]
    NotFound(Uuid),
}

impl From<CapabilityError> for OrderError {
    fn from(err: CapabilityError) -> Self {
        match err {
            CapabilityError::Unavailable(msg) => OrderError::Unavailable(msg),
            CapabilityError::Internal(msg) => OrderError::Internal(msg),
        }
    }
}

impl From<StoreError> for OrderError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => OrderError::NotFound(id),
        }
    }
}
