pub mod error;
pub mod order;
pub mod payment;
pub mod repository;

pub use error::{CapabilityError, ErrorKind, OrderError, StoreError};
pub use order::{NewOrder, Order, OrderCreation, OrderStatus, OrderUpdate, PaymentMethod};
pub use payment::PaymentGateway;
pub use repository::{OrderStore, StatusSwap};
