pub mod service;

pub use service::{Deadlines, OrderService};
