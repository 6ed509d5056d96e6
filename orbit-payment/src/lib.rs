pub mod gateway;

pub use gateway::SimulatedGateway;
