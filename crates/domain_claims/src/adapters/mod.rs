//! Decision provider adapters

pub mod simulated;

pub use simulated::{SimulatedDecisionProvider, SimulationSettings};
