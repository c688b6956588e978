//! Core Kernel - Foundational types shared by the claim intake crates
//!
//! This crate provides the building blocks used across the workspace:
//! - Money types with precise decimal arithmetic
//! - Strongly-typed identifiers for submissions and documents
//! - Port abstractions for swappable external collaborators

pub mod money;
pub mod identifiers;
pub mod ports;

pub use money::{Money, Currency, Rate};
pub use identifiers::{SubmissionId, DocumentId};
pub use ports::{
    PortError, DomainPort, HealthCheckable, HealthCheckResult, AdapterHealth,
};
