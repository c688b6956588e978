//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim intake test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built documents and amounts
//! - `builders`: Builder for workflows in a given starting state
//! - `providers`: Scripted decision providers that record their calls
//! - `assertions`: Custom assertion helpers for transitions and decisions
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod providers;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use providers::*;
pub use assertions::*;
pub use generators::*;
