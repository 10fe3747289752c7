//! Helpers shared by the services.
//!
//! - [`alias_generator`] - Random alias generation from the OS CSPRNG
//! - [`deadline`] - Per-call time budget for store operations

pub mod alias_generator;
pub mod deadline;
