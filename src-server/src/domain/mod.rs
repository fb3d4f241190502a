//! Domain Layer
//!
//! Contains the plot entity and core abstractions.
//! This layer has NO external dependencies (except serde for serialization).

mod entity;
mod plot;

pub use entity::{DomainError, DomainResult, Entity};
pub use plot::{Plan, PlantingRecord, Plot};
