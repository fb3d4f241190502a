//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! Implementations can use SQLite, in-memory, etc.

use async_trait::async_trait;

use crate::domain::{DomainResult, Entity};

/// Core repository trait for keyed storage
///
/// Generic over any Entity type. Writes are upserts: the caller owns the id.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Find entity by ID
    async fn find_by_id(&self, id: &T::Id) -> DomainResult<Option<T>>;

    /// List all entities
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Insert the entity or replace the one with the same ID
    async fn upsert(&self, entity: &T) -> DomainResult<T>;

    /// Delete entity by ID. Deleting a missing ID is not an error.
    async fn delete(&self, id: &T::Id) -> DomainResult<()>;
}
