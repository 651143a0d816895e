//! Base repository trait for database operations.

use crate::db::errors::Result;
use crate::types::ProfileId;

/// Contains the Repository trait.
///
/// A repository is basically a data access layer for a postgres table. It provides methods for
/// creating entities and listing them with simple filters. Lookups and mutations that only make
/// sense for one table (profiles by owning user, project updates and deletes) live on the
/// concrete repository instead.
#[async_trait::async_trait]
pub trait Repository {
    /// The request type for creating entities
    type CreateRequest;

    /// The response/DTO type returned by operations
    type Response;

    /// The filter type for list operations
    type Filter: Send + Sync;

    /// Create a new entity
    async fn create(&mut self, request: &Self::CreateRequest) -> Result<Self::Response>;

    /// List entities matching the filter, in display order
    async fn list(&mut self, filter: &Self::Filter) -> Result<Vec<Self::Response>>;
}

/// Filter for collections that hang off a single profile
#[derive(Debug, Clone, Copy)]
pub struct CollectionFilter {
    pub profile_id: ProfileId,
}

impl CollectionFilter {
    pub fn new(profile_id: ProfileId) -> Self {
        Self { profile_id }
    }
}
