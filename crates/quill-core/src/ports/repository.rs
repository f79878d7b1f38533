use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Blogpost, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `insert` and `update` are separate operations because callers always know
/// which one they mean, and the backing store may not be able to tell them
/// apart once the primary key is populated.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Persist a new entity. Fails with `Constraint` on duplicates.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Persist changes to an existing entity. Fails with `NotFound` if absent.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with `NotFound` if absent.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Blogpost repository.
#[async_trait]
pub trait BlogpostRepository: BaseRepository<Blogpost, Uuid> {
    /// All posts, unfiltered and unpaginated, in storage order.
    async fn list(&self) -> Result<Vec<Blogpost>, RepoError>;
}
