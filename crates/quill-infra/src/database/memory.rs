//! In-memory repositories - used as fallback when no database is configured,
//! and as test doubles for the API layer.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Blogpost, User};
use quill_core::error::RepoError;
use quill_core::ports::{BaseRepository, BlogpostRepository, UserRepository};

/// In-memory user repository backed by a HashMap with async RwLock.
///
/// Enforces the same username uniqueness the `users` table does.
/// Note: Data is lost on process restart.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.username == user.username) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(RepoError::NotFound);
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }
}

/// In-memory blogpost repository backed by a HashMap with async RwLock.
pub struct InMemoryBlogpostRepository {
    posts: RwLock<HashMap<Uuid, Blogpost>>,
}

impl InMemoryBlogpostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBlogpostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Blogpost, Uuid> for InMemoryBlogpostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blogpost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn insert(&self, post: Blogpost) -> Result<Blogpost, RepoError> {
        let mut posts = self.posts.write().await;

        if posts.contains_key(&post.id) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Blogpost) -> Result<Blogpost, RepoError> {
        let mut posts = self.posts.write().await;

        if !posts.contains_key(&post.id) {
            return Err(RepoError::NotFound);
        }

        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut posts = self.posts.write().await;

        if posts.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl BlogpostRepository for InMemoryBlogpostRepository {
    async fn list(&self) -> Result<Vec<Blogpost>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.values().cloned().collect())
    }
}
