//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{BlogpostRepository, PasswordService, SessionStore, UserRepository};
use quill_infra::auth::Argon2PasswordService;
use quill_infra::database::{DatabaseConfig, InMemoryBlogpostRepository, InMemoryUserRepository};
use quill_infra::sessions::InMemorySessionStore;

#[cfg(feature = "postgres")]
use quill_infra::database::{PostgresBlogpostRepository, PostgresUserRepository, connect};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub blogs: Arc<dyn BlogpostRepository>,
    pub sessions: Arc<dyn SessionStore>,
    pub passwords: Arc<dyn PasswordService>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let (users, blogs): (Arc<dyn UserRepository>, Arc<dyn BlogpostRepository>) = {
            if let Some(config) = db_config {
                match connect(config).await {
                    Ok(conn) => {
                        let conn = Arc::new(conn);
                        (
                            Arc::new(PostgresUserRepository::new(conn.clone())),
                            Arc::new(PostgresBlogpostRepository::new(conn)),
                        )
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        in_memory_repos()
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                in_memory_repos()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let (users, blogs): (Arc<dyn UserRepository>, Arc<dyn BlogpostRepository>) = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
            in_memory_repos()
        };

        tracing::info!("Application state initialized");

        Self {
            users,
            blogs,
            sessions: Arc::new(InMemorySessionStore::new()),
            passwords: Arc::new(Argon2PasswordService::new()),
        }
    }

    /// State backed entirely by in-memory adapters. Used by tests.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        let (users, blogs) = in_memory_repos();
        Self {
            users,
            blogs,
            sessions: Arc::new(InMemorySessionStore::new()),
            passwords: Arc::new(Argon2PasswordService::new()),
        }
    }
}

fn in_memory_repos() -> (Arc<dyn UserRepository>, Arc<dyn BlogpostRepository>) {
    (
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(InMemoryBlogpostRepository::new()),
    )
}
