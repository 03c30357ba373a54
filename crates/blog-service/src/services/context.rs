//! Service context - dependency container for services
//!
//! Holds the repositories and shared resources needed by services.

use std::sync::Arc;

use blog_common::AppConfig;
use blog_core::traits::{CommentRepository, PostRepository, TagRepository};
use blog_db::{
    create_pool, DatabaseConfig, PgCommentRepository, PgPool, PgPostRepository, PgTagRepository,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// Repositories are held behind trait objects so tests can substitute
/// in-memory implementations.
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    post_repo: Arc<dyn PostRepository>,
    tag_repo: Arc<dyn TagRepository>,
    comment_repo: Arc<dyn CommentRepository>,
}

impl ServiceContext {
    /// Create a new service context with explicit dependencies
    pub fn new(
        pool: PgPool,
        post_repo: Arc<dyn PostRepository>,
        tag_repo: Arc<dyn TagRepository>,
        comment_repo: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            pool,
            post_repo,
            tag_repo,
            comment_repo,
        }
    }

    /// Build a context from environment configuration.
    ///
    /// Loads [`AppConfig`], opens the connection pool, and applies pending
    /// migrations before wiring the PostgreSQL repositories.
    pub async fn from_env() -> Result<Self, ContextError> {
        let config = AppConfig::from_env()?;

        let db_config = DatabaseConfig {
            url: config.database.url,
            max_connections: config.database.max_connections,
            min_connections: config.database.min_connections,
            ..DatabaseConfig::default()
        };
        let pool = create_pool(&db_config).await?;
        blog_db::MIGRATOR.run(&pool).await?;

        Ok(Self::from_pool(pool))
    }

    /// Create a context backed by the PostgreSQL repositories
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            post_repo: Arc::new(PgPostRepository::new(pool.clone())),
            tag_repo: Arc::new(PgTagRepository::new(pool.clone())),
            comment_repo: Arc::new(PgCommentRepository::new(pool.clone())),
            pool,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the tag repository
    pub fn tag_repo(&self) -> &dyn TagRepository {
        self.tag_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }
}

/// Errors building a context from the environment
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error(transparent)]
    Config(#[from] blog_common::ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom repositories
///
/// Missing repositories fall back to the PostgreSQL implementations
/// backed by the configured pool.
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    post_repo: Option<Arc<dyn PostRepository>>,
    tag_repo: Option<Arc<dyn TagRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            post_repo: None,
            tag_repo: None,
            comment_repo: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn tag_repo(mut self, repo: Arc<dyn TagRepository>) -> Self {
        self.tag_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    /// Build the context.
    ///
    /// # Errors
    /// Fails when no pool was provided.
    pub fn build(self) -> Result<ServiceContext, &'static str> {
        let pool = self.pool.ok_or("pool is required")?;

        Ok(ServiceContext {
            post_repo: self
                .post_repo
                .unwrap_or_else(|| Arc::new(PgPostRepository::new(pool.clone()))),
            tag_repo: self
                .tag_repo
                .unwrap_or_else(|| Arc::new(PgTagRepository::new(pool.clone()))),
            comment_repo: self
                .comment_repo
                .unwrap_or_else(|| Arc::new(PgCommentRepository::new(pool.clone()))),
            pool,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
