use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, PostUpdate};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Returns `false` when nothing matched.
    async fn delete(&self, id: ID) -> Result<bool, RepoError>;
}

/// Post store - the collection of blog posts.
#[async_trait]
pub trait PostRepository: BaseRepository<BlogPost, Uuid> {
    /// Bulk insert, returns the number of posts stored.
    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<usize, RepoError>;

    /// All posts, oldest first.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Any single post, if the collection is not empty.
    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError>;

    /// Apply a partial update. Returns `false` when the post does not exist.
    async fn update_by_id(&self, id: Uuid, update: &PostUpdate) -> Result<bool, RepoError>;

    async fn count(&self) -> Result<u64, RepoError>;

    /// Remove every post, returns how many were removed.
    async fn drop_all(&self) -> Result<u64, RepoError>;
}
