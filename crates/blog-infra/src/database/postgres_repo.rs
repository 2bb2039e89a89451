//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use blog_core::domain::{BlogPost, PostUpdate};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<usize, RepoError> {
        if posts.is_empty() {
            return Ok(0);
        }

        let count = posts.len();
        let models: Vec<post::ActiveModel> = posts.into_iter().map(Into::into).collect();
        PostEntity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count, "Inserted posts");
        Ok(count)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Created)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let result = PostEntity::find()
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn update_by_id(&self, id: Uuid, update: &PostUpdate) -> Result<bool, RepoError> {
        if update.is_empty() {
            let existing = <Self as BaseRepository<BlogPost, Uuid>>::find_by_id(self, id).await?;
            return Ok(existing.is_some());
        }

        let mut query = PostEntity::update_many().filter(post::Column::Id.eq(id));
        if let Some(title) = &update.title {
            query = query.col_expr(post::Column::Title, Expr::value(title.clone()));
        }
        if let Some(content) = &update.content {
            query = query.col_expr(post::Column::Content, Expr::value(content.clone()));
        }

        let result = query.exec(&self.db).await.map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find()
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn drop_all(&self) -> Result<u64, RepoError> {
        let result = PostEntity::delete_many()
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::warn!(removed = result.rows_affected, "Dropped all posts");
        Ok(result.rows_affected)
    }
}
