use blog_core::domain::{Author, BlogPost, PostUpdate};
use blog_core::ports::{BaseRepository, PostRepository};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

use crate::database::entity::post::{self, AuthorDocument};
use crate::database::postgres_repo::PostgresPostRepository;

fn sample_model(title: &str) -> post::Model {
    post::Model {
        id: uuid::Uuid::new_v4(),
        title: title.to_owned(),
        content: "Content".to_owned(),
        author: AuthorDocument {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
        },
        created: chrono::Utc::now().into(),
    }
}

fn exec_result(rows_affected: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected,
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let model = sample_model("Test Post");
    let post_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<BlogPost> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, post_id);
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.author, Author::new("Ada", "Lovelace"));
}

#[tokio::test]
async fn test_find_by_id_missing() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<BlogPost> = repo.find_by_id(uuid::Uuid::new_v4()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_find_all_maps_every_row() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![sample_model("First"), sample_model("Second")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo.find_all().await.unwrap();
    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_insert_returns_stored_post() {
    let model = sample_model("Inserted");
    let post: BlogPost = model.clone().into();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let saved = repo.insert(post.clone()).await.unwrap();
    assert_eq!(saved.id, post.id);
    assert_eq!(saved.title, "Inserted");
}

#[tokio::test]
async fn test_insert_many_empty_is_noop() {
    // No results queued: any query would fail.
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    let repo = PostgresPostRepository::new(db);

    assert_eq!(repo.insert_many(Vec::new()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_update_by_id_reports_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![exec_result(1), exec_result(0)])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let update = PostUpdate {
        title: Some("New Title".to_string()),
        content: Some("New content".to_string()),
    };

    assert!(repo.update_by_id(uuid::Uuid::new_v4(), &update).await.unwrap());
    assert!(!repo.update_by_id(uuid::Uuid::new_v4(), &update).await.unwrap());
}

#[tokio::test]
async fn test_empty_update_checks_existence() {
    let model = sample_model("Unchanged");
    let id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.update_by_id(id, &PostUpdate::default()).await.unwrap());
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![exec_result(1), exec_result(0)])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let id = uuid::Uuid::new_v4();

    let removed = BaseRepository::<BlogPost, uuid::Uuid>::delete(&repo, id).await;
    assert!(removed.unwrap());

    let removed = BaseRepository::<BlogPost, uuid::Uuid>::delete(&repo, id).await;
    assert!(!removed.unwrap());
}

#[tokio::test]
async fn test_drop_all_returns_removed_count() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![exec_result(10)])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert_eq!(repo.drop_all().await.unwrap(), 10);
}
