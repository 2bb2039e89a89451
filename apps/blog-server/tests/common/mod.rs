//! Test fixtures: a seeded post store scoped to one test.

#![allow(dead_code)]

use blog_core::domain::{Author, BlogPost};
use blog_server::AppState;

const FIRST_NAMES: [&str; 5] = ["Ada", "Grace", "Alan", "Barbara", "Edsger"];
const LAST_NAMES: [&str; 5] = ["Lovelace", "Hopper", "Turing", "Liskov", "Dijkstra"];

pub const SEED_COUNT: usize = 10;

/// `n` distinct posts with varied authors.
pub fn sample_posts(n: usize) -> Vec<BlogPost> {
    (0..n)
        .map(|i| {
            BlogPost::new(
                format!("Post number {}", i + 1),
                format!("Body of post {}.\nSecond line.", i + 1),
                Author::new(
                    FIRST_NAMES[i % FIRST_NAMES.len()],
                    LAST_NAMES[(i / FIRST_NAMES.len() + i) % LAST_NAMES.len()],
                ),
            )
        })
        .collect()
}

/// A store seeded with [`SEED_COUNT`] posts.
///
/// Every test builds its own fixture and calls [`BlogFixture::teardown`] at
/// the end, so no state leaks between tests.
pub struct BlogFixture {
    pub state: AppState,
    pub seeded: Vec<BlogPost>,
}

impl BlogFixture {
    /// Seeded fixture over a fresh in-memory store.
    pub async fn seeded() -> Self {
        Self::seed_into(AppState::in_memory()).await
    }

    /// Seed the store behind `state`.
    pub async fn seed_into(state: AppState) -> Self {
        let seeded = sample_posts(SEED_COUNT);
        let inserted = state
            .posts
            .insert_many(seeded.clone())
            .await
            .expect("seeding failed");
        assert_eq!(inserted, SEED_COUNT);

        Self { state, seeded }
    }

    pub async fn fetch(&self, id: uuid::Uuid) -> Option<BlogPost> {
        self.state.posts.find_by_id(id).await.expect("lookup failed")
    }

    pub async fn any_post(&self) -> BlogPost {
        self.state
            .posts
            .find_one()
            .await
            .expect("lookup failed")
            .expect("store is empty")
    }

    pub async fn teardown(self) {
        self.state.posts.drop_all().await.expect("teardown failed");
    }
}
