//! Data Transfer Objects - request/response types for the posts API.

use serde::{Deserialize, Serialize};

/// Author as sent by clients on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Body of `POST /posts`. Fields are optional here so that every missing one
/// can be reported at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorInput>,
}

/// Body of `PUT /posts/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    /// Must match the path id when present.
    pub id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// External representation of a post. `author` is the display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: String,
}
