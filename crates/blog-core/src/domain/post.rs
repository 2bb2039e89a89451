use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author embedded in every post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display form used on the wire: "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// BlogPost entity - the only persisted resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post with a generated ID and creation timestamp.
    pub fn new(title: String, content: String, author: Author) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            author,
            created: Utc::now(),
        }
    }

    pub fn apply(&mut self, update: &PostUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(content) = &update.content {
            self.content = content.clone();
        }
    }
}

/// Partial update of a post. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(Author::new("Ada", "Lovelace").full_name(), "Ada Lovelace");
        assert_eq!(Author::new("Plato", "").full_name(), "Plato");
    }

    #[test]
    fn test_author_uses_camel_case() {
        let json = serde_json::to_value(Author::new("Ada", "Lovelace")).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
    }

    #[test]
    fn test_apply_partial_update() {
        let mut post = BlogPost::new(
            "Old".to_string(),
            "Body".to_string(),
            Author::new("Ada", "Lovelace"),
        );
        let before = post.clone();

        post.apply(&PostUpdate {
            title: Some("New".to_string()),
            content: None,
        });

        assert_eq!(post.title, "New");
        assert_eq!(post.content, before.content);
        assert_eq!(post.author, before.author);
        assert_eq!(post.id, before.id);
        assert_eq!(post.created, before.created);
    }

    #[test]
    fn test_empty_update() {
        assert!(PostUpdate::default().is_empty());
        assert!(
            !PostUpdate {
                title: None,
                content: Some("x".to_string()),
            }
            .is_empty()
        );
    }
}
