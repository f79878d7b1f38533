use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Maximum title length, in characters.
pub const MAX_TITLE_CHARS: usize = 64;

/// Blogpost entity.
///
/// `date` and `author` are set at creation and never change afterwards.
/// `edited` is true exactly when `last_edit` is non-null.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blogpost {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    pub author: Uuid,
    pub edited: bool,
    pub last_edit: Option<DateTime<Utc>>,
}

/// Partial update for a blogpost. Fields left as `None` are untouched.
#[derive(Debug, Clone, Default)]
pub struct BlogpostUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl Blogpost {
    /// Create a new, never-edited post authored by `author`.
    pub fn new(author: Uuid, title: String, body: String) -> Result<Self, DomainError> {
        validate_title(&title)?;

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            body,
            date: Utc::now(),
            author,
            edited: false,
            last_edit: None,
        })
    }

    /// Apply a partial update and mark the post as edited.
    ///
    /// Each provided field is assigned individually; omitted fields keep
    /// their current value. Any successful update sets `edited` and stamps
    /// `last_edit`, even if no field was provided.
    pub fn apply(&mut self, update: BlogpostUpdate) -> Result<(), DomainError> {
        if let Some(title) = update.title {
            validate_title(&title)?;
            self.title = title;
        }
        if let Some(body) = update.body {
            self.body = body;
        }

        self.edited = true;
        self.last_edit = Some(Utc::now());
        Ok(())
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(DomainError::Validation(format!(
            "Title must be at most {} characters",
            MAX_TITLE_CHARS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_is_unedited() {
        let author = Uuid::new_v4();
        let post = Blogpost::new(author, "Hello".into(), "World".into()).unwrap();

        assert_eq!(post.author, author);
        assert!(!post.edited);
        assert!(post.last_edit.is_none());
    }

    #[test]
    fn new_post_rejects_overlong_title() {
        let title = "x".repeat(MAX_TITLE_CHARS + 1);
        let result = Blogpost::new(Uuid::new_v4(), title, "body".into());

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn apply_updates_only_provided_fields() {
        let mut post = Blogpost::new(Uuid::new_v4(), "T".into(), "B".into()).unwrap();

        post.apply(BlogpostUpdate {
            title: Some("T2".into()),
            body: None,
        })
        .unwrap();

        assert_eq!(post.title, "T2");
        assert_eq!(post.body, "B");
        assert!(post.edited);
        let last_edit = post.last_edit.expect("last_edit set on update");
        assert!(last_edit >= post.date);
    }

    #[test]
    fn apply_with_no_fields_still_marks_edited() {
        let mut post = Blogpost::new(Uuid::new_v4(), "T".into(), "B".into()).unwrap();

        post.apply(BlogpostUpdate::default()).unwrap();

        assert!(post.edited);
        assert!(post.last_edit.is_some());
    }

    #[test]
    fn apply_rejects_overlong_title_and_leaves_post_unchanged() {
        let mut post = Blogpost::new(Uuid::new_v4(), "T".into(), "B".into()).unwrap();

        let result = post.apply(BlogpostUpdate {
            title: Some("x".repeat(MAX_TITLE_CHARS + 1)),
            body: Some("ignored".into()),
        });

        assert!(result.is_err());
        assert_eq!(post.title, "T");
        assert_eq!(post.body, "B");
        assert!(!post.edited);
    }
}
