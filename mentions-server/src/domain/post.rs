use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) post: String,
    pub(crate) user_id: i64,
    pub(crate) created: DateTime<Utc>,
}

impl Post {
    pub(crate) fn new(
        id: i64,
        post: impl Into<String>,
        user_id: i64,
        created: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        validate_positive_i64("id", id)?;
        validate_positive_i64("user_id", user_id)?;

        Ok(Self {
            id,
            post: post.into(),
            user_id,
            created,
        })
    }

    /// The owner of a post is fixed at creation, so this is the only check
    /// update and delete need.
    pub(crate) fn is_owned_by(&self, caller_id: i64) -> bool {
        self.user_id == caller_id
    }
}

fn validate_positive_i64(field: &'static str, value: i64) -> Result<(), DomainError> {
    if value <= 0 {
        return Err(DomainError::Unexpected(format!(
            "post {field} must be > 0, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::Post;

    #[test]
    fn post_new_keeps_body_verbatim() {
        let post = Post::new(1, "  hello  ", 10, Utc::now()).expect("post should be created");

        assert_eq!(post.id, 1);
        assert_eq!(post.user_id, 10);
        assert_eq!(post.post, "  hello  ");
    }

    #[test]
    fn post_new_rejects_non_positive_user_id() {
        assert!(Post::new(1, "hello", 0, Utc::now()).is_err());
    }

    #[test]
    fn ownership_is_by_user_id() {
        let post = Post::new(3, "hello", 10, Utc::now()).expect("post should be created");
        assert!(post.is_owned_by(10));
        assert!(!post.is_owned_by(11));
    }
}
