use async_trait::async_trait;

use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) post: String,
    pub(crate) user_id: i64,
}

#[derive(Debug, Clone)]
pub(crate) struct PostPatch {
    pub(crate) post: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct PostFilter {
    pub(crate) user_id: Option<i64>,
}

impl PostFilter {
    pub(crate) fn by_user(user_id: i64) -> Self {
        Self {
            user_id: Some(user_id),
        }
    }

    pub(crate) fn matches(&self, post: &Post) -> bool {
        self.user_id.is_none_or(|user_id| post.user_id == user_id)
    }
}

#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError>;
    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError>;
    async fn list_posts(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError>;
    async fn update_post(&self, id: i64, patch: PostPatch) -> Result<bool, DomainError>;
    async fn delete_post(&self, id: i64) -> Result<bool, DomainError>;
}
