use std::sync::Arc;

use tracing::{info, warn};

use crate::data::post_repository::{NewPost, PostFilter, PostPatch, PostRepository};
use crate::data::user_repository::UserRepository;
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::infrastructure::jwt::Identity;

const ACCOUNT_GONE: &str = "account no longer exists";

pub(crate) struct PostService<R: PostRepository + ?Sized> {
    repo: Arc<R>,
    users: Arc<dyn UserRepository>,
}

impl<R: PostRepository + ?Sized> PostService<R> {
    pub(crate) fn new(repo: Arc<R>, users: Arc<dyn UserRepository>) -> Self {
        Self { repo, users }
    }

    pub(crate) async fn add_post(&self, caller: &Identity, body: String) -> Result<Post, DomainError> {
        self.ensure_caller_exists(caller).await?;

        let post = self
            .repo
            .create_post(NewPost {
                post: body,
                user_id: caller.id,
            })
            .await?;
        info!(post_id = post.id, user_id = caller.id, "post created");
        Ok(post)
    }

    pub(crate) async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        self.repo.get_post(id).await
    }

    pub(crate) async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.list_posts(PostFilter::default()).await
    }

    pub(crate) async fn list_posts_by_user(&self, user_id: i64) -> Result<Vec<Post>, DomainError> {
        self.repo.list_posts(PostFilter::by_user(user_id)).await
    }

    /// Replaces the body only; owner and creation time are kept.
    pub(crate) async fn update_post(
        &self,
        caller: &Identity,
        id: i64,
        body: String,
    ) -> Result<Post, DomainError> {
        let mut post = self.load_owned(caller, id).await?;

        let patch = PostPatch { post: body.clone() };
        if !self.repo.update_post(id, patch).await? {
            return Err(not_found(id));
        }
        info!(post_id = id, user_id = caller.id, "post updated");

        post.post = body;
        Ok(post)
    }

    pub(crate) async fn delete_post(&self, caller: &Identity, id: i64) -> Result<Post, DomainError> {
        let post = self.load_owned(caller, id).await?;

        if !self.repo.delete_post(id).await? {
            return Err(not_found(id));
        }
        info!(post_id = id, user_id = caller.id, "post deleted");

        Ok(post)
    }

    /// A token outlives its account; writes from a deleted user are refused.
    async fn ensure_caller_exists(&self, caller: &Identity) -> Result<(), DomainError> {
        if self.users.find_by_id(caller.id).await?.is_none() {
            warn!(caller_id = caller.id, "post mutation rejected: caller account is gone");
            return Err(DomainError::Unauthenticated(ACCOUNT_GONE));
        }
        Ok(())
    }

    async fn load_owned(&self, caller: &Identity, id: i64) -> Result<Post, DomainError> {
        self.ensure_caller_exists(caller).await?;

        let post = self.repo.get_post(id).await?.ok_or_else(|| not_found(id))?;

        if !post.is_owned_by(caller.id) {
            warn!(
                post_id = id,
                caller_id = caller.id,
                owner_id = post.user_id,
                "post mutation rejected: not the owner"
            );
            return Err(DomainError::Forbidden);
        }
        Ok(post)
    }
}

fn not_found(id: i64) -> DomainError {
    DomainError::NotFound(format!("post id: {id}"))
}
