use async_graphql::{Context, ID, Object, Result, ResultExt};

use super::types::{PostObject, UserObject, parse_id};
use super::{post_service, user_service};

/// World-readable lookups; no caller identity is required.
#[derive(Default)]
pub(crate) struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single post.
    async fn post(&self, ctx: &Context<'_>, id: ID) -> Result<Option<PostObject>> {
        let id = parse_id(&id).extend()?;
        let post = post_service(ctx).get_post(id).await.extend()?;
        Ok(post.map(PostObject::from))
    }

    /// List of all posts.
    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostObject>> {
        let posts = post_service(ctx).list_posts().await.extend()?;
        Ok(posts.into_iter().map(PostObject::from).collect())
    }

    /// A single user.
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<UserObject>> {
        let id = parse_id(&id).extend()?;
        let user = user_service(ctx).get_user(id).await.extend()?;
        Ok(user.map(UserObject::from))
    }

    /// List of all users.
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<UserObject>> {
        let users = user_service(ctx).list_users().await.extend()?;
        Ok(users.into_iter().map(UserObject::from).collect())
    }
}
