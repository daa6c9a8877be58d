use async_graphql::{Context, ID, InputObject, Object, Result, ResultExt};
use chrono::{DateTime, SecondsFormat, Utc};

use super::{post_service, user_service};
use crate::application::user_service::AuthResult;
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::domain::user::{UpdateUserRequest, User};

pub(crate) fn parse_id(id: &ID) -> Result<i64, DomainError> {
    id.parse::<i64>()
        .map_err(|_| DomainError::InvalidInput(vec![format!("Invalid id: {}", id.as_str())]))
}

fn iso(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) struct UserObject {
    user: User,
    token: Option<String>,
}

impl From<User> for UserObject {
    fn from(user: User) -> Self {
        Self { user, token: None }
    }
}

impl From<AuthResult> for UserObject {
    fn from(result: AuthResult) -> Self {
        Self {
            user: result.user,
            token: Some(result.token),
        }
    }
}

/// A user.
#[Object(name = "User")]
impl UserObject {
    async fn id(&self) -> ID {
        ID(self.user.id.to_string())
    }

    async fn first_name(&self) -> &str {
        &self.user.first_name
    }

    async fn last_name(&self) -> &str {
        &self.user.last_name
    }

    async fn email(&self) -> &str {
        &self.user.email
    }

    /// Storage path of the uploaded avatar.
    async fn avatar(&self) -> Option<&str> {
        self.user.avatar.as_deref()
    }

    async fn created(&self) -> String {
        iso(&self.user.created)
    }

    /// Bearer token, only present on `addUser` and `loginUser` results.
    async fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    async fn posts(&self, ctx: &Context<'_>) -> Result<Vec<PostObject>> {
        let posts = post_service(ctx)
            .list_posts_by_user(self.user.id)
            .await
            .extend()?;
        Ok(posts.into_iter().map(PostObject::from).collect())
    }
}

pub(crate) struct PostObject(Post);

impl From<Post> for PostObject {
    fn from(post: Post) -> Self {
        Self(post)
    }
}

/// This represents a post made by a user.
#[Object(name = "Post")]
impl PostObject {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn post(&self) -> &str {
        &self.0.post
    }

    async fn user_id(&self) -> ID {
        ID(self.0.user_id.to_string())
    }

    async fn created(&self) -> String {
        iso(&self.0.created)
    }

    /// The author, or null once the account is gone.
    async fn user(&self, ctx: &Context<'_>) -> Result<Option<UserObject>> {
        let user = user_service(ctx).get_user(self.0.user_id).await.extend()?;
        Ok(user.map(UserObject::from))
    }
}

/// Fields left out are not changed.
#[derive(InputObject, Default)]
pub(crate) struct UpdateUserInput {
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) password: Option<String>,
}

impl From<UpdateUserInput> for UpdateUserRequest {
    fn from(input: UpdateUserInput) -> Self {
        Self {
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            password: input.password,
        }
    }
}
