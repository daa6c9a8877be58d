use async_graphql::{Context, ID, Object, Result, ResultExt, Upload};

use super::context::require_identity;
use super::types::{PostObject, UpdateUserInput, UserObject, parse_id};
use super::{post_service, user_service};
use crate::domain::error::DomainError;
use crate::domain::user::{LoginRequest, SignupRequest};
use crate::infrastructure::uploads::FileUpload;

/// Writes. Everything except `addUser` and `loginUser` needs a bearer token.
#[derive(Default)]
pub(crate) struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Add a post owned by the caller.
    async fn add_post(&self, ctx: &Context<'_>, post: String) -> Result<PostObject> {
        let caller = require_identity(ctx).extend()?;
        let created = post_service(ctx).add_post(caller, post).await.extend()?;
        Ok(created.into())
    }

    /// Delete one of the caller's posts and return it.
    async fn delete_post(&self, ctx: &Context<'_>, id: ID) -> Result<PostObject> {
        let caller = require_identity(ctx).extend()?;
        let id = parse_id(&id).extend()?;
        let deleted = post_service(ctx).delete_post(caller, id).await.extend()?;
        Ok(deleted.into())
    }

    /// Replace the body of one of the caller's posts.
    async fn update_post(&self, ctx: &Context<'_>, id: ID, post: String) -> Result<PostObject> {
        let caller = require_identity(ctx).extend()?;
        let id = parse_id(&id).extend()?;
        let updated = post_service(ctx)
            .update_post(caller, id, post)
            .await
            .extend()?;
        Ok(updated.into())
    }

    /// Sign up. Returns the new user with a token.
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        first_name: String,
        last_name: String,
        email: String,
        password: String,
        avatar: Option<Upload>,
    ) -> Result<UserObject> {
        let avatar = match avatar {
            Some(upload) => {
                let value = upload.value(ctx).map_err(|err| {
                    DomainError::InvalidInput(vec![format!("Invalid avatar upload: {err}")])
                });
                let value = value.extend()?;
                Some(FileUpload::new(
                    value.filename,
                    tokio::fs::File::from_std(value.content),
                ))
            }
            None => None,
        };

        let req = SignupRequest {
            first_name,
            last_name,
            email,
            password,
        };
        let result = user_service(ctx).sign_up(req, avatar).await.extend()?;
        Ok(result.into())
    }

    /// Delete the caller's own account.
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> Result<UserObject> {
        let caller = require_identity(ctx).extend()?;
        let id = parse_id(&id).extend()?;
        let deleted = user_service(ctx).delete_user(caller, id).await.extend()?;
        Ok(deleted.into())
    }

    /// Update the caller's own account; only the provided fields change.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        user: UpdateUserInput,
    ) -> Result<UserObject> {
        let caller = require_identity(ctx).extend()?;
        let id = parse_id(&id).extend()?;
        let updated = user_service(ctx)
            .update_user(caller, id, user.into())
            .await
            .extend()?;
        Ok(updated.into())
    }

    /// Exchange credentials for a token.
    async fn login_user(
        &self,
        ctx: &Context<'_>,
        email: String,
        password: String,
    ) -> Result<UserObject> {
        let req = LoginRequest { email, password };
        let result = user_service(ctx).login(req).await.extend()?;
        Ok(result.into())
    }
}
