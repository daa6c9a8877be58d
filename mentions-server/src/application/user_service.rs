use std::sync::Arc;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
        rand_core::OsRng,
    },
};
use tracing::{info, warn};

use crate::data::user_repository::{NewUser, UserPatch, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::user::{LoginRequest, SignupRequest, UpdateUserRequest, User};
use crate::infrastructure::jwt::{Identity, JwtService};
use crate::infrastructure::uploads::{FileUpload, UploadKind, UploadStorage};

/// A user together with a freshly issued token.
#[derive(Debug, Clone)]
pub(crate) struct AuthResult {
    pub(crate) user: User,
    pub(crate) token: String,
}

pub(crate) struct UserService<R: UserRepository + ?Sized> {
    repo: Arc<R>,
    jwt: Arc<JwtService>,
    uploads: UploadStorage,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    const DUMMY_PASSWORD_HASH: &'static str = "$argon2id$v=19$m=19456,t=2,p=1$MDEyMzQ1Njc4OWFiY2RlZg$gwN6hT1sNdk9kI95f7n2Gl3fL0qRmBf2Ffkj2r90/0M";

    pub(crate) fn new(repo: Arc<R>, jwt: Arc<JwtService>, uploads: UploadStorage) -> Self {
        Self { repo, jwt, uploads }
    }

    pub(crate) async fn sign_up(
        &self,
        req: SignupRequest,
        avatar: Option<FileUpload>,
    ) -> Result<AuthResult, DomainError> {
        let req = req.validate()?;

        if self.repo.exists_by_email(&req.email).await? {
            return Err(DomainError::AlreadyExists("email".to_string()));
        }

        let password_hash = hash_password(req.password).await?;
        let mut user = self
            .repo
            .create_user(NewUser {
                first_name: req.first_name,
                last_name: req.last_name,
                email: req.email,
                password_hash,
            })
            .await?;
        info!(user_id = user.id, "user signed up");

        let token = self.issue_token(&user)?;

        if let Some(upload) = avatar {
            // The user stays persisted without an avatar if this fails.
            let path = self
                .uploads
                .store(UploadKind::Avatar, user.id, upload)
                .await
                .inspect_err(|err| {
                    warn!(user_id = user.id, error = %err, "avatar upload failed after signup");
                })?;
            self.repo
                .update_user(
                    user.id,
                    UserPatch {
                        avatar: Some(path.clone()),
                        ..Default::default()
                    },
                )
                .await?;
            user.avatar = Some(path);
        }

        Ok(AuthResult { user, token })
    }

    pub(crate) async fn login(&self, req: LoginRequest) -> Result<AuthResult, DomainError> {
        let req = req.validate()?;

        let user_creds = match self.repo.find_by_email(&req.email).await? {
            Some(user_creds) => user_creds,
            None => {
                // keep timing close to the wrong-password path
                match verify_password(req.password, Self::DUMMY_PASSWORD_HASH.to_string()).await {
                    Ok(()) | Err(DomainError::Unauthenticated(_)) => {}
                    Err(err) => return Err(err),
                }
                return Err(DomainError::invalid_credentials());
            }
        };

        verify_password(req.password, user_creds.password_hash).await?;

        let token = self.issue_token(&user_creds.user)?;
        info!(user_id = user_creds.user.id, "user logged in");

        Ok(AuthResult {
            user: user_creds.user,
            token,
        })
    }

    pub(crate) async fn get_user(&self, id: i64) -> Result<Option<User>, DomainError> {
        self.repo.find_by_id(id).await
    }

    pub(crate) async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.repo.list_users().await
    }

    pub(crate) async fn update_user(
        &self,
        caller: &Identity,
        id: i64,
        req: UpdateUserRequest,
    ) -> Result<User, DomainError> {
        let current = self.load_owned(caller, id).await?;

        let req = req.validate()?;
        if req.is_empty() {
            return Ok(current);
        }

        if let Some(email) = &req.email
            && email != &current.email
            && self.repo.exists_by_email(email).await?
        {
            return Err(DomainError::AlreadyExists("email".to_string()));
        }

        let password_hash = match req.password {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };
        let patch = UserPatch {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password_hash,
            avatar: None,
        };

        if !self.repo.update_user(id, patch).await? {
            return Err(not_found(id));
        }
        info!(user_id = id, "user updated");

        self.repo.find_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    pub(crate) async fn delete_user(&self, caller: &Identity, id: i64) -> Result<User, DomainError> {
        let user = self.load_owned(caller, id).await?;

        if !self.repo.delete_user(id).await? {
            return Err(not_found(id));
        }
        info!(user_id = id, "user deleted");

        Ok(user)
    }

    /// Reads the stored record and checks it belongs to the caller.
    async fn load_owned(&self, caller: &Identity, id: i64) -> Result<User, DomainError> {
        let user = self.repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        if !user.is_owned_by(caller.id) {
            warn!(user_id = id, caller_id = caller.id, "user mutation rejected: not the owner");
            return Err(DomainError::Forbidden);
        }
        Ok(user)
    }

    fn issue_token(&self, user: &User) -> Result<String, DomainError> {
        self.jwt
            .issue(&Identity {
                id: user.id,
                email: user.email.clone(),
            })
            .map_err(|err| DomainError::Unexpected(err.to_string()))
    }
}

fn not_found(id: i64) -> DomainError {
    DomainError::NotFound(format!("user id: {id}"))
}

pub(crate) async fn hash_password(raw_password: String) -> Result<String, DomainError> {
    tokio::task::spawn_blocking(move || -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = argon2()?
            .hash_password(raw_password.as_bytes(), &salt)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        Ok(password_hash.to_string())
    })
    .await
    .map_err(|err| DomainError::Unexpected(err.to_string()))?
}

pub(crate) async fn verify_password(
    raw_password: String,
    password_hash: String,
) -> Result<(), DomainError> {
    tokio::task::spawn_blocking(move || -> Result<(), DomainError> {
        let parsed_hash = PasswordHash::new(&password_hash)
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;
        argon2()?
            .verify_password(raw_password.as_bytes(), &parsed_hash)
            .map_err(|err| match err {
                PasswordHashError::Password => DomainError::invalid_credentials(),
                _ => DomainError::Unexpected(err.to_string()),
            })
    })
    .await
    .map_err(|err| DomainError::Unexpected(err.to_string()))?
}

fn argon2() -> Result<Argon2<'static>, DomainError> {
    let params =
        Params::new(19 * 1024, 2, 1, None).map_err(|err| DomainError::Unexpected(err.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}
