//! In-process stores with the same contract as the Postgres ones.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::data::post_repository::{NewPost, PostFilter, PostPatch, PostRepository};
use crate::data::user_repository::{NewUser, UserCredentials, UserPatch, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::post::Post;
use crate::domain::user::User;

#[derive(Debug)]
struct Table<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            rows: BTreeMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct InMemoryUserRepository {
    table: Arc<Mutex<Table<UserCredentials>>>,
}

impl InMemoryUserRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn password_hash_of(&self, id: i64) -> Option<String> {
        self.table
            .lock()
            .expect("user table mutex poisoned")
            .rows
            .get(&id)
            .map(|creds| creds.password_hash.clone())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
        let mut table = self.table.lock().expect("user table mutex poisoned");
        if table.rows.values().any(|c| c.user.email == input.email) {
            return Err(DomainError::AlreadyExists("email".to_string()));
        }

        let id = table.allocate_id();
        let user = User::new(
            id,
            input.first_name,
            input.last_name,
            input.email,
            None,
            Utc::now(),
        )?;
        table.rows.insert(
            id,
            UserCredentials {
                user: user.clone(),
                password_hash: input.password_hash,
            },
        );
        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let table = self.table.lock().expect("user table mutex poisoned");
        Ok(table.rows.get(&id).map(|c| c.user.clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserCredentials>, DomainError> {
        let table = self.table.lock().expect("user table mutex poisoned");
        Ok(table.rows.values().find(|c| c.user.email == email).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.lock().expect("user table mutex poisoned");
        Ok(table.rows.values().map(|c| c.user.clone()).collect())
    }

    async fn update_user(&self, id: i64, patch: UserPatch) -> Result<bool, DomainError> {
        let mut table = self.table.lock().expect("user table mutex poisoned");
        if let Some(email) = &patch.email
            && table
                .rows
                .values()
                .any(|c| c.user.id != id && &c.user.email == email)
        {
            return Err(DomainError::AlreadyExists("email".to_string()));
        }

        let Some(creds) = table.rows.get_mut(&id) else {
            return Ok(false);
        };
        if let Some(first_name) = patch.first_name {
            creds.user.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            creds.user.last_name = last_name;
        }
        if let Some(email) = patch.email {
            creds.user.email = email;
        }
        if let Some(password_hash) = patch.password_hash {
            creds.password_hash = password_hash;
        }
        if let Some(avatar) = patch.avatar {
            creds.user.avatar = Some(avatar);
        }
        Ok(true)
    }

    async fn delete_user(&self, id: i64) -> Result<bool, DomainError> {
        let mut table = self.table.lock().expect("user table mutex poisoned");
        Ok(table.rows.remove(&id).is_some())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let table = self.table.lock().expect("user table mutex poisoned");
        Ok(table.rows.values().any(|c| c.user.email == email))
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct InMemoryPostRepository {
    table: Arc<Mutex<Table<Post>>>,
}

impl InMemoryPostRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let mut table = self.table.lock().expect("post table mutex poisoned");
        let id = table.allocate_id();
        let post = Post::new(id, input.post, input.user_id, Utc::now())?;
        table.rows.insert(id, post.clone());
        Ok(post)
    }

    async fn get_post(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let table = self.table.lock().expect("post table mutex poisoned");
        Ok(table.rows.get(&id).cloned())
    }

    async fn list_posts(&self, filter: PostFilter) -> Result<Vec<Post>, DomainError> {
        let table = self.table.lock().expect("post table mutex poisoned");
        Ok(table
            .rows
            .values()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect())
    }

    async fn update_post(&self, id: i64, patch: PostPatch) -> Result<bool, DomainError> {
        let mut table = self.table.lock().expect("post table mutex poisoned");
        match table.rows.get_mut(&id) {
            Some(post) => {
                post.post = patch.post;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        let mut table = self.table.lock().expect("post table mutex poisoned");
        Ok(table.rows.remove(&id).is_some())
    }
}
