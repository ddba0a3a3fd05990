//! In-process user store for tests and local runs without Postgres.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NewUser, UserRow, UserStore};
use crate::error::{AppError, AppResult};

/// Users keyed by email; enforces the same uniqueness rule as the `users` table.
#[derive(Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, UserRow>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, user: NewUser<'_>) -> AppResult<UserRow> {
        let mut users = self.users.write().await;
        if users.contains_key(user.email) {
            return Err(AppError::Store(
                "Unique constraint failed on the fields: (`email`)".to_string(),
            ));
        }
        let row = UserRow {
            id: Uuid::new_v4(),
            name: user.name.to_string(),
            email: user.email.to_string(),
            password_hash: user.password_hash.to_string(),
            created_at: Utc::now(),
        };
        users.insert(row.email.clone(), row.clone());
        Ok(row)
    }

    async fn find_user_by_email(&self, email: &str) -> AppResult<Option<UserRow>> {
        Ok(self.users.read().await.get(email).cloned())
    }
}
