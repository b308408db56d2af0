//! In-memory store used by the HTTP tests

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::ExerciseStore;
use crate::models::{LogEntry, User, UserLog};

#[derive(Default)]
pub struct MemoryStore {
    users: RwLock<Vec<UserLog>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Make every subsequent call fail as if the database were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Total number of stored exercises across all users
    pub async fn exercise_count(&self) -> usize {
        self.users.read().await.iter().map(|u| u.log.len()).sum()
    }

    fn check_available(&self) -> DatabaseResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DatabaseError::Connection(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ExerciseStore for MemoryStore {
    async fn create_user(&self, username: &str) -> DatabaseResult<User> {
        self.check_available()?;

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
        };
        self.users.write().await.push(UserLog {
            user: user.clone(),
            log: Vec::new(),
        });
        Ok(user)
    }

    async fn list_users(&self) -> DatabaseResult<Vec<User>> {
        self.check_available()?;

        Ok(self.users.read().await.iter().map(|u| u.user.clone()).collect())
    }

    async fn append_exercise(
        &self,
        user_id: Uuid,
        entry: &LogEntry,
    ) -> DatabaseResult<Option<User>> {
        self.check_available()?;

        let mut users = self.users.write().await;
        Ok(users
            .iter_mut()
            .find(|u| u.user.id == user_id)
            .map(|u| {
                u.log.push(entry.clone());
                u.user.clone()
            }))
    }

    async fn find_log(&self, user_id: Uuid) -> DatabaseResult<Option<UserLog>> {
        self.check_available()?;

        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.user.id == user_id)
            .cloned())
    }

    async fn health_check(&self) -> DatabaseResult<bool> {
        self.check_available()?;
        Ok(true)
    }
}
