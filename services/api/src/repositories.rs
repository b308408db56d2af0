//! Repositories for database operations
//!
//! Exercises are embedded in the owning user's row: `log` is a JSONB array
//! of entries and `log_count` a denormalized counter. Appending touches both
//! in a single statement so the counter can never drift from the array.

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use sqlx::{FromRow, PgPool, migrate::Migrator, types::Json};
use tracing::info;
use uuid::Uuid;

use crate::models::{LogEntry, User, UserLog};

#[cfg(test)]
pub mod memory;

static MIGRATOR: Migrator = sqlx::migrate!();

/// Storage capability behind the exercise API
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    /// Persist a new user and return it with its generated id
    async fn create_user(&self, username: &str) -> DatabaseResult<User>;

    /// Every user, in creation order
    async fn list_users(&self) -> DatabaseResult<Vec<User>>;

    /// Append an exercise to a user's log.
    ///
    /// Returns `None`, writing nothing, when the user does not exist.
    async fn append_exercise(&self, user_id: Uuid, entry: &LogEntry)
    -> DatabaseResult<Option<User>>;

    /// A user with their full log, or `None` when the user does not exist
    async fn find_log(&self, user_id: Uuid) -> DatabaseResult<Option<UserLog>>;

    /// Check that the store is reachable
    async fn health_check(&self) -> DatabaseResult<bool>;
}

/// Apply pending schema migrations
pub async fn run_migrations(pool: &PgPool) -> DatabaseResult<()> {
    MIGRATOR
        .run(pool)
        .await
        .map_err(|e| DatabaseError::Migration(e.to_string()))?;

    info!("Database migrations applied");
    Ok(())
}

#[derive(FromRow)]
struct UserLogRow {
    id: Uuid,
    username: String,
    log: Json<Vec<LogEntry>>,
}

impl From<UserLogRow> for UserLog {
    fn from(row: UserLogRow) -> Self {
        Self {
            user: User {
                id: row.id,
                username: row.username,
            },
            log: row.log.0,
        }
    }
}

/// User repository storing exercise logs embedded in the user row
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExerciseStore for UserRepository {
    async fn create_user(&self, username: &str) -> DatabaseResult<User> {
        info!("Creating new user: {}", username);

        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            RETURNING id, username
            "#,
        )
        .bind(username)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn list_users(&self) -> DatabaseResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, username
            FROM users
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn append_exercise(
        &self,
        user_id: Uuid,
        entry: &LogEntry,
    ) -> DatabaseResult<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET log = log || jsonb_build_array($2::jsonb),
                log_count = log_count + 1
            WHERE id = $1
            RETURNING id, username
            "#,
        )
        .bind(user_id)
        .bind(Json(entry))
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)
    }

    async fn find_log(&self, user_id: Uuid) -> DatabaseResult<Option<UserLog>> {
        let row = sqlx::query_as::<_, UserLogRow>(
            r#"
            SELECT id, username, log
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(row.map(UserLog::from))
    }

    async fn health_check(&self) -> DatabaseResult<bool> {
        common::database::health_check(&self.pool).await
    }
}
