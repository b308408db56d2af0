//! Stored representation of users and their exercise logs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

/// A single exercise embedded in a user's log
///
/// The date is kept as a calendar date so that range filters compare values
/// rather than rendered strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: NaiveDate,
}

/// A user together with every exercise they logged, in insertion order
#[derive(Debug, Clone)]
pub struct UserLog {
    pub user: User,
    pub log: Vec<LogEntry>,
}
