//! API models for request and response payloads

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::dates::to_date_string;

pub mod exercise;

pub use exercise::{LogEntry, User, UserLog};

/// Request for user creation
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: Option<String>,
}

/// Response for a newly created user
#[derive(Debug, Serialize)]
pub struct CreateUserResponse {
    pub username: String,
    pub id: Uuid,
}

/// Entry of the user listing
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Request for logging an exercise
///
/// `duration` is kept as raw text because HTML forms send it as a string
/// while JSON clients usually send a number.
#[derive(Debug, Deserialize)]
pub struct NewExerciseRequest {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub duration: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// Response for a logged exercise
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    pub id: Uuid,
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl ExerciseResponse {
    pub fn new(user: User, entry: LogEntry) -> Self {
        Self {
            id: user.id,
            username: user.username,
            description: entry.description,
            duration: entry.duration,
            date: to_date_string(entry.date),
        }
    }
}

/// Query parameters for log retrieval
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// One exercise as rendered in a log response
#[derive(Debug, Serialize)]
pub struct LogItem {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<LogEntry> for LogItem {
    fn from(entry: LogEntry) -> Self {
        Self {
            description: entry.description,
            duration: entry.duration,
            date: to_date_string(entry.date),
        }
    }
}

/// Response for log retrieval
#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub id: Uuid,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogItem>,
}

impl LogResponse {
    /// Build a response; `count` is always the number of returned entries.
    pub fn new(user: User, entries: Vec<LogEntry>) -> Self {
        let log: Vec<LogItem> = entries.into_iter().map(LogItem::from).collect();
        Self {
            id: user.id,
            username: user.username,
            count: log.len(),
            log,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn loose_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseValue>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        LooseValue::Text(s) => s,
        LooseValue::Integer(n) => n.to_string(),
        LooseValue::Float(f) => f.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn duration_accepts_numbers_and_strings() {
        let from_number: NewExerciseRequest =
            serde_json::from_value(json!({"description": "run", "duration": 30})).unwrap();
        assert_eq!(from_number.duration.as_deref(), Some("30"));

        let from_string: NewExerciseRequest =
            serde_json::from_value(json!({"description": "run", "duration": "45"})).unwrap();
        assert_eq!(from_string.duration.as_deref(), Some("45"));

        let missing: NewExerciseRequest =
            serde_json::from_value(json!({"description": "run"})).unwrap();
        assert!(missing.duration.is_none());
    }

    #[test]
    fn log_response_counts_returned_entries() {
        let user = User {
            id: Uuid::new_v4(),
            username: "ada".to_string(),
        };
        let entry = LogEntry {
            description: "swim".to_string(),
            duration: 20,
            date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
        };

        let response = LogResponse::new(user, vec![entry.clone(), entry]);
        assert_eq!(response.count, 2);
        assert_eq!(response.log[0].date, "Sun Jan 15 2023");
    }
}
