//! Application state shared across handlers

use std::sync::Arc;

use crate::repositories::ExerciseStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ExerciseStore>,
}

impl AppState {
    pub fn new(store: impl ExerciseStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
