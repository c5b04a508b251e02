// src/state.rs
use std::sync::Arc;

use crate::error::AppError;
use crate::services::gemini::LanguageModel;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    model: Option<Arc<dyn LanguageModel>>,
}

impl AppState {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model: Some(model) }
    }

    /// State for a process whose model client failed to build; chat calls return 500.
    pub fn without_model() -> Self {
        Self { model: None }
    }

    pub fn model(&self) -> Result<&dyn LanguageModel, AppError> {
        self.model.as_deref().ok_or(AppError::ModelUninitialized)
    }
}
