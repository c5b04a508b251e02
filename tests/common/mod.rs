#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use vanakkam_backend::services::gemini::{LanguageModel, ModelError};
use vanakkam_backend::state::{AppState, SharedState};

pub enum Reply {
    Text(String),
    Empty,
    Fail(String),
}

/// Records every prompt it gets and answers with a canned reply.
pub struct MockModel {
    reply: Reply,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockModel {
    pub fn replying(text: &str) -> Arc<Self> {
        Self::with(Reply::Text(text.to_string()))
    }

    pub fn failing(raw: &str) -> Arc<Self> {
        Self::with(Reply::Fail(raw.to_string()))
    }

    pub fn empty() -> Arc<Self> {
        Self::with(Reply::Empty)
    }

    fn with(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LanguageModel for MockModel {
    async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::Empty => Err(ModelError::Empty),
            Reply::Fail(raw) => Err(ModelError::Upstream(raw.clone())),
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

pub fn state_with(model: Arc<MockModel>) -> SharedState {
    Arc::new(AppState::new(model))
}
