pub mod chatbot;
pub mod error_mapper;
pub mod gemini;
pub mod normalizer;
pub mod prompt_router;
