//! Groq integration via its OpenAI-compatible API.

mod driver;
mod dto;

pub use driver::{DEFAULT_GROQ_BASE_URL, DEFAULT_GROQ_MODEL, GroqDriver};
