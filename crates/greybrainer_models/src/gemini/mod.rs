//! Google Gemini REST integration.

mod client;
mod dto;

pub use client::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiClient};
