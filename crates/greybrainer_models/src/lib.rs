//! Model gateways for Greybrainer.
//!
//! Two interchangeable [`LlmGateway`](greybrainer_interface::LlmGateway)
//! implementations talk to the providers' REST APIs:
//!
//! - [`GeminiClient`] - Google Gemini `generateContent`, with Google Search
//!   grounding surfaced as citations
//! - [`GroqDriver`] - Groq's OpenAI-compatible chat completions endpoint
//!
//! [`MeteredGateway`] wraps either one to report every successful call to a
//! [`UsageSink`](greybrainer_interface::UsageSink).
//!
//! # Example
//!
//! ```no_run
//! use greybrainer_core::GenerateOptions;
//! use greybrainer_interface::LlmGateway;
//! use greybrainer_models::GeminiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::new("gemini-2.5-flash")?;
//! let options = GenerateOptions::new("demo").with_use_search(true);
//! let response = client.generate("Who directed Dune (2021)?", &options).await?;
//! println!("{} ({} sources)", response.text, response.citations.len());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod groq;
mod http;
mod metered;
mod metrics;
mod provider;

pub use gemini::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, GeminiClient};
pub use groq::{DEFAULT_GROQ_BASE_URL, DEFAULT_GROQ_MODEL, GroqDriver};
pub use metered::MeteredGateway;
pub use metrics::{LlmMetrics, classify_error};
pub use provider::Provider;
