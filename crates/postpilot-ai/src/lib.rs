//! Content generation gateway for postpilot.
//!
//! Submits composed prompt pairs to the Anthropic Messages API and
//! normalizes every outcome — provider errors, transport failures, missing
//! credentials — into [`GenerationOutcome`]. Nothing in this crate aborts
//! the caller's request: every failure path carries locally synthesized
//! fallback text so the end user always receives something usable. One
//! attempt per call, no retries.

pub mod client;
pub mod error;
pub mod generate;

pub use client::{AnthropicClient, Completion};
pub use error::AiError;
pub use generate::{ContentGenerator, GenerationOutcome};
