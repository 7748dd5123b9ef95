//! Layered prompt composition for postpilot.
//!
//! Builds the `{system, user}` prompt pair sent to the text-generation API
//! from a user profile and the static registries in `postpilot-core`. The
//! system prompt is assembled from strictly ordered layers — base persona
//! first, tier-gated custom enhancements near the end, safeguards last —
//! so later layers dominate earlier ones when a model partially forgets
//! instruction priority. Composition is deterministic (outside the random
//! topic pick), never errors, and its output is never cached or stored.

pub mod composer;
pub mod profile;
pub mod template;
pub mod topics;

pub use composer::{
    generation_prompt, optimization_prompt, suggestion_prompt, system_prompt, ComposedPrompt,
    TaskContext,
};
pub use profile::{CustomTemplate, UserProfile};
