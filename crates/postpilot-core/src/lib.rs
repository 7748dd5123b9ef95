//! Static configuration registries and application config for postpilot.
//!
//! The tier, platform, and content-mode tables are compiled-in `&'static`
//! data: built once, never mutated, safe for unsynchronized concurrent reads
//! from any number of worker tasks. Lookups never fail — unknown keys resolve
//! to safe defaults (`free` tier, `None` platform) rather than erroring.

use thiserror::Error;

pub mod app_config;
pub mod config;
pub mod modes;
pub mod platforms;
pub mod post_meta;
pub mod tiers;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use post_meta::PostMetadata;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable was present but could not be parsed.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
