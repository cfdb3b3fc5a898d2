//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! monitor file (YAML/TOML)
//!     → loader.rs (read, pick format by extension, deserialize)
//!     → validation.rs (semantic checks, build CheckSpec list)
//!     → LoadedConfig (validated, immutable)
//!     → runner
//! ```
//!
//! # Design Decisions
//! - Config is loaded once per run
//! - All fields except `webhook_url` have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, ConfigFormat, LoadedConfig};
pub use schema::{CheckConfig, MonitorConfig};
pub use validation::ValidationError;
