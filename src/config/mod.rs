//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! settings file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → Settings (validated, immutable)
//!
//! CLI flags
//!     → GenerationRequest
//!     → validation.rs (multi-chain override rules)
//!     → passed by reference into the generator
//! ```
//!
//! # Design Decisions
//! - Nothing is global; both values are threaded explicitly
//! - All settings fields have defaults so the file is optional

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_settings, ConfigError};
pub use schema::{ChainOverrides, GenerationRequest, Settings, TemplateConfig, SENTINEL_CHAIN};
pub use validation::{apply_multi_chain_rules, IgnoredParameter};
