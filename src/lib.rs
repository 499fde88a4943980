//! Block DX config generator library.
//!
//! Fetches Jinja2 templates for the requested blockchains and writes the
//! wallet daemon config, the XBridge config and, for Blocknet itself, the
//! Block DX `meta.json`.

pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod generate;
pub mod observability;
pub mod output;
pub mod templates;

pub use config::{GenerationRequest, Settings};
pub use error::{GenerateError, GenerateResult};
pub use generate::{generate_confs, ChainOutcome, GenerationReport};
pub use templates::{HttpTemplateSource, TemplateSource};
