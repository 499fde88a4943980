//! Template subsystem.
//!
//! # Data Flow
//! ```text
//! URL (TemplateConfig)
//!     → fetcher.rs (HTTP GET → text)
//!     → renderer.rs (Jinja2 substitution)
//!     → descriptor.rs (bridge descriptor only: strict JSON decode)
//! ```

pub mod descriptor;
pub mod fetcher;
pub mod renderer;

pub use descriptor::{BridgeDescriptor, ChainRecord, DescriptorError};
pub use fetcher::{FetchError, HttpTemplateSource, TemplateSource};
pub use renderer::render;
