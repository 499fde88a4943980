//! Output files.
//!
//! - writer.rs: plain text config files (`<name>.conf`, `<name>-xbridge.conf`)
//! - meta.rs: Block DX `meta.json`

pub mod meta;
pub mod writer;

pub use meta::BlockDxMeta;
pub use writer::write_config;

/// File name of the Block DX metadata file.
pub const META_FILE_NAME: &str = "meta.json";
