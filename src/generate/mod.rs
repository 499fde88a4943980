//! Config generation.
//!
//! - orchestrator.rs: runs the fetch → render → write sequence per chain
//! - types.rs: per-chain outcomes and the run report

pub mod orchestrator;
pub mod types;

pub use orchestrator::generate_confs;
pub use types::{ChainOutcome, GeneratedChain, GenerationReport};
