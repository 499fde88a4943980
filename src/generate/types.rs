//! Per-chain results.

use std::path::PathBuf;

use crate::config::IgnoredParameter;
use crate::credentials::Credentials;

/// Files and values produced for one chain.
#[derive(Debug, Clone)]
pub struct GeneratedChain {
    /// Chain identifier as requested.
    pub chain: String,
    /// Base name shared by the wallet and xbridge configs.
    pub file_stem: String,
    pub credentials: Credentials,
    pub p2p_port: u16,
    pub rpc_port: u16,
    pub wallet_conf: PathBuf,
    pub xbridge_conf: PathBuf,
    /// Only set for the sentinel chain.
    pub meta_json: Option<PathBuf>,
}

/// What happened to one requested chain.
#[derive(Debug, Clone)]
pub enum ChainOutcome {
    Generated(GeneratedChain),
    /// No descriptor template exists for the chain; nothing was written.
    Skipped { chain: String, reason: String },
}

impl ChainOutcome {
    pub fn chain(&self) -> &str {
        match self {
            ChainOutcome::Generated(generated) => &generated.chain,
            ChainOutcome::Skipped { chain, .. } => chain,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, ChainOutcome::Skipped { .. })
    }
}

/// Summary of a whole run.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Single-chain overrides dropped because several chains were requested.
    pub ignored: Vec<IgnoredParameter>,
    /// One entry per requested chain, in request order.
    pub outcomes: Vec<ChainOutcome>,
}

impl GenerationReport {
    pub fn generated(&self) -> impl Iterator<Item = &GeneratedChain> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ChainOutcome::Generated(generated) => Some(generated),
            ChainOutcome::Skipped { .. } => None,
        })
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_skipped()).count()
    }
}
