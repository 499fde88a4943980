//! Configuration schema definitions.
//!
//! Two kinds of configuration exist:
//! - [`Settings`]: tool-wide settings (template locations, credential length),
//!   optionally loaded from a TOML file.
//! - [`GenerationRequest`]: the inputs of one invocation, built from CLI flags.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::credentials::DEFAULT_CREDENTIAL_LENGTH;

/// Placeholder replaced with the lower-cased chain identifier in
/// [`TemplateConfig::descriptor`].
pub const CHAIN_PLACEHOLDER: &str = "{chain}";

/// Identifier of the chain that also gets a `meta.json` for Block DX.
pub const SENTINEL_CHAIN: &str = "BLOCK";

/// Root settings for the generator.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Where templates are fetched from.
    pub templates: TemplateConfig,

    /// Random credential generation.
    pub credentials: CredentialConfig,
}

/// Remote template locations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Directory URL all template names are resolved against.
    pub base_url: String,

    /// Wallet daemon config template name.
    pub wallet: String,

    /// XBridge config template name.
    pub xbridge: String,

    /// Per-chain bridge descriptor template name, containing `{chain}`.
    pub descriptor: String,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            base_url: "https://raw.githubusercontent.com/BlocknetDX/blocknet-docs/master/json-config-templates/"
                .to_string(),
            wallet: "wallet.conf.j2".to_string(),
            xbridge: "xbridge.conf.j2".to_string(),
            descriptor: "{chain}.json.j2".to_string(),
        }
    }
}

impl TemplateConfig {
    /// URL of the wallet config template.
    pub fn wallet_url(&self) -> String {
        self.resolve(&self.wallet)
    }

    /// URL of the xbridge config template.
    pub fn xbridge_url(&self) -> String {
        self.resolve(&self.xbridge)
    }

    /// URL of the bridge descriptor template for `chain`.
    pub fn descriptor_url(&self, chain: &str) -> String {
        let name = self
            .descriptor
            .replace(CHAIN_PLACEHOLDER, &chain.to_lowercase());
        self.resolve(&name)
    }

    fn resolve(&self, name: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), name)
    }
}

/// Random credential settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CredentialConfig {
    /// Length of generated usernames and passwords.
    pub length: usize,
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_CREDENTIAL_LENGTH,
        }
    }
}

/// Overrides that only make sense when a single chain is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainOverrides {
    pub p2p_port: Option<u16>,
    pub rpc_port: Option<u16>,
    pub config_name: Option<String>,
    pub chain_dir: Option<PathBuf>,
}

/// The inputs of one invocation.
///
/// Built once from the command line and passed by reference to everything
/// that needs it.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    /// Chain identifiers, in the order they were requested.
    pub blockchains: Vec<String>,

    /// Single-chain overrides.
    pub overrides: ChainOverrides,

    /// RPC username shared by every chain, random per chain when absent.
    pub username: Option<String>,

    /// RPC password shared by every chain, random per chain when absent.
    pub password: Option<String>,

    /// Directory for `<name>-xbridge.conf`.
    pub blocknet_dir: Option<PathBuf>,

    /// Directory for `meta.json`.
    pub blockdx_dir: Option<PathBuf>,

    /// Append `daemon=1` to wallet configs.
    pub daemon: bool,
}

impl GenerationRequest {
    /// Directory for `<name>.conf`.
    pub fn chain_dir(&self) -> &Path {
        or_current_dir(self.overrides.chain_dir.as_deref())
    }

    pub fn blocknet_dir(&self) -> &Path {
        or_current_dir(self.blocknet_dir.as_deref())
    }

    pub fn blockdx_dir(&self) -> &Path {
        or_current_dir(self.blockdx_dir.as_deref())
    }
}

fn or_current_dir(dir: Option<&Path>) -> &Path {
    dir.unwrap_or_else(|| Path::new("."))
}
