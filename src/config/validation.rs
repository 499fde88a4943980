//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic checks on [`Settings`] (serde handles syntax)
//! - Drop single-chain overrides from a multi-chain [`GenerationRequest`]
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Ignored overrides are returned as values; the caller decides how to report them

use std::fmt;

use crate::config::schema::{GenerationRequest, Settings, CHAIN_PLACEHOLDER};

/// Upper bound for generated credential length.
pub const MAX_CREDENTIAL_LENGTH: usize = 256;

/// A single semantic problem in [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBaseUrl { url: String, reason: String },
    MissingChainPlaceholder(String),
    CredentialLength(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidBaseUrl { url, reason } => {
                write!(f, "templates.base_url '{}' is invalid: {}", url, reason)
            }
            ValidationError::MissingChainPlaceholder(name) => {
                write!(f, "templates.descriptor '{}' must contain {}", name, CHAIN_PLACEHOLDER)
            }
            ValidationError::CredentialLength(len) => write!(
                f,
                "credentials.length must be between 1 and {}, got {}",
                MAX_CREDENTIAL_LENGTH, len
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate settings, collecting every error.
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&settings.templates.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::InvalidBaseUrl {
            url: settings.templates.base_url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            url: settings.templates.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if !settings.templates.descriptor.contains(CHAIN_PLACEHOLDER) {
        errors.push(ValidationError::MissingChainPlaceholder(
            settings.templates.descriptor.clone(),
        ));
    }

    let len = settings.credentials.length;
    if len == 0 || len > MAX_CREDENTIAL_LENGTH {
        errors.push(ValidationError::CredentialLength(len));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A single-chain override that was dropped because several chains were requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredParameter {
    P2pPort,
    RpcPort,
    ChainDir,
    ConfigName,
}

impl IgnoredParameter {
    /// The long CLI flag for this parameter.
    pub fn flag(&self) -> &'static str {
        match self {
            IgnoredParameter::P2pPort => "--p2pport",
            IgnoredParameter::RpcPort => "--rpcport",
            IgnoredParameter::ChainDir => "--chaindir",
            IgnoredParameter::ConfigName => "--configname",
        }
    }
}

impl fmt::Display for IgnoredParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "parameter {} ignored because multiple blockchains were selected",
            self.flag()
        )
    }
}

/// Reset single-chain overrides when more than one chain is requested.
///
/// Returns the parameters that were explicitly set and have been dropped,
/// in flag order `--p2pport`, `--rpcport`, `--chaindir`, `--configname`.
pub fn apply_multi_chain_rules(request: &mut GenerationRequest) -> Vec<IgnoredParameter> {
    if request.blockchains.len() <= 1 {
        return Vec::new();
    }

    let overrides = std::mem::take(&mut request.overrides);
    let mut ignored = Vec::new();
    if overrides.p2p_port.is_some() {
        ignored.push(IgnoredParameter::P2pPort);
    }
    if overrides.rpc_port.is_some() {
        ignored.push(IgnoredParameter::RpcPort);
    }
    if overrides.chain_dir.is_some() {
        ignored.push(IgnoredParameter::ChainDir);
    }
    if overrides.config_name.is_some() {
        ignored.push(IgnoredParameter::ConfigName);
    }
    ignored
}
