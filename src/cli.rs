//! Command-line interface.
//!
//! # Responsibilities
//! - Parse flags into a [`GenerationRequest`] and [`Settings`]
//! - Accept the historical multi-letter single-dash flags (`-p2p`, `-cdir`, ...)
//!
//! clap short flags are a single character, so `-p2p 9999` would otherwise
//! parse as `-p 2p` followed by a stray `9999`. [`normalize_args`] rewrites
//! those spellings to their long forms before clap sees them.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::config::loader::read_settings;
use crate::config::validation::validate_settings;
use crate::config::{ChainOverrides, ConfigError, GenerationRequest, Settings};

const LEGACY_FLAGS: &[(&str, &str)] = &[
    ("-p2p", "--p2pport"),
    ("-rpc", "--rpcport"),
    ("-cdir", "--chaindir"),
    ("-bdir", "--blocknetdir"),
    ("-ddir", "--blockdxdir"),
];

/// Flags whose next argument is their value. `--blockchain` is absent: its
/// values run until the next flag, so a following `-rpc` is a flag.
const SINGLE_VALUE_FLAGS: &[&str] = &[
    "--p2pport",
    "--rpcport",
    "-n",
    "--configname",
    "-u",
    "--username",
    "-p",
    "--password",
    "--chaindir",
    "--blocknetdir",
    "--blockdxdir",
    "--config",
    "--template-url",
];

#[derive(Parser, Debug)]
#[command(name = "blockdx-confgen")]
#[command(about = "Generate wallet, XBridge and Block DX configs from remote templates", long_about = None)]
pub struct Cli {
    /// Log every template fetched and file written
    #[arg(long)]
    pub verbose: bool,

    /// Blockchain configs to download (e.g. BTC LTC BLOCK)
    #[arg(short = 'c', long, required = true, num_args = 1.., value_name = "ID")]
    pub blockchain: Vec<String>,

    /// p2p port override (single chain only)
    #[arg(long = "p2pport", value_name = "PORT")]
    pub p2p_port: Option<u16>,

    /// RPC port override (single chain only)
    #[arg(long = "rpcport", value_name = "PORT")]
    pub rpc_port: Option<u16>,

    /// Config file name (single chain only)
    #[arg(short = 'n', long = "configname", value_name = "NAME")]
    pub config_name: Option<String>,

    /// RPC username, random by default
    #[arg(short, long, allow_hyphen_values = true)]
    pub username: Option<String>,

    /// RPC password, random by default
    #[arg(short, long, allow_hyphen_values = true)]
    pub password: Option<String>,

    /// Chain config directory (single chain only)
    #[arg(long = "chaindir", value_name = "DIR")]
    pub chain_dir: Option<PathBuf>,

    /// Blocknet config directory
    #[arg(long = "blocknetdir", value_name = "DIR")]
    pub blocknet_dir: Option<PathBuf>,

    /// Block DX config directory
    #[arg(long = "blockdxdir", value_name = "DIR")]
    pub blockdx_dir: Option<PathBuf>,

    /// Append daemon=1 to wallet configs
    #[arg(long)]
    pub daemon: bool,

    /// Settings file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL templates are fetched from
    #[arg(long = "template-url", value_name = "URL")]
    pub template_url: Option<String>,
}

impl Cli {
    /// Parse the process arguments, accepting legacy flag spellings.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// The inputs of this invocation.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            blockchains: self.blockchain.clone(),
            overrides: ChainOverrides {
                p2p_port: self.p2p_port,
                rpc_port: self.rpc_port,
                config_name: self.config_name.clone(),
                chain_dir: self.chain_dir.clone(),
            },
            username: self.username.clone(),
            password: self.password.clone(),
            blocknet_dir: self.blocknet_dir.clone(),
            blockdx_dir: self.blockdx_dir.clone(),
            daemon: self.daemon,
        }
    }

    /// Settings from `--config` (or defaults) with `--template-url` applied.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => read_settings(path)?,
            None => Settings::default(),
        };
        if let Some(url) = &self.template_url {
            settings.templates.base_url = url.clone();
        }
        validate_settings(&settings).map_err(ConfigError::Validation)?;
        Ok(settings)
    }
}

/// Rewrite legacy multi-letter single-dash flags to their long forms.
///
/// Both `-p2p 9999` and `-p2p=9999` are accepted. The value of a
/// single-value flag (`--password -rpc`) and arguments after `--` are left
/// alone.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;
    let mut expecting_value = false;

    for arg in args {
        let arg: OsString = arg.into();
        if passthrough || expecting_value {
            expecting_value = false;
            out.push(arg);
            continue;
        }
        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };
        if text == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let (flag, value) = match text.split_once('=') {
            Some((flag, value)) => (flag, Some(value)),
            None => (text, None),
        };
        let long = LEGACY_FLAGS
            .iter()
            .find(|(legacy, _)| *legacy == flag)
            .map(|(_, long)| *long);
        let name = long.unwrap_or(flag);
        expecting_value = value.is_none() && SINGLE_VALUE_FLAGS.iter().any(|f| *f == name);

        let rewritten = long.map(|long| match value {
            Some(value) => format!("{}={}", long, value),
            None => long.to_string(),
        });
        out.push(rewritten.map(OsString::from).unwrap_or(arg));
    }
    out
}
