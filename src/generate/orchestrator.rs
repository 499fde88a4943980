//! Per-chain generation sequence.
//!
//! # Flow (one pass per requested chain)
//! ```text
//! credentials (supplied or random)
//!     → fetch descriptor template   (error status → Skipped)
//!     → render with credentials + port overrides
//!     → decode BridgeDescriptor
//!     → wallet template  → <chaindir>/<name>.conf
//!     → xbridge template → <blocknetdir>/<name>-xbridge.conf
//!     → sentinel chain only: <blockdxdir>/meta.json
//! ```
//!
//! Chains run one after another. Files already written for a chain stay on
//! disk if a later step for that chain fails.

use serde::Serialize;

use crate::config::{apply_multi_chain_rules, GenerationRequest, Settings, SENTINEL_CHAIN};
use crate::credentials::Credentials;
use crate::error::{GenerateError, GenerateResult};
use crate::generate::types::{ChainOutcome, GeneratedChain, GenerationReport};
use crate::output::{write_config, BlockDxMeta, META_FILE_NAME};
use crate::templates::{render, BridgeDescriptor, ChainRecord, TemplateSource};

#[derive(Serialize)]
struct DescriptorContext<'a> {
    rpcusername: &'a str,
    rpcpassword: &'a str,
    #[serde(rename = "p2pPort", skip_serializing_if = "Option::is_none")]
    p2p_port: Option<u16>,
    #[serde(rename = "rpcPort", skip_serializing_if = "Option::is_none")]
    rpc_port: Option<u16>,
}

#[derive(Serialize)]
struct WalletContext<'a> {
    rpcusername: &'a str,
    rpcpassword: &'a str,
    #[serde(rename = "p2pPort")]
    p2p_port: u16,
    #[serde(rename = "rpcPort")]
    rpc_port: u16,
}

#[derive(Serialize)]
struct XBridgeContext<'a> {
    blockchain: &'a str,
    val: &'a ChainRecord,
}

/// Generate wallet, xbridge and (for the sentinel chain) Block DX configs
/// for every chain in `request`.
///
/// Chains without a descriptor template are skipped with a warning. Any
/// other failure aborts the run.
pub async fn generate_confs<S: TemplateSource>(
    source: &S,
    mut request: GenerationRequest,
    settings: &Settings,
) -> GenerateResult<GenerationReport> {
    if request.blockchains.is_empty() {
        return Err(GenerateError::InvalidRequest(
            "at least one blockchain is required".to_string(),
        ));
    }

    let ignored = apply_multi_chain_rules(&mut request);
    for parameter in &ignored {
        tracing::warn!("Warning: {}", parameter);
    }

    let mut report = GenerationReport {
        ignored,
        outcomes: Vec::with_capacity(request.blockchains.len()),
    };

    for chain in &request.blockchains {
        let outcome = generate_chain(source, &request, settings, chain).await?;
        report.outcomes.push(outcome);
    }

    tracing::info!(
        generated = report.generated().count(),
        skipped = report.skipped_count(),
        "Generation finished"
    );
    Ok(report)
}

async fn generate_chain<S: TemplateSource>(
    source: &S,
    request: &GenerationRequest,
    settings: &Settings,
    chain: &str,
) -> GenerateResult<ChainOutcome> {
    let credentials = Credentials::resolve(request, settings.credentials.length);

    let descriptor_url = settings.templates.descriptor_url(chain);
    let descriptor_template = match source.fetch(&descriptor_url).await {
        Ok(text) => text,
        Err(e) if e.is_not_found() => {
            tracing::warn!(url = %descriptor_url, "Config for currency {} not found", chain);
            return Ok(ChainOutcome::Skipped {
                chain: chain.to_string(),
                reason: e.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let rendered = render_template(
        &descriptor_url,
        &descriptor_template,
        DescriptorContext {
            rpcusername: &credentials.username,
            rpcpassword: &credentials.password,
            p2p_port: request.overrides.p2p_port,
            rpc_port: request.overrides.rpc_port,
        },
    )?;
    let descriptor =
        BridgeDescriptor::parse(&rendered).map_err(|source| GenerateError::MalformedTemplate {
            chain: chain.to_string(),
            source,
        })?;

    let file_stem = match &request.overrides.config_name {
        Some(name) => name.to_lowercase(),
        None => descriptor.file_stem(),
    };
    let p2p_port = descriptor.record.p2p_port;
    let rpc_port = descriptor.record.rpc_port;

    // Wallet daemon config
    let wallet_url = settings.templates.wallet_url();
    let wallet_template = source.fetch(&wallet_url).await?;
    let mut wallet_conf = render_template(
        &wallet_url,
        &wallet_template,
        WalletContext {
            rpcusername: &credentials.username,
            rpcpassword: &credentials.password,
            p2p_port,
            rpc_port,
        },
    )?;
    if request.daemon {
        wallet_conf.push_str("\ndaemon=1");
    }
    let wallet_path = request.chain_dir().join(format!("{}.conf", file_stem));
    write_config(&wallet_path, &wallet_conf)?;

    // XBridge config
    let xbridge_url = settings.templates.xbridge_url();
    let xbridge_template = source.fetch(&xbridge_url).await?;
    let xbridge_conf = render_template(
        &xbridge_url,
        &xbridge_template,
        XBridgeContext {
            blockchain: chain,
            val: &descriptor.record,
        },
    )?;
    let xbridge_path = request
        .blocknet_dir()
        .join(format!("{}-xbridge.conf", file_stem));
    write_config(&xbridge_path, &xbridge_conf)?;

    let meta_json = if chain == SENTINEL_CHAIN {
        let path = request.blockdx_dir().join(META_FILE_NAME);
        let meta = BlockDxMeta::new(rpc_port, &credentials);
        write_config(&path, &meta.to_json()?)?;
        Some(path)
    } else {
        None
    };

    tracing::info!(
        chain = %chain,
        wallet_conf = %wallet_path.display(),
        xbridge_conf = %xbridge_path.display(),
        "Generated configs"
    );

    Ok(ChainOutcome::Generated(GeneratedChain {
        chain: chain.to_string(),
        file_stem,
        credentials,
        p2p_port,
        rpc_port,
        wallet_conf: wallet_path,
        xbridge_conf: xbridge_path,
        meta_json,
    }))
}

fn render_template<C: Serialize>(url: &str, template: &str, context: C) -> GenerateResult<String> {
    render(template, context).map_err(|source| GenerateError::Render {
        url: url.to_string(),
        source,
    })
}
