//! blockdx-confgen
//!
//! Generates wallet, XBridge and Block DX configuration files from the
//! templates published in the Blocknet documentation repository.
//!
//! ```text
//! CLI flags ──▶ GenerationRequest ─┐
//! settings.toml ──▶ Settings ──────┼──▶ generate_confs ──▶ <chaindir>/<name>.conf
//!                                  │         ▲             <blocknetdir>/<name>-xbridge.conf
//!                 HttpTemplateSource ────────┘             <blockdxdir>/meta.json (BLOCK only)
//! ```

use blockdx_confgen::cli::Cli;
use blockdx_confgen::observability::init_logging;
use blockdx_confgen::{generate_confs, HttpTemplateSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_normalized();
    init_logging(cli.verbose);

    let settings = cli.settings()?;
    let request = cli.request();

    tracing::debug!(
        blockchains = ?request.blockchains,
        template_url = %settings.templates.base_url,
        "Configuration loaded"
    );

    let source = HttpTemplateSource::new();
    generate_confs(&source, request, &settings).await?;

    Ok(())
}
