//! Multi-chain runs.
//!
//! Wallet configs always land in the current directory when several chains
//! are requested, so this binary holds a single test that owns the process
//! working directory.

use std::fs;

use blockdx_confgen::config::{ChainOverrides, IgnoredParameter};
use blockdx_confgen::{generate_confs, ChainOutcome, GenerationRequest, HttpTemplateSource};

mod common;

#[tokio::test]
async fn test_multi_chain_run() {
    let addr = common::start_template_server(common::standard_templates()).await;
    let cwd = tempfile::tempdir().unwrap();
    let chain_dir = tempfile::tempdir().unwrap();
    let blocknet_dir = tempfile::tempdir().unwrap();
    std::env::set_current_dir(cwd.path()).unwrap();

    let request = GenerationRequest {
        blockchains: vec!["BTC".into(), "FAKE999".into(), "LTC".into()],
        overrides: ChainOverrides {
            p2p_port: Some(9999),
            config_name: Some("shared".into()),
            chain_dir: Some(chain_dir.path().to_path_buf()),
            ..Default::default()
        },
        username: Some("alice".into()),
        password: Some("s3cret".into()),
        blocknet_dir: Some(blocknet_dir.path().to_path_buf()),
        ..Default::default()
    };

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let source = HttpTemplateSource::with_client(client);
    let report = generate_confs(&source, request, &common::settings_for(addr)).await.unwrap();

    assert_eq!(
        report.ignored,
        vec![
            IgnoredParameter::P2pPort,
            IgnoredParameter::ChainDir,
            IgnoredParameter::ConfigName,
        ]
    );

    let chains: Vec<&str> = report.outcomes.iter().map(ChainOutcome::chain).collect();
    assert_eq!(chains, vec!["BTC", "FAKE999", "LTC"]);
    assert!(report.outcomes[1].is_skipped());
    assert_eq!(report.skipped_count(), 1);

    // Overrides dropped: default directory, template names and ports.
    assert_eq!(fs::read_dir(chain_dir.path()).unwrap().count(), 0);
    let bitcoin = fs::read_to_string(cwd.path().join("bitcoin.conf")).unwrap();
    let litecoin = fs::read_to_string(cwd.path().join("litecoin.conf")).unwrap();
    assert!(!bitcoin.contains("9999"));
    assert!(!litecoin.contains("9999"));
    assert!(bitcoin.contains("port=8333\n"));
    assert!(litecoin.contains("port=9333\n"));

    // Supplied credentials are shared by every chain.
    for wallet in [&bitcoin, &litecoin] {
        assert!(wallet.contains("rpcusername=alice\n"));
        assert!(wallet.contains("rpcpassword=s3cret\n"));
    }

    // The blocknet directory is not a single-chain override.
    assert!(blocknet_dir.path().join("bitcoin-xbridge.conf").exists());
    assert!(blocknet_dir.path().join("litecoin-xbridge.conf").exists());
    assert!(!cwd.path().join("meta.json").exists());
}
