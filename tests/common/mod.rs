//! Shared utilities for integration tests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use blockdx_confgen::config::TemplateConfig;
use blockdx_confgen::Settings;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

pub const WALLET: &str = "rpcusername={{ rpcusername }}\nrpcpassword={{ rpcpassword }}\n{% if p2pPort %}port={{ p2pPort }}\n{% endif %}rpcport={{ rpcPort }}\nserver=1\nlisten=1\n";

pub const XBRIDGE: &str = "[{{ blockchain }}]\nTitle={{ val.Title }}\nAddress={{ val.Address }}\nIp={{ val.Ip }}\nPort={{ val.rpcPort }}\nUsername={{ val.Username }}\nPassword={{ val.Password }}\nTxVersion={{ val.TxVersion }}\n";

/// Descriptor template in the style of the published `<chain>.json.j2` files.
pub fn descriptor(key: &str, title: &str, p2p: u16, rpc: u16) -> String {
    format!(
        r#"{{
  "{key}": {{
    "Title": "{title}",
    "Address": "",
    "Ip": "127.0.0.1",
    "p2pPort": "{{{{ p2pPort | default('{p2p}') }}}}",
    "rpcPort": "{{{{ rpcPort | default('{rpc}') }}}}",
    "Username": "{{{{ rpcusername }}}}",
    "Password": "{{{{ rpcpassword }}}}",
    "TxVersion": 1
  }}
}}
"#
    )
}

/// The template set served by [`start_template_server`].
pub fn standard_templates() -> HashMap<String, String> {
    let mut templates = HashMap::new();
    templates.insert("/templates/wallet.conf.j2".to_string(), WALLET.to_string());
    templates.insert("/templates/xbridge.conf.j2".to_string(), XBRIDGE.to_string());
    templates.insert("/templates/btc.json.j2".to_string(), descriptor("BTC", "Bitcoin", 8333, 8332));
    templates.insert("/templates/ltc.json.j2".to_string(), descriptor("LTC", "Litecoin", 9333, 9332));
    templates.insert("/templates/block.json.j2".to_string(), descriptor("BLOCK", "Blocknet", 41412, 41414));
    templates
}

/// Settings pointing at a template server.
pub fn settings_for(addr: SocketAddr) -> Settings {
    Settings {
        templates: TemplateConfig {
            base_url: format!("http://{}/templates/", addr),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Start a mock template server.
///
/// Serves `templates` by request path with 200, anything else with 404.
pub async fn start_template_server(templates: HashMap<String, String>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let templates = Arc::new(templates);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let templates = templates.clone();
                    tokio::spawn(async move {
                        let (read, mut write) = socket.into_split();
                        let mut reader = BufReader::new(read);

                        let mut request_line = String::new();
                        if reader.read_line(&mut request_line).await.is_err() {
                            return;
                        }
                        // Drain headers.
                        loop {
                            let mut line = String::new();
                            match reader.read_line(&mut line).await {
                                Ok(0) | Err(_) => break,
                                Ok(_) if line == "\r\n" => break,
                                Ok(_) => {}
                            }
                        }

                        let path = request_line.split_whitespace().nth(1).unwrap_or("/");
                        let (status_text, body) = match templates.get(path) {
                            Some(body) => ("200 OK", body.as_str()),
                            None => ("404 Not Found", "404: Not Found"),
                        };
                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = write.write_all(response_str.as_bytes()).await;
                        let _ = write.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}
