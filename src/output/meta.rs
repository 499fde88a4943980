//! Block DX `meta.json`.

use std::io;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::credentials::Credentials;

/// Connection settings Block DX reads on first start.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockDxMeta {
    pub addresses: Map<String, Value>,
    pub tos: bool,
    pub port: u16,
    pub password: String,
    pub user: String,
}

impl BlockDxMeta {
    pub fn new(rpc_port: u16, credentials: &Credentials) -> Self {
        Self {
            addresses: Map::new(),
            tos: true,
            port: rpc_port,
            password: credentials.password.clone(),
            user: credentials.username.clone(),
        }
    }

    /// JSON text indented with four spaces.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;
        String::from_utf8(buf)
            .map_err(|e| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_layout() {
        let creds = Credentials {
            username: "user1".into(),
            password: "pass1".into(),
        };
        let json = BlockDxMeta::new(41414, &creds).to_json().unwrap();
        assert_eq!(
            json,
            "{\n    \"addresses\": {},\n    \"tos\": true,\n    \"port\": 41414,\n    \"password\": \"pass1\",\n    \"user\": \"user1\"\n}"
        );
    }

    #[test]
    fn test_meta_keeps_non_ascii_credentials() {
        let creds = Credentials {
            username: "jürgen".into(),
            password: "pässwörd".into(),
        };
        let json = BlockDxMeta::new(41414, &creds).to_json().unwrap();
        assert!(json.contains("\"password\": \"pässwörd\""));
        assert!(json.contains("\"user\": \"jürgen\""));
        assert!(!json.contains('\u{fffd}'));
    }
}
