//! Bridge descriptor decoding.
//!
//! A rendered descriptor is a JSON object with a single entry keyed by the
//! chain's ticker:
//!
//! ```text
//! { "LTC": { "Title": "Litecoin", "p2pPort": "9333", "rpcPort": "9332", ... } }
//! ```
//!
//! Decoding is strict: a missing `Title` or port fails here, not later.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors produced while decoding a rendered descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    #[error("descriptor is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),

    #[error("descriptor must be a JSON object")]
    NotAnObject,

    #[error("descriptor must contain exactly one chain entry, found {0}")]
    EntryCount(usize),

    #[error("descriptor entry '{key}' is invalid: {source}")]
    Record {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// One chain's bridge parameters.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChainRecord {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "p2pPort", deserialize_with = "deserialize_port")]
    pub p2p_port: u16,

    #[serde(rename = "rpcPort", deserialize_with = "deserialize_port")]
    pub rpc_port: u16,

    /// Every other key, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A decoded descriptor: the entry key and its record.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeDescriptor {
    pub key: String,
    pub record: ChainRecord,
}

impl BridgeDescriptor {
    /// Decode rendered descriptor text.
    pub fn parse(text: &str) -> Result<Self, DescriptorError> {
        let value: Value = serde_json::from_str(text).map_err(DescriptorError::Json)?;
        let Value::Object(entries) = value else {
            return Err(DescriptorError::NotAnObject);
        };
        if entries.len() != 1 {
            return Err(DescriptorError::EntryCount(entries.len()));
        }

        let Some((key, record)) = entries.into_iter().next() else {
            return Err(DescriptorError::EntryCount(0));
        };
        let record = ChainRecord::deserialize(record)
            .map_err(|source| DescriptorError::Record { key: key.clone(), source })?;

        Ok(Self { key, record })
    }

    /// Base file name derived from the title.
    pub fn file_stem(&self) -> String {
        self.record.title.to_lowercase()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPort {
    Number(u64),
    Text(String),
}

/// Ports appear both as JSON numbers and as numeric strings.
fn deserialize_port<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    match RawPort::deserialize(deserializer)? {
        RawPort::Number(n) => u16::try_from(n)
            .map_err(|_| de::Error::custom(format!("port {} out of range", n))),
        RawPort::Text(s) => s
            .trim()
            .parse::<u16>()
            .map_err(|_| de::Error::custom(format!("invalid port '{}'", s))),
    }
}
