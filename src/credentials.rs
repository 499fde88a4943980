//! RPC credential generation.
//!
//! Credentials are drawn from `rand`'s thread-local generator. They are meant
//! to be unguessable by casual observers of a local node, nothing more.

use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::config::GenerationRequest;

/// Default length of generated usernames and passwords.
pub const DEFAULT_CREDENTIAL_LENGTH: usize = 32;

/// Random string of `length` characters from `[A-Za-z0-9]`.
pub fn generate_credential(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// RPC username and password for one chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Use the supplied values, generating whichever is missing.
    ///
    /// Called once per chain, so supplied values are shared by every chain
    /// while generated ones are fresh each time.
    pub fn resolve(request: &GenerationRequest, length: usize) -> Self {
        Self {
            username: request
                .username
                .clone()
                .unwrap_or_else(|| generate_credential(length)),
            password: request
                .password
                .clone()
                .unwrap_or_else(|| generate_credential(length)),
        }
    }
}
