use crate::hash::HashBackend;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the salts mixed into key derivation and storage encryption
pub trait SaltSource {
    /// Produce a salt for the given context tag
    fn fresh_salt(&self, tag: &str) -> String;
}

/// Wall-clock salt source.
///
/// Hashes the tag together with the current Unix-epoch milliseconds, so
/// consecutive calls in different milliseconds yield different salts. A
/// clock before the epoch falls back to zero rather than failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSalt;

impl SaltSource for SystemSalt {
    fn fresh_salt(&self, tag: &str) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        HashBackend::Sha256.digest(&format!("{}{}", tag, millis))
    }
}

/// Fixed salt source.
///
/// Always returns the same salt, which makes key derivation a pure
/// function of the mnemonic, account index, and chain. Used by tests and
/// by callers that need reproducible keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedSalt(String);

impl PinnedSalt {
    /// Create a salt source pinned to the given value
    pub fn new(salt: &str) -> Self {
        PinnedSalt(salt.to_string())
    }
}

impl SaltSource for PinnedSalt {
    fn fresh_salt(&self, _tag: &str) -> String {
        self.0.clone()
    }
}
