use crate::cipher::StorageCipher;
use crate::error::Error;
use crate::keypair::KeyPair;
use crate::salt::SaltSource;
use serde::{Deserialize, Serialize};

/// A wallet entry in the shape the persisted store exchanges.
///
/// `encrypted` tells callers which form `private_key` holds: the raw
/// chain-formatted key, or the `ciphertext.salt` envelope produced by
/// [`StorageCipher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    pub id: String,
    pub public_key: String,
    pub private_key: String,
    pub encrypted: bool,
}

impl WalletRecord {
    /// Record holding the raw private key of a freshly derived pair
    pub fn from_key_pair(id: &str, pair: &KeyPair) -> Self {
        WalletRecord {
            id: id.to_string(),
            public_key: pair.public_key.clone(),
            private_key: pair.private_key.clone(),
            encrypted: false,
        }
    }

    /// Replace the raw private key with its envelope form.
    ///
    /// Already-encrypted records pass through unchanged so the key cannot
    /// be wrapped twice.
    pub fn into_encrypted<S: SaltSource>(self, cipher: &StorageCipher<S>, password: &str) -> Self {
        if self.encrypted {
            return self;
        }
        let envelope = cipher.encrypt(&self.private_key, password);
        WalletRecord {
            private_key: envelope.to_string(),
            encrypted: true,
            ..self
        }
    }

    /// Recover the raw private key.
    ///
    /// Unencrypted records return their key as-is; encrypted records go
    /// through [`StorageCipher::decrypt_str`].
    pub fn decrypt_private_key<S: SaltSource>(
        &self,
        cipher: &StorageCipher<S>,
        password: &str,
    ) -> Result<String, Error> {
        if !self.encrypted {
            return Ok(self.private_key.clone());
        }
        cipher.decrypt_str(&self.private_key, password)
    }
}

/// Serialize records to the JSON array shape the store persists
pub fn to_store_json(records: &[WalletRecord]) -> Result<String, Error> {
    Ok(serde_json::to_string(records)?)
}

/// Parse records from the store's JSON array shape
pub fn from_store_json(json: &str) -> Result<Vec<WalletRecord>, Error> {
    Ok(serde_json::from_str(json)?)
}
