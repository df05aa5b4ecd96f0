use crate::hash::HashBackend;
use crate::kdf;
use crate::mnemonic::Mnemonic;
use crate::path::Chain;
use crate::salt::{SaltSource, SystemSalt};

/// Hex characters kept from the digest for an Ethereum-style public key
const ETHEREUM_PUBLIC_HEX_LEN: usize = 40;
/// Character length of a Solana-style extended private key
const SOLANA_PRIVATE_LEN: usize = 128;
/// Character length of a Solana-style public key
const SOLANA_PUBLIC_LEN: usize = 32;

/// A derived key pair, formatted for its chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub public_key: String,
    pub private_key: String,
}

/// Derives chain-formatted key pairs from a mnemonic.
///
/// The digest backend and the salt source are fixed at construction. With
/// the default wall-clock salts, deriving twice for the same inputs yields
/// different keys; substitute a pinned salt source for reproducible
/// derivation.
#[derive(Debug, Clone)]
pub struct KeyPairDeriver<S: SaltSource = SystemSalt> {
    backend: HashBackend,
    salts: S,
}

impl KeyPairDeriver {
    /// Deriver with the primary digest and wall-clock salts
    pub fn standard() -> Self {
        KeyPairDeriver::new(HashBackend::Sha256, SystemSalt)
    }
}

impl<S: SaltSource> KeyPairDeriver<S> {
    /// Deriver with an explicit digest backend and salt source
    pub fn new(backend: HashBackend, salts: S) -> Self {
        KeyPairDeriver { backend, salts }
    }

    /// Derive the key pair for an account index on a chain.
    ///
    /// Callers are expected to validate the mnemonic shape first; any
    /// phrase is accepted here and derivation itself cannot fail.
    pub fn derive_key_pair(&self, mnemonic: &Mnemonic, account: u32, chain: Chain) -> KeyPair {
        let path = chain.derivation_path(account);
        let seed = format!("{}{}", mnemonic.phrase(), path);
        let salt = self.salts.fresh_salt(chain.label());
        let base = kdf::derive(self.backend, &seed, &salt, kdf::DEFAULT_ITERATIONS);

        match chain {
            Chain::Ethereum => self.ethereum_pair(&base),
            Chain::Solana => self.solana_pair(&base, account),
        }
    }

    /// 0x-prefixed private key over the base digest; the public key keeps
    /// the trailing 40 hex characters of the private key's digest
    fn ethereum_pair(&self, base: &str) -> KeyPair {
        let private_key = format!("0x{}", base);
        let digest = self.backend.digest(&private_key);
        let public_key = format!("0x{}", &digest[digest.len() - ETHEREUM_PUBLIC_HEX_LEN..]);
        KeyPair {
            public_key,
            private_key,
        }
    }

    /// Extend the base with an account-keyed digest to a 128-character
    /// private key; the public key is a 32-character digest prefix
    fn solana_pair(&self, base: &str, account: u32) -> KeyPair {
        let extension = self.backend.digest(&format!("{}{}", base, account));
        let mut private_key = format!("{}{}", base, extension);
        while private_key.len() < SOLANA_PRIVATE_LEN {
            private_key.push_str(&extension);
        }
        private_key.truncate(SOLANA_PRIVATE_LEN);

        let public_key = self.backend.digest(&private_key)[..SOLANA_PUBLIC_LEN].to_string();
        KeyPair {
            public_key,
            private_key,
        }
    }
}
