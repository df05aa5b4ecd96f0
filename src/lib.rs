// Deterministic multi-chain wallet core
// This library derives chain-formatted key pairs from a mnemonic phrase and
// encrypts private-key material behind a reversible storage envelope.

pub mod cipher;
pub mod error;
pub mod hash;
pub mod kdf;
pub mod keypair;
pub mod mnemonic;
pub mod path;
pub mod salt;
pub mod wallet;
pub mod words;

pub use cipher::{Envelope, StorageCipher};
pub use error::Error;
pub use hash::HashBackend;
pub use keypair::{KeyPair, KeyPairDeriver};
pub use mnemonic::{Mnemonic, MnemonicLength};
pub use path::{AccountIndex, Chain, CoinType, DerivationPath, Purpose};
pub use salt::{PinnedSalt, SaltSource, SystemSalt};
pub use wallet::WalletRecord;

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str =
        "abandon ability able about above absent absorb abstract absurd abuse access accident";

    #[test]
    fn test_mnemonic_generation() {
        let mnemonic = Mnemonic::generate();
        assert_eq!(mnemonic.phrase().split_whitespace().count(), 12);
        assert!(Mnemonic::validate(mnemonic.phrase()));
    }

    #[test]
    fn test_mnemonic_validation() {
        assert!(Mnemonic::validate(PHRASE));
        assert!(!Mnemonic::validate("too short"));
        assert!(!Mnemonic::validate(""));
    }

    #[test]
    fn test_ethereum_derivation_flow() {
        let mnemonic = Mnemonic::from_phrase(PHRASE);
        let deriver = KeyPairDeriver::new(HashBackend::Sha256, PinnedSalt::new("flow-salt"));

        let pair = deriver.derive_key_pair(&mnemonic, 0, Chain::Ethereum);
        assert_eq!(pair.private_key.len(), 66);
        assert_eq!(pair.public_key.len(), 42);
        assert_eq!(pair, deriver.derive_key_pair(&mnemonic, 0, Chain::Ethereum));
    }

    #[test]
    fn test_solana_derivation_flow() {
        let mnemonic = Mnemonic::from_phrase(PHRASE);
        let deriver = KeyPairDeriver::new(HashBackend::Sha256, PinnedSalt::new("flow-salt"));

        let pair = deriver.derive_key_pair(&mnemonic, 0, Chain::Solana);
        assert_eq!(pair.private_key.len(), 128);
        assert_eq!(pair.public_key.len(), 32);
    }

    #[test]
    fn test_derive_encrypt_store_recover_flow() {
        let mnemonic = Mnemonic::from_phrase(PHRASE);
        let deriver = KeyPairDeriver::new(HashBackend::Sha256, PinnedSalt::new("flow-salt"));
        let cipher = StorageCipher::new(HashBackend::Sha256, PinnedSalt::new("store-salt-0123"));

        let pair = deriver.derive_key_pair(&mnemonic, 0, Chain::Ethereum);
        let stored = WalletRecord::from_key_pair("wallet-0", &pair).into_encrypted(&cipher, "pw");

        let json = wallet::to_store_json(&[stored]).unwrap();
        let loaded = wallet::from_store_json(&json).unwrap();
        assert_eq!(loaded.len(), 1);

        let recovered = loaded[0].decrypt_private_key(&cipher, "pw").unwrap();
        assert_eq!(recovered, pair.private_key);
    }

    #[test]
    fn test_envelope_parses_back() {
        let cipher = StorageCipher::standard();
        let envelope = cipher.encrypt("0xdeadbeef", "pw");
        let reparsed: Envelope = envelope.to_string().parse().unwrap();
        assert_eq!(reparsed, envelope);
        assert_eq!(cipher.decrypt(&reparsed, "pw").unwrap(), "0xdeadbeef");
    }

    #[test]
    fn test_derivation_path_rendering() {
        assert_eq!(Chain::Ethereum.derivation_path(0).to_string(), "m/44'/60'/0'/0/0");
        assert_eq!(Chain::Solana.derivation_path(2).to_string(), "m/44'/501'/2'/0/0");
    }
}
