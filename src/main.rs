use anyhow::Result;
use keyforge::wallet;
use keyforge::{
    Chain, HashBackend, KeyPairDeriver, Mnemonic, MnemonicLength, PinnedSalt, StorageCipher,
    WalletRecord,
};

fn main() -> Result<()> {
    // Example 1: Generate a mnemonic and derive key pairs for both chains
    println!("Example 1: Generate mnemonic and derive key pairs");
    println!("-------------------------------------------------");

    let mnemonic = Mnemonic::generate();
    println!("Mnemonic: {}", mnemonic);
    println!("Valid shape: {}", Mnemonic::validate(mnemonic.phrase()));

    let deriver = KeyPairDeriver::standard();

    let eth = deriver.derive_key_pair(&mnemonic, 0, Chain::Ethereum);
    println!("Derivation Path: {}", Chain::Ethereum.derivation_path(0));
    println!("Ethereum Private Key: {}", eth.private_key);
    println!("Ethereum Public Key: {}", eth.public_key);

    let sol = deriver.derive_key_pair(&mnemonic, 0, Chain::Solana);
    println!("Derivation Path: {}", Chain::Solana.derivation_path(0));
    println!("Solana Private Key: {}", sol.private_key);
    println!("Solana Public Key: {}", sol.public_key);

    // Example 2: Encrypt a private key for storage and recover it
    println!("\nExample 2: Encrypt a private key for storage");
    println!("-------------------------------------------------");

    let cipher = StorageCipher::standard();
    let envelope = cipher.encrypt(&eth.private_key, "correct horse");
    println!("Envelope: {}", envelope);

    let record = WalletRecord::from_key_pair("wallet-0", &eth);
    let stored = record.into_encrypted(&cipher, "correct horse");
    println!("Store JSON: {}", wallet::to_store_json(&[stored.clone()])?);

    let recovered = stored.decrypt_private_key(&cipher, "correct horse")?;
    println!("Recovered Private Key: {}", recovered);
    println!("Round trip ok: {}", recovered == eth.private_key);

    // Example 3: Reproducible derivation with a pinned salt and the
    // arithmetic digest fallback
    println!("\nExample 3: Pinned salts and the fallback digest");
    println!("-------------------------------------------------");

    let long = Mnemonic::generate_with(MnemonicLength::Words24);
    println!("24-word Mnemonic: {}", long);

    let pinned = KeyPairDeriver::new(HashBackend::Arithmetic, PinnedSalt::new("demo-salt"));
    let first = pinned.derive_key_pair(&long, 0, Chain::Ethereum);
    let second = pinned.derive_key_pair(&long, 0, Chain::Ethereum);
    println!("Backend: {}", HashBackend::Arithmetic);
    println!("Ethereum Public Key: {}", first.public_key);
    println!("Reproducible: {}", first == second);

    Ok(())
}
