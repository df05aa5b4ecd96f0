use sha2::{Digest, Sha256};
use std::fmt;

/// Length in characters of every digest produced by this module
pub const DIGEST_HEX_LEN: usize = 64;

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;
const LANE_TWEAK: u64 = 0x9e3779b97f4a7c15;

/// Digest implementation, selected when a pipeline component is built.
///
/// Both variants map any input string to a 64-character lowercase hex
/// digest and cannot fail. `Sha256` is the primary implementation;
/// `Arithmetic` reproduces the digest shape with plain integer arithmetic
/// for environments where no hashing facility is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashBackend {
    Sha256,
    Arithmetic,
}

impl HashBackend {
    /// Hash a string to a 64-character lowercase hex digest
    pub fn digest(&self, input: &str) -> String {
        match self {
            HashBackend::Sha256 => sha256_hex(input.as_bytes()),
            HashBackend::Arithmetic => arithmetic_hex(input.as_bytes()),
        }
    }
}

impl fmt::Display for HashBackend {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HashBackend::Sha256 => write!(f, "sha256"),
            HashBackend::Arithmetic => write!(f, "arithmetic"),
        }
    }
}

fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Four FNV-1a lanes with tweaked offsets, widened to the full digest width
fn arithmetic_hex(data: &[u8]) -> String {
    let mut out = String::with_capacity(DIGEST_HEX_LEN);
    for lane in 0u64..4 {
        let mut state = FNV_OFFSET_BASIS ^ lane.wrapping_mul(LANE_TWEAK);
        for &byte in data {
            state ^= byte as u64;
            state = state.wrapping_mul(FNV_PRIME);
        }
        out.push_str(&format!("{:016x}", scramble(state)));
    }
    out
}

/// Finalizing avalanche over a lane state
fn scramble(mut state: u64) -> u64 {
    state ^= state >> 33;
    state = state.wrapping_mul(0xff51afd7ed558ccd);
    state ^= state >> 33;
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    fn is_lower_hex(s: &str) -> bool {
        s.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
    }

    #[test]
    fn test_sha256_known_vectors() {
        // FIPS 180-2 test vector for "abc"
        let expected = hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
        assert_eq!(HashBackend::Sha256.digest("abc"), hex::encode(expected));

        let empty = hex!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
        assert_eq!(HashBackend::Sha256.digest(""), hex::encode(empty));
    }

    #[test]
    fn test_digest_shape() {
        for backend in [HashBackend::Sha256, HashBackend::Arithmetic] {
            for input in ["", "a", "hello world", "m/44'/60'/0'/0/0"] {
                let digest = backend.digest(input);
                assert_eq!(digest.len(), DIGEST_HEX_LEN);
                assert!(is_lower_hex(&digest));
            }
        }
    }

    #[test]
    fn test_digest_is_deterministic() {
        for backend in [HashBackend::Sha256, HashBackend::Arithmetic] {
            assert_eq!(backend.digest("seed0salt0"), backend.digest("seed0salt0"));
        }
    }

    #[test]
    fn test_arithmetic_separates_inputs() {
        let backend = HashBackend::Arithmetic;
        assert_ne!(backend.digest("a"), backend.digest("b"));
        assert_ne!(backend.digest("ab"), backend.digest("ba"));
        assert_ne!(backend.digest(""), backend.digest("0"));
    }

    #[test]
    fn test_backends_disagree() {
        assert_ne!(
            HashBackend::Sha256.digest("hello"),
            HashBackend::Arithmetic.digest("hello")
        );
    }
}
