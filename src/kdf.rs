use crate::hash::HashBackend;

/// Iteration count used for wallet key derivation
pub const DEFAULT_ITERATIONS: u32 = 2048;

/// Stretch a seed and salt through an iterated hash chain.
///
/// Each round hashes the previous state with the zero-based round counter
/// appended in decimal, so the chain must be walked in order and cannot be
/// parallelized. Zero iterations returns the concatenated seed and salt
/// unmodified. The function is pure; equal arguments always produce equal
/// output.
pub fn derive(backend: HashBackend, seed: &str, salt: &str, iterations: u32) -> String {
    let mut state = format!("{}{}", seed, salt);
    for round in 0..iterations {
        state = backend.digest(&format!("{}{}", state, round));
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_iterations_returns_seed_and_salt() {
        let out = derive(HashBackend::Sha256, "seed", "salt", 0);
        assert_eq!(out, "seedsalt");
    }

    #[test]
    fn test_single_round_matches_digest() {
        let backend = HashBackend::Sha256;
        let out = derive(backend, "seed", "salt", 1);
        assert_eq!(out, backend.digest("seedsalt0"));
    }

    #[test]
    fn test_rounds_chain_in_order() {
        let backend = HashBackend::Sha256;
        let first = backend.digest("seedsalt0");
        let second = backend.digest(&format!("{}1", first));
        assert_eq!(derive(backend, "seed", "salt", 2), second);
    }

    #[test]
    fn test_derive_is_pure() {
        for iterations in [0, 1, 7, DEFAULT_ITERATIONS] {
            let a = derive(HashBackend::Sha256, "phrase", "salt", iterations);
            let b = derive(HashBackend::Sha256, "phrase", "salt", iterations);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_inputs_change_output() {
        let base = derive(HashBackend::Sha256, "seed", "salt", 16);
        assert_ne!(derive(HashBackend::Sha256, "seed2", "salt", 16), base);
        assert_ne!(derive(HashBackend::Sha256, "seed", "salt2", 16), base);
        assert_ne!(derive(HashBackend::Sha256, "seed", "salt", 17), base);
        assert_ne!(derive(HashBackend::Arithmetic, "seed", "salt", 16), base);
    }
}
