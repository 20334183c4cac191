//! Determinism checks for repeated runs.
//!
//! A run is any closure producing bytes. Running it several times and comparing
//! BLAKE3 hashes shows whether the output depends on anything besides its
//! inputs.

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// BLAKE3 hash of the first run.
    pub hash: String,
    /// Index of the first run whose hash differed.
    pub first_mismatch: Option<usize>,
}

/// Computes the hex BLAKE3 hash of some bytes.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Runs `generate` `runs` times and compares the outputs.
pub fn verify_determinism<F>(mut generate: F, runs: usize) -> DeterminismResult
where
    F: FnMut() -> Vec<u8>,
{
    assert!(runs >= 2, "determinism check needs at least two runs");

    let hash = compute_hash(&generate());
    let first_mismatch = (1..runs).find(|_| compute_hash(&generate()) != hash);

    DeterminismResult {
        is_deterministic: first_mismatch.is_none(),
        runs,
        hash,
        first_mismatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_output_is_deterministic() {
        let result = verify_determinism(|| vec![1, 2, 3], 3);
        assert!(result.is_deterministic);
        assert_eq!(result.hash.len(), 64);
    }

    #[test]
    fn test_changing_output_is_detected() {
        let mut n = 0u8;
        let result = verify_determinism(
            || {
                n += 1;
                vec![n]
            },
            3,
        );
        assert!(!result.is_deterministic);
        assert_eq!(result.first_mismatch, Some(1));
    }
}
