//! Random short code generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of automatically generated codes.
///
/// Six characters over the 62-symbol alphabet give a 62^6 code space, so the
/// registry's collision retry loop almost always succeeds on the first try.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Generates a random alphanumeric code of the requested length.
///
/// Draws uniformly from `[A-Za-z0-9]`. Codes are identifiers, not security
/// tokens, so the thread-local RNG is sufficient.
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validate::is_valid_code;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        assert_eq!(generate_code(6).len(), 6);
        assert_eq!(generate_code(8).len(), 8);
    }

    #[test]
    fn test_generate_code_is_alphanumeric() {
        let code = generate_code(DEFAULT_CODE_LENGTH);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generated_codes_pass_format_validation() {
        for _ in 0..100 {
            assert!(is_valid_code(&generate_code(DEFAULT_CODE_LENGTH)));
        }
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generate_code(DEFAULT_CODE_LENGTH));
        }

        // 1000 draws from 62^6 should essentially never collide.
        assert!(codes.len() >= 999);
    }
}
