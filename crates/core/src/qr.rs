//! QR token value generation.
//!
//! The token value is the sole bearer credential for the public profile URL;
//! no other authentication protects it, so values must be cryptographically
//! unguessable. `rand::rng()` (ThreadRng) is a CSPRNG.

use rand::Rng;

/// Length of the generated token value (alphanumeric characters).
///
/// 48 alphanumeric characters carry ~285 bits of entropy.
pub const TOKEN_LENGTH: usize = 48;

/// Generate a fresh random token value.
pub fn generate_token_value() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(TOKEN_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_has_expected_length() {
        assert_eq!(generate_token_value().len(), TOKEN_LENGTH);
    }

    #[test]
    fn test_token_is_alphanumeric() {
        assert!(generate_token_value().chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = generate_token_value();
        let b = generate_token_value();
        assert_ne!(a, b);
    }
}
