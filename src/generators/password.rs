// src/generators/password.rs
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use crate::charset::CharSet;
use crate::models::ValidatedRequest;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 100;

/// Validation failures, surfaced as user-facing messages rather than
/// crashes. Both conditions failing at once is its own variant.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("An error occurred. Try again with a whole number between 4 and 100.")]
    InvalidLength,

    #[error("An error occurred. Try again with at least 1 character set.")]
    NoCharacterSetSelected,

    #[error("An error occurred. Try again with at least 1 character set and a whole number between 4 and 100.")]
    Both,
}

/// Validate a free-text length and the enabled character classes.
/// On success the length is coerced to its canonical integer string,
/// which callers echo back to the input field.
pub fn validate(
    length_input: &str,
    enabled: &[CharSet],
) -> Result<ValidatedRequest, ValidationError> {
    let length = length_input
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|n| (MIN_LENGTH as i64..=MAX_LENGTH as i64).contains(n));

    // De-duplicate while keeping the caller's order.
    let mut sets: Vec<CharSet> = Vec::new();
    for set in enabled {
        if !sets.contains(set) {
            sets.push(*set);
        }
    }

    match (length, sets.is_empty()) {
        (None, true) => Err(ValidationError::Both),
        (None, false) => Err(ValidationError::InvalidLength),
        (Some(_), true) => Err(ValidationError::NoCharacterSetSelected),
        (Some(n), false) => Ok(ValidatedRequest {
            length: n as usize,
            normalized_length: n.to_string(),
            sets,
        }),
    }
}

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate one password for a validated request. One character per
    /// enabled class is guaranteed (as many classes as positions allow),
    /// the rest are drawn uniformly from the combined alphabet, and the
    /// whole thing is shuffled so the guaranteed characters are not
    /// fixed to the front.
    pub fn generate(&self, request: &ValidatedRequest, rng: &mut impl Rng) -> String {
        let alphabet = combined_alphabet(&request.sets);

        let mut chars: Vec<char> = Vec::with_capacity(request.length);

        for set in request.sets.iter().take(request.length) {
            let members: Vec<char> = set.members().chars().collect();
            chars.push(members[rng.gen_range(0..members.len())]);
        }

        while chars.len() < request.length {
            chars.push(alphabet[rng.gen_range(0..alphabet.len())]);
        }

        chars.shuffle(rng);
        chars.into_iter().collect()
    }

    /// Generate several independent passwords for the same request.
    pub fn generate_batch(
        &self,
        request: &ValidatedRequest,
        count: usize,
        rng: &mut impl Rng,
    ) -> Vec<String> {
        (0..count).map(|_| self.generate(request, rng)).collect()
    }
}

// Union of member characters with duplicates collapsed; character
// identity governs sampling, not set identity.
fn combined_alphabet(sets: &[CharSet]) -> Vec<char> {
    let mut alphabet: Vec<char> = Vec::new();
    for set in sets {
        for c in set.members().chars() {
            if !alphabet.contains(&c) {
                alphabet.push(c);
            }
        }
    }
    alphabet
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::ALL_SETS;
    use anyhow::Result;

    fn request(length: usize, sets: &[CharSet]) -> ValidatedRequest {
        validate(&length.to_string(), sets).expect("valid request")
    }

    #[test]
    fn validate_length_out_of_range() {
        assert_eq!(
            Err(ValidationError::InvalidLength),
            validate("3", &[CharSet::Lowercase])
        );
        assert_eq!(
            Err(ValidationError::InvalidLength),
            validate("101", &[CharSet::Lowercase])
        );
        assert_eq!(
            Err(ValidationError::InvalidLength),
            validate("abc", &[CharSet::Lowercase])
        );
    }

    #[test]
    fn validate_no_sets() {
        assert_eq!(
            Err(ValidationError::NoCharacterSetSelected),
            validate("10", &[])
        );
    }

    #[test]
    fn validate_both_failures() {
        assert_eq!(Err(ValidationError::Both), validate("abc", &[]));
        assert_eq!(Err(ValidationError::Both), validate("3", &[]));
    }

    #[test]
    fn validate_normalizes_length() -> Result<()> {
        let request = validate("010", &[CharSet::Digit])?;
        assert_eq!(10, request.length);
        assert_eq!("10", request.normalized_length);
        Ok(())
    }

    #[test]
    fn validate_dedups_sets() -> Result<()> {
        let request = validate("8", &[CharSet::Digit, CharSet::Digit])?;
        assert_eq!(vec![CharSet::Digit], request.sets);
        Ok(())
    }

    #[test]
    fn validation_messages() {
        assert_eq!(
            "An error occurred. Try again with a whole number between 4 and 100.",
            ValidationError::InvalidLength.to_string()
        );
        assert_eq!(
            "An error occurred. Try again with at least 1 character set.",
            ValidationError::NoCharacterSetSelected.to_string()
        );
        assert_eq!(
            "An error occurred. Try again with at least 1 character set and a whole number between 4 and 100.",
            ValidationError::Both.to_string()
        );
    }

    #[test]
    fn generate_length_and_alphabet() {
        let generator = PasswordGenerator::new();
        let mut rng = rand::thread_rng();

        for length in [4, 5, 17, 100] {
            let request = request(length, &[CharSet::Lowercase, CharSet::Digit]);
            let password = generator.generate(&request, &mut rng);
            assert_eq!(length, password.chars().count());
            for c in password.chars() {
                assert!(
                    CharSet::Lowercase.contains(c) || CharSet::Digit.contains(c),
                    "unexpected character {:?}",
                    c
                );
            }
        }
    }

    #[test]
    fn generate_covers_every_enabled_set() {
        let generator = PasswordGenerator::new();
        let mut rng = rand::thread_rng();
        let request = request(4, &ALL_SETS);

        for _ in 0..50 {
            let password = generator.generate(&request, &mut rng);
            for set in ALL_SETS {
                assert!(
                    password.chars().any(|c| set.contains(c)),
                    "missing {} in {:?}",
                    set,
                    password
                );
            }
        }
    }

    #[test]
    fn generate_single_set() {
        let generator = PasswordGenerator::new();
        let mut rng = rand::thread_rng();
        let request = request(12, &[CharSet::Punctuation]);
        let password = generator.generate(&request, &mut rng);
        assert!(password.chars().all(|c| CharSet::Punctuation.contains(c)));
    }

    #[test]
    fn generate_batch_is_independent() {
        let generator = PasswordGenerator::new();
        let mut rng = rand::thread_rng();
        let request = request(20, &ALL_SETS);
        let passwords = generator.generate_batch(&request, 4, &mut rng);
        assert_eq!(4, passwords.len());
        // 20 characters over a 94-character alphabet: a collision would
        // point at a broken RNG hookup.
        assert_ne!(passwords[0], passwords[1]);
    }
}
