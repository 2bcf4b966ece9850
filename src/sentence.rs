// src/sentence.rs
use crate::charset::CharSet;

/// Compute the "significant" flag for every character of a sentence,
/// scanned left to right: digits and punctuation are always
/// significant; whitespace is never significant and resets the
/// first-letter tracking; the first remaining character of each word
/// is significant.
pub fn derive_highlights(sentence: &str) -> Vec<bool> {
    let mut highlights = Vec::with_capacity(sentence.len());
    let mut first_letter_taken = false;

    for c in sentence.chars() {
        if c.is_whitespace() {
            first_letter_taken = false;
            highlights.push(false);
        } else if matches!(
            CharSet::classify(c),
            Some(CharSet::Digit) | Some(CharSet::Punctuation)
        ) {
            highlights.push(true);
        } else if !first_letter_taken {
            first_letter_taken = true;
            highlights.push(true);
        } else {
            highlights.push(false);
        }
    }

    highlights
}

/// The significant characters in order: the password the highlighting
/// visualizes.
pub fn extract(sentence: &str) -> String {
    sentence
        .chars()
        .zip(derive_highlights(sentence))
        .filter(|(_, significant)| *significant)
        .map(|(c, _)| c)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_letters_and_punctuation() {
        // H . .   t . . . . !
        let highlights = derive_highlights("Hi there!");
        assert_eq!(
            vec![true, false, false, true, false, false, false, false, true],
            highlights
        );
        assert_eq!("Ht!", extract("Hi there!"));
    }

    #[test]
    fn spaces_are_never_significant() {
        let sentence = "a b";
        let highlights = derive_highlights(sentence);
        assert_eq!(vec![true, false, true], highlights);
    }

    #[test]
    fn digits_are_always_significant() {
        // '4' is significant as a digit and does not consume the
        // first-letter slot, so 'e' right after it is marked too.
        assert_eq!(vec![true, true], derive_highlights("4e"));
        assert_eq!("Ih42c!", extract("I have 42 cats!"));
    }

    #[test]
    fn leading_spaces() {
        assert_eq!(vec![false, false, true, false], derive_highlights("  hi"));
    }

    #[test]
    fn empty_sentence() {
        assert!(derive_highlights("").is_empty());
        assert_eq!("", extract(""));
    }

    #[test]
    fn highlights_align_with_chars() {
        let sentence = "Voilà, déjà vu!";
        assert_eq!(
            sentence.chars().count(),
            derive_highlights(sentence).len()
        );
    }
}
