// src/utils/format.rs

/// Join items into a natural-language list: one item stands alone,
/// two are joined with "and", three or more use an Oxford comma.
pub fn join_natural(items: &[&str]) -> String {
    match items {
        [] => String::new(),
        [only] => (*only).to_string(),
        [first, second] => format!("{} and {}", first, second),
        [rest @ .., last] => format!("{}, and {}", rest.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_single() {
        assert_eq!("digits", join_natural(&["digits"]));
    }

    #[test]
    fn join_pair() {
        assert_eq!(
            "digits and punctuation",
            join_natural(&["digits", "punctuation"])
        );
    }

    #[test]
    fn join_three_uses_oxford_comma() {
        assert_eq!(
            "uppercase letters, digits, and punctuation",
            join_natural(&["uppercase letters", "digits", "punctuation"])
        );
    }

    #[test]
    fn join_four() {
        assert_eq!(
            "lowercase letters, uppercase letters, digits, and punctuation",
            join_natural(&[
                "lowercase letters",
                "uppercase letters",
                "digits",
                "punctuation"
            ])
        );
    }

    #[test]
    fn join_empty() {
        assert_eq!("", join_natural(&[]));
    }
}
