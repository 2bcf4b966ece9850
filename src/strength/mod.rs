// src/strength/mod.rs
mod wordlist;

pub use wordlist::CommonPasswordList;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::charset::{CharSet, ALL_SETS};
use crate::utils::join_natural;

/// Prompt returned instead of a verdict when the input is empty.
pub const EMPTY_INPUT_PROMPT: &str = "Please input a password.";

#[derive(Debug, Error)]
pub enum StrengthError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StrengthError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Commonality {
    Common,
    NotCommon,
}

/// Length tiers, each carrying the measured length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthTier {
    VeryWeak(usize),
    Weak(usize),
    Good(usize),
    Strong(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Complex,
    /// The character classes with zero occurrences, in registry order.
    NotComplex(Vec<CharSet>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Repetition {
    Repeated,
    NotRepeated,
}

/// The four independent verdicts for one evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub commonality: Commonality,
    pub length: LengthTier,
    pub complexity: Complexity,
    pub repetition: Repetition,
}

/// Outcome of an evaluation: a real report, or the empty-input
/// sentinel. Callers must branch on this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Evaluation {
    EmptyInput,
    Report(StrengthReport),
}

/// Run the four strength checks against a password. All checks run
/// unconditionally when the input is non-empty.
pub fn evaluate(password: &str, common: &CommonPasswordList) -> Evaluation {
    if password.is_empty() {
        return Evaluation::EmptyInput;
    }
    Evaluation::Report(StrengthReport {
        commonality: check_commonality(password, common),
        length: check_length(password),
        complexity: check_complexity(password),
        repetition: check_repetition(password),
    })
}

fn check_commonality(password: &str, common: &CommonPasswordList) -> Commonality {
    if common.contains(password) {
        Commonality::Common
    } else {
        Commonality::NotCommon
    }
}

fn check_length(password: &str) -> LengthTier {
    let length = password.chars().count();
    match length {
        0..=7 => LengthTier::VeryWeak(length),
        8..=10 => LengthTier::Weak(length),
        11..=13 => LengthTier::Good(length),
        _ => LengthTier::Strong(length),
    }
}

fn check_complexity(password: &str) -> Complexity {
    let missing: Vec<CharSet> = ALL_SETS
        .into_iter()
        .filter(|set| !password.chars().any(|c| set.contains(c)))
        .collect();

    if missing.is_empty() {
        Complexity::Complex
    } else {
        Complexity::NotComplex(missing)
    }
}

fn check_repetition(password: &str) -> Repetition {
    let mut seen = std::collections::HashSet::new();
    for c in password.chars() {
        if !seen.insert(c) {
            return Repetition::Repeated;
        }
    }
    Repetition::NotRepeated
}

impl Commonality {
    pub fn message(&self) -> String {
        match self {
            Commonality::Common => "Common: Your password is common.".to_string(),
            Commonality::NotCommon => "Not common: Your password isn't common.".to_string(),
        }
    }
}

impl LengthTier {
    pub fn message(&self) -> String {
        match self {
            LengthTier::VeryWeak(1) => {
                "Very weak length: Your password has only 1 character.".to_string()
            }
            LengthTier::VeryWeak(n) => {
                format!("Very weak length: Your password has only {} characters.", n)
            }
            LengthTier::Weak(n) => {
                format!("Weak length: Your password has only {} characters.", n)
            }
            LengthTier::Good(n) => {
                format!("Good length: Your password has {} characters.", n)
            }
            LengthTier::Strong(n) => {
                format!("Strong length: Your password has {} characters.", n)
            }
        }
    }
}

impl Complexity {
    pub fn message(&self) -> String {
        match self {
            Complexity::Complex => {
                "Complex: Your password contains lowercase letters, uppercase letters, digits, and punctuation."
                    .to_string()
            }
            Complexity::NotComplex(missing) => {
                let names: Vec<&str> = missing.iter().map(|set| set.name()).collect();
                format!("Not complex: Your password is missing {}.", join_natural(&names))
            }
        }
    }
}

impl Repetition {
    pub fn message(&self) -> String {
        match self {
            Repetition::Repeated => {
                "Repeated character(s): Your password contains at least one repeated character."
                    .to_string()
            }
            Repetition::NotRepeated => {
                "No repeated characters: Your password contains no repeated characters."
                    .to_string()
            }
        }
    }
}

impl StrengthReport {
    /// The four verdicts in display order.
    pub fn messages(&self) -> Vec<String> {
        vec![
            self.commonality.message(),
            self.length.message(),
            self.complexity.message(),
            self.repetition.message(),
        ]
    }
}

impl Evaluation {
    pub fn messages(&self) -> Vec<String> {
        match self {
            Evaluation::EmptyInput => vec![EMPTY_INPUT_PROMPT.to_string()],
            Evaluation::Report(report) => report.messages(),
        }
    }
}
