// src/models.rs
use serde::{Deserialize, Serialize};

use crate::charset::CharSet;
use crate::diceware::DiceRoll;

/// A generation request that passed validation. The normalized length
/// string is echoed back so the front end can rewrite its input field
/// (leading zeros stripped).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatedRequest {
    pub length: usize,
    pub sets: Vec<CharSet>,
    pub normalized_length: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub success: bool,
    pub normalized_length: Option<String>,
    pub passwords: Vec<String>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StrengthResponse {
    pub success: bool,
    /// The four verdicts in order, or the empty-input prompt alone.
    pub messages: Vec<String>,
    pub empty_input: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DicewareResponse {
    pub success: bool,
    pub rolls: Vec<DiceRoll>,
    pub roll_count: usize,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SentenceResponse {
    pub sentence: String,
    pub highlights: Vec<bool>,
    pub derived: String,
}
