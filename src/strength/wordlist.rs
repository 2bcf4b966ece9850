// src/strength/wordlist.rs
use std::collections::HashSet;
use std::path::Path;

use super::Result;

/// The reference list of commonly used passwords, loaded once at
/// startup and read-only afterwards.
pub struct CommonPasswordList {
    entries: HashSet<String>,
}

impl CommonPasswordList {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let list = Self::from_lines(content.lines());
        log::info!(
            "Loaded {} common passwords from {}",
            list.len(),
            path.display()
        );
        Ok(list)
    }

    /// Build the list from newline-delimited entries, one password per
    /// line. Lines are trimmed; blank lines are skipped.
    pub fn from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Self {
        let entries = lines
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        Self { entries }
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(password)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
