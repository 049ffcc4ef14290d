// Raw match extraction: every `<identifier>.` run up to a statement terminator.

use regex::Regex;
use std::collections::HashSet;

use super::error::Result;

pub struct RawMatcher {
    regex: Regex,
}

impl RawMatcher {
    pub fn new(identifier: &str) -> Result<Self> {
        let pattern = format!(r"{}\..*;+", regex::escape(identifier));
        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// All non-overlapping matches, left to right. A match never spans a line.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex.find_iter(text).map(|m| m.as_str()).collect()
    }
}

/// Drop repeated matches, keeping first-seen order.
pub fn unique_matches<'t>(matches: &[&'t str]) -> Vec<&'t str> {
    let mut seen = HashSet::new();
    matches
        .iter()
        .copied()
        .filter(|m| seen.insert(*m))
        .collect()
}
