use std::collections::HashSet;

use super::{Error, Result};

/// An ordered set of distinct characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    /// Validate and build an alphabet. It must be non-empty and must not
    /// repeat a character.
    pub fn new(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidArgument("alphabet must not be empty".into()));
        }
        let mut seen = HashSet::new();
        let mut chars = Vec::with_capacity(s.len());
        for c in s.chars() {
            if !seen.insert(c) {
                return Err(Error::InvalidArgument(format!(
                    "alphabet repeats the character {:?}",
                    c
                )));
            }
            chars.push(c);
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false for a validated alphabet.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Map odometer indices to a string.
    pub fn spell(&self, indices: &[usize]) -> String {
        indices.iter().map(|&i| self.chars[i]).collect()
    }
}

/// The width of generated strings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Length(usize);

impl Length {
    pub fn new(length: i64) -> Result<Self> {
        usize::try_from(length)
            .map(Length)
            .map_err(|_| Error::InvalidArgument(format!("length must not be negative, got {}", length)))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl From<usize> for Length {
    fn from(length: usize) -> Self {
        Length(length)
    }
}
