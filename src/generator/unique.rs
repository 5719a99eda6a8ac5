//! Per-call deduplication of generated values.

use crate::column::ColumnKind;
use crate::error::{PopulateError, Result};
use ahash::AHashSet;

/// Draws allowed per value before giving up
pub const MAX_ATTEMPTS: usize = 1000;

/// Remembers every value returned so far and rejects repeats
#[derive(Debug)]
pub struct UniqueValues {
    seen: AHashSet<String>,
    max_attempts: usize,
}

impl UniqueValues {
    pub fn new() -> Self {
        Self::with_max_attempts(MAX_ATTEMPTS)
    }

    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self {
            seen: AHashSet::new(),
            max_attempts,
        }
    }

    /// Call `draw` until it returns a value not seen before
    pub fn next_with<F>(&mut self, kind: ColumnKind, mut draw: F) -> Result<String>
    where
        F: FnMut() -> String,
    {
        for _ in 0..self.max_attempts {
            let value = draw();
            if !self.seen.contains(&value) {
                self.seen.insert(value.clone());
                return Ok(value);
            }
        }

        Err(PopulateError::UniquenessExhausted {
            kind,
            attempts: self.max_attempts,
        })
    }
}

impl Default for UniqueValues {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_repeats() {
        let mut unique = UniqueValues::new();
        let mut values = ["a", "a", "b", "a", "c"].into_iter();
        let mut draw = || values.next().unwrap_or("z").to_string();

        assert_eq!(unique.next_with(ColumnKind::Email, &mut draw).unwrap(), "a");
        assert_eq!(unique.next_with(ColumnKind::Email, &mut draw).unwrap(), "b");
        assert_eq!(unique.next_with(ColumnKind::Email, &mut draw).unwrap(), "c");
        assert!(unique.next_with(ColumnKind::Email, || "b".to_string()).is_err());
    }

    #[test]
    fn test_exhaustion() {
        let mut unique = UniqueValues::with_max_attempts(5);
        let mut calls = 0;
        let mut draw = || {
            calls += 1;
            "same".to_string()
        };

        assert!(unique.next_with(ColumnKind::FirstName, &mut draw).is_ok());
        let err = unique
            .next_with(ColumnKind::FirstName, &mut draw)
            .unwrap_err();
        assert!(matches!(
            err,
            PopulateError::UniquenessExhausted {
                kind: ColumnKind::FirstName,
                attempts: 5
            }
        ));
        assert_eq!(calls, 6);
    }
}
