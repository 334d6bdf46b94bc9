// Thu Aug 27 2026 - Alex

use crate::pattern::scanner::Matches;
use crate::pattern::PatternError;
use std::fmt;

/// An exact byte sequence to search for. Non-empty by construction;
/// matching is byte-for-byte, no wildcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    bytes: Vec<u8>,
}

impl Pattern {
    pub fn new(bytes: &[u8]) -> Result<Self, PatternError> {
        if bytes.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn first_byte(&self) -> u8 {
        self.bytes[0]
    }

    /// Lazy sequence of non-overlapping match offsets in `data`, ascending.
    /// Each scan starts from the beginning of the slice.
    pub fn matches_in<'d, 'p>(&'p self, data: &'d [u8]) -> Matches<'d, 'p> {
        Matches::new(data, self)
    }

    pub fn find_in(&self, data: &[u8]) -> Option<usize> {
        self.matches_in(data).next()
    }

    pub fn find_all_in(&self, data: &[u8]) -> Vec<usize> {
        self.matches_in(data).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pattern_rejected() {
        assert!(matches!(Pattern::new(b""), Err(PatternError::Empty)));
    }

    #[test]
    fn test_pattern_accessors() {
        let pattern = Pattern::new(b"abc").unwrap();
        assert_eq!(pattern.len(), 3);
        assert_eq!(pattern.bytes(), b"abc");
        assert_eq!(pattern.first_byte(), b'a');
        assert!(!pattern.is_empty());
    }

    #[test]
    fn test_find_in_returns_first_offset() {
        let pattern = Pattern::new(b"ab").unwrap();
        assert_eq!(pattern.find_in(b"xxabxxab"), Some(2));
        assert_eq!(pattern.find_in(b"xxxx"), None);
    }

    #[test]
    fn test_find_all_in_collects_every_match() {
        let pattern = Pattern::new(b"abc").unwrap();
        assert_eq!(pattern.find_all_in(b"abcabcabc"), vec![0, 3, 6]);
    }
}
