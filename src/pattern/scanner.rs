// Thu Aug 27 2026 - Alex

use crate::pattern::Pattern;

/// Lazy iterator over non-overlapping match offsets of a pattern within a
/// borrowed byte span. Offsets come out strictly ascending; after a match
/// the cursor jumps a full pattern length forward, so overlapping
/// occurrences are skipped on purpose. Once exhausted it stays exhausted;
/// a fresh scan needs a fresh call to `Pattern::matches_in`.
pub struct Matches<'d, 'p> {
    data: &'d [u8],
    pattern: &'p Pattern,
    cursor: usize,
}

impl<'d, 'p> Matches<'d, 'p> {
    pub fn new(data: &'d [u8], pattern: &'p Pattern) -> Self {
        Self {
            data,
            pattern,
            cursor: 0,
        }
    }
}

impl<'d, 'p> Iterator for Matches<'d, 'p> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let needle = self.pattern.bytes();
        let first = self.pattern.first_byte();

        // No candidate fits past this position.
        let last = self.data.len().checked_sub(needle.len())?;

        while self.cursor <= last {
            let i = self.cursor;
            if self.data[i] == first && &self.data[i..i + needle.len()] == needle {
                self.cursor = i + needle.len();
                return Some(i);
            }
            self.cursor = i + 1;
        }

        None
    }
}
