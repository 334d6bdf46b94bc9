// Fri Aug 28 2026 - Alex

pub mod memory;
pub mod pattern;

pub use memory::{MappedFile, MappedView, MemoryError};
pub use pattern::{Matches, Pattern, PatternError};
