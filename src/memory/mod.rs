// Thu Aug 27 2026 - Alex

pub mod error;
pub mod mapped;

pub use error::MemoryError;
pub use mapped::{MappedFile, MappedView};
