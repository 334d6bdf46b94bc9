// Thu Aug 27 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a regular file: {0}")]
    NotRegularFile(String),
    #[error("Refusing to map an empty file")]
    EmptyMapping,
    #[error("File too large to map on this platform: {0} bytes")]
    TooLarge(u64),
}
