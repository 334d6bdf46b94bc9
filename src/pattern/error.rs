// Thu Aug 27 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Empty pattern not allowed")]
    Empty,
}
