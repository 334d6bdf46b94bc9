// Thu Aug 27 2026 - Alex

use crate::memory::MemoryError;
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::path::Path;

/// Read-only handle to a regular file. The byte length is queried once at
/// open time and stays fixed for the handle's lifetime; later growth or
/// truncation of the file on disk is not observed.
pub struct MappedFile {
    file: File,
    len: u64,
}

impl MappedFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, MemoryError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let metadata = file.metadata()?;

        if !metadata.is_file() {
            return Err(MemoryError::NotRegularFile(path.display().to_string()));
        }

        Ok(Self {
            file,
            len: metadata.len(),
        })
    }

    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maps exactly the length recorded at open time. Zero-length mappings
    /// are undefined on some platforms; callers must check `is_empty` and
    /// skip mapping entirely for empty files.
    pub fn map(&self) -> Result<MappedView, MemoryError> {
        if self.len == 0 {
            return Err(MemoryError::EmptyMapping);
        }

        let len = usize::try_from(self.len).map_err(|_| MemoryError::TooLarge(self.len))?;

        let mmap = unsafe { MmapOptions::new().len(len).map(&self.file)? };

        log::debug!("mapped {} bytes read-only", mmap.len());

        Ok(MappedView { mmap })
    }
}

/// Read-only view over the mapped bytes. The region is unmapped when the
/// view drops, on every exit path.
pub struct MappedView {
    mmap: Mmap,
}

impl MappedView {
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        self.mmap.as_ref()
    }
}
