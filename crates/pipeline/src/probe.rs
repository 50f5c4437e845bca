//! Filesystem existence probe.
//!
//! The reducer only needs one question answered: is there already a regular
//! file at this path? Keeping it behind a trait lets tests script the answers.

use std::future::Future;
use std::io;
use std::path::Path;

/// Answers "is there a regular file at `path`?".
pub trait FileProbe: Send + Sync + 'static {
    /// `Ok(false)` for a missing path; `Err` only for real failures
    /// (permissions, I/O). Callers decide how to treat errors.
    fn is_file(&self, path: &Path) -> impl Future<Output = io::Result<bool>> + Send;
}

/// Probe backed by `tokio::fs::metadata`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    async fn is_file(&self, path: &Path) -> io::Result<bool> {
        match tokio::fs::metadata(path).await {
            Ok(metadata) => Ok(metadata.is_file()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
