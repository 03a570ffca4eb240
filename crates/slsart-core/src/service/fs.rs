//! FileSystem trait for abstracting file I/O.
//!
//! Defined in slsart-core so the wizard can write the finished script
//! without depending on any specific filesystem implementation. The
//! `LocalFileSystem` adapter lives in slsart-infra.

use std::path::Path;

/// Abstraction over filesystem writes.
///
/// The wizard writes exactly one artifact per run. Keeping the trait this
/// narrow lets tests substitute an in-memory implementation.
pub trait FileSystem: Send + Sync {
    /// Write string content to a file, creating parent directories as needed.
    fn write_file(
        &self,
        path: &Path,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), std::io::Error>> + Send;
}
