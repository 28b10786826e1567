//! Remote file access against the managed device's filesystem.
//!
//! The editor needs exactly two primitives: read one file as text and
//! overwrite one file wholesale. [`FileTransport`] is the seam the host
//! wires up; [`LocalFileTransport`] covers the common deployment where
//! the panel runs on the device itself.

mod local;

pub use local::LocalFileTransport;

use crate::error::Result;
use async_trait::async_trait;

/// Read/write primitives for configuration files on the managed device
#[async_trait]
pub trait FileTransport: Send + Sync {
    /// Read the full contents of `path` as text
    async fn read_file(&self, path: &str) -> Result<String>;

    /// Overwrite `path` with `content` as its complete new contents
    async fn write_file(&self, path: &str, content: &str) -> Result<()>;
}
