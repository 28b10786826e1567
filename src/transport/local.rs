//! Local filesystem transport.

use super::FileTransport;
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Transport for a panel running directly on the managed device.
///
/// Paths are absolute device paths. A root can be supplied so tests and
/// hosts working against a mounted device image resolve the same paths
/// under a different prefix.
#[derive(Debug, Clone, Default)]
pub struct LocalFileTransport {
    root: Option<PathBuf>,
}

impl LocalFileTransport {
    /// Transport against the live root filesystem
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Transport resolving requested paths under `root` instead of `/`
    pub fn rooted(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path.trim_start_matches('/')),
            None => PathBuf::from(path),
        }
    }
}

#[async_trait]
impl FileTransport for LocalFileTransport {
    async fn read_file(&self, path: &str) -> Result<String> {
        let resolved = self.resolve(path);
        let content = tokio::fs::read_to_string(&resolved).await?;
        Ok(content)
    }

    async fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let resolved = self.resolve(path);
        if let Some(parent) = resolved.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&resolved, content).await?;
        Ok(())
    }
}
