//! 提交文件的 Blob 存储
//!
//! 路径对核心而言是不透明引用，核心只在生成时从原始文件名推导扩展名。
//! Blob 存储与关系库之间没有事务关联，一致性由工作流层的补偿清理保证。

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::{EduSystemError, Result};

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// 存入文件内容，返回不透明路径
    async fn store(&self, bytes: &[u8], original_filename: &str) -> Result<String>;

    /// 读取文件内容，不存在时返回 NotFound
    async fn read(&self, path: &str) -> Result<Vec<u8>>;

    /// 删除文件，不存在时返回 false
    async fn remove(&self, path: &str) -> Result<bool>;
}

/// 本地文件系统实现
///
/// 文件以 UUID 命名存放在上传目录下，只保留原始文件名的扩展名。
pub struct LocalBlobStore {
    base_dir: PathBuf,
    max_size: usize,
}

impl LocalBlobStore {
    /// 按全局配置创建
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::new_with_dir(&config.upload.dir, config.upload.max_size).await
    }

    /// 用指定目录创建（测试与嵌入方使用）
    pub async fn new_with_dir(dir: impl Into<PathBuf>, max_size: usize) -> Result<Self> {
        let base_dir = dir.into();
        fs::create_dir_all(&base_dir).await?;
        Ok(Self { base_dir, max_size })
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base_dir.join(path)
    }

    /// 从原始文件名推导存储文件名：UUID + 原扩展名
    fn stored_name(original_filename: &str) -> String {
        let uuid = uuid::Uuid::new_v4();
        match Path::new(original_filename)
            .extension()
            .and_then(|ext| ext.to_str())
        {
            Some(ext) if !ext.is_empty() => format!("{uuid}.{ext}"),
            _ => uuid.to_string(),
        }
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn store(&self, bytes: &[u8], original_filename: &str) -> Result<String> {
        if bytes.len() > self.max_size {
            return Err(EduSystemError::storage(format!(
                "文件大小 {} 超出限制 {}",
                bytes.len(),
                self.max_size
            )));
        }

        let name = Self::stored_name(original_filename);
        fs::write(self.resolve(&name), bytes).await?;

        debug!("已存入文件 {} ({} 字节)", name, bytes.len());
        Ok(name)
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>> {
        match fs::read(self.resolve(path)).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(
                EduSystemError::not_found(format!("文件不存在: {path}")),
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn remove(&self, path: &str) -> Result<bool> {
        match fs::remove_file(self.resolve(path)).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn temp_store() -> LocalBlobStore {
        let dir = std::env::temp_dir().join(format!("edusystem-blob-{}", uuid::Uuid::new_v4()));
        LocalBlobStore::new_with_dir(dir, 1024).await.unwrap()
    }

    #[tokio::test]
    async fn test_store_and_read_round_trip() {
        let store = temp_store().await;
        let path = store.store(b"hello", "report.pdf").await.unwrap();
        assert!(path.ends_with(".pdf"));
        assert_eq!(store.read(&path).await.unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_remove_missing_returns_false() {
        let store = temp_store().await;
        assert!(!store.remove("no-such-file.txt").await.unwrap());
    }

    #[tokio::test]
    async fn test_read_missing_is_not_found() {
        let store = temp_store().await;
        let err = store.read("no-such-file.txt").await.unwrap_err();
        assert_eq!(err.error_type(), "Resource Not Found");
    }

    #[tokio::test]
    async fn test_oversize_rejected() {
        let store = temp_store().await;
        let big = vec![0u8; 2048];
        assert!(store.store(&big, "big.bin").await.is_err());
    }

    #[tokio::test]
    async fn test_name_without_extension() {
        let store = temp_store().await;
        let path = store.store(b"x", "Makefile").await.unwrap();
        assert!(!path.contains('.'));
    }
}
