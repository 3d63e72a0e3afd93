//! # 持久化存储后端
//!
//! 设置存储只依赖一个极窄的异步键值接口：`get_item` / `set_item` /
//! `remove_all`。生产环境使用基于文件的 [`FileStorage`]（每个 key 一个
//! JSON 文件，存放在 `~/.psm-navigator/` 下）；测试使用内存实现
//! [`MemoryStorage`] 作为替身。选择哪个后端是构造 `SettingsStore` 时
//! 的环境决策，核心逻辑对此无感知。

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use async_trait::async_trait;

/// 异步键值存储接口
///
/// 所有方法都可能因底层持久化失败而返回错误；错误不做分类，
/// 以可读字符串原样向上传播。
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// 读取指定 key 的值；key 不存在时返回 `Ok(None)` 而非错误
    async fn get_item(&self, key: &str) -> Result<Option<String>, String>;

    /// 写入指定 key 的值，覆盖已有内容
    async fn set_item(&self, key: &str, value: &str) -> Result<(), String>;

    /// 清空整个存储命名空间（所有 key）
    async fn remove_all(&self) -> Result<(), String>;
}

/// 基于文件系统的存储后端
///
/// 每个 key 对应根目录下的一个 `<key>.json` 文件。
/// `remove_all` 删除整个根目录，下次写入时自动重建。
pub struct FileStorage {
    /// 存储根目录（如 `~/.psm-navigator/`）
    root: PathBuf,
}

impl FileStorage {
    /// 创建以指定目录为根的文件存储
    ///
    /// 目录无需预先存在，首次写入时自动递归创建。
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// key 对应的文件路径
    fn item_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

#[async_trait]
impl StorageBackend for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        let path = self.item_path(key);

        // 文件不存在等价于 key 不存在
        if !path.exists() {
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| format!("读取存储文件失败: {}", e))?;
        Ok(Some(content))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        // 确保存储目录存在，递归创建所有缺失的父目录
        if !self.root.exists() {
            tokio::fs::create_dir_all(&self.root)
                .await
                .map_err(|e| format!("创建存储目录失败: {}", e))?;
        }

        tokio::fs::write(self.item_path(key), value)
            .await
            .map_err(|e| format!("写入存储文件失败: {}", e))
    }

    async fn remove_all(&self) -> Result<(), String> {
        if !self.root.exists() {
            return Ok(());
        }

        tokio::fs::remove_dir_all(&self.root)
            .await
            .map_err(|e| format!("清空存储目录失败: {}", e))
    }
}

/// 内存存储后端（测试替身）
///
/// 用 `RwLock<HashMap>` 模拟键值命名空间，不触碰文件系统。
#[derive(Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    /// 创建空的内存存储
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        let items = self.items.read().map_err(|e| format!("读锁失败: {}", e))?;
        Ok(items.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        let mut items = self.items.write().map_err(|e| format!("写锁失败: {}", e))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_all(&self) -> Result<(), String> {
        let mut items = self.items.write().map_err(|e| format!("写锁失败: {}", e))?;
        items.clear();
        Ok(())
    }
}
