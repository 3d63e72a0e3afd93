//! # 设置存储服务
//!
//! 对单条 `AppSettings` 记录的持久化读写，以及建立在读-改-写之上的
//! 派生操作（历史追加、历史清空、全量清除）。
//!
//! ## 读取兜底
//! 读取永远成功返回一条记录：命名空间为空时返回硬编码默认值；
//! 存储的记录按 "缺失字段回退默认" 的浅合并规则补全（见
//! [`AppSettings::from_stored`]）。
//!
//! ## 写串行化
//! 存储实例由 Tauri managed state 持有并注入各 command，command 可能
//! 在多个线程上并发执行。所有读-改-写修改都经过 [`SettingsStore::update`]，
//! 由内部的 `tokio::sync::Mutex` 串行化，避免并发修改互相覆盖
//! （丢失更新）。纯读取不加锁。跨进程的写入者仍是后写者胜。

use tokio::sync::Mutex;

use crate::models::settings::{AppSettings, StoredSettings};
use crate::services::backend::{FileStorage, StorageBackend};
use crate::utils::path;

/// 设置记录在存储命名空间中的 key
pub const STORAGE_KEY: &str = "psm_navigator_settings";

/// 设置存储
///
/// 显式持有的存储对象（而非全局单例），通过 Tauri 的 `manage()`
/// 注册为应用状态，command 以 `State<SettingsStore>` 注入访问；
/// 测试用 [`MemoryStorage`](crate::services::backend::MemoryStorage)
/// 构造独立实例。
pub struct SettingsStore {
    /// 底层键值后端（文件或内存）
    backend: Box<dyn StorageBackend>,

    /// 写串行锁：保护所有读-改-写序列
    write_lock: Mutex<()>,
}

impl SettingsStore {
    /// 用指定后端创建存储
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self {
            backend,
            write_lock: Mutex::new(()),
        }
    }

    /// 用默认的文件后端（`~/.psm-navigator/`）创建存储
    pub fn with_file_backend() -> Result<Self, String> {
        let root = path::get_config_dir()?;
        Ok(Self::new(Box::new(FileStorage::new(root))))
    }

    /// 读取设置记录
    ///
    /// - 命名空间中无记录：返回硬编码默认值（不是错误）
    /// - 有记录：反序列化后经唯一构造路径合并到默认值之上
    /// - 记录损坏无法解析：记一条警告并回退默认值，不让读取失败
    ///
    /// # 错误
    /// 仅当底层后端读取失败时返回错误
    pub async fn get(&self) -> Result<AppSettings, String> {
        let Some(raw) = self.backend.get_item(STORAGE_KEY).await? else {
            return Ok(AppSettings::default());
        };

        match serde_json::from_str::<StoredSettings>(&raw) {
            Ok(stored) => Ok(AppSettings::from_stored(stored)),
            Err(e) => {
                log::warn!("解析存储的设置记录失败，回退默认值: {}", e);
                Ok(AppSettings::default())
            }
        }
    }

    /// 整体替换设置记录（后写者胜，无部分更新）
    ///
    /// # 错误
    /// 序列化失败或底层后端写入失败时返回错误
    pub async fn set(&self, settings: &AppSettings) -> Result<(), String> {
        // 使用 2 空格缩进格式化 JSON，与导出文档保持一致
        let content = serde_json::to_string_pretty(settings)
            .map_err(|e| format!("序列化设置失败: {}", e))?;
        self.backend.set_item(STORAGE_KEY, &content).await
    }

    /// 串行化的读-改-写原语
    ///
    /// 持有写锁期间：读取当前记录、应用修改、写回，并返回修改后的
    /// 记录。所有派生修改操作都经过这里。
    pub async fn update<F>(&self, mutate: F) -> Result<AppSettings, String>
    where
        F: FnOnce(&mut AppSettings),
    {
        let _guard = self.write_lock.lock().await;

        let mut settings = self.get().await?;
        mutate(&mut settings);
        self.set(&settings).await?;

        Ok(settings)
    }

    /// 将一个 PSM 追加进访问历史
    ///
    /// 已存在的条目移到最前（不重复），整体截断到上限。
    pub async fn add_history(&self, psm: &str) -> Result<(), String> {
        self.update(|settings| settings.push_history(psm)).await?;
        Ok(())
    }

    /// 清空访问历史，其余字段不动
    pub async fn clear_history(&self) -> Result<(), String> {
        self.update(|settings| settings.history.clear()).await?;
        Ok(())
    }

    /// 清除整个持久化命名空间
    ///
    /// 比 "把记录重置为默认值" 更彻底：所有 key 一并删除，
    /// 下次读取将重建硬编码默认记录。
    pub async fn clear_all_data(&self) -> Result<(), String> {
        let _guard = self.write_lock.lock().await;
        self.backend.remove_all().await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::models::settings::{HISTORY_LIMIT, Language};
    use crate::services::backend::MemoryStorage;

    fn memory_store() -> SettingsStore {
        SettingsStore::new(Box::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn test_get_on_empty_backend_returns_exact_defaults() {
        let store = memory_store();
        let settings = store.get().await.unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let store = memory_store();

        let mut settings = AppSettings::default();
        settings.language = Language::Cn;
        settings.history = vec!["svc.a.b".to_string()];
        settings.predefined_psms = vec!["svc.a.b".to_string(), "svc.c.d".to_string()];
        settings.platforms[0].enabled = false;

        store.set(&settings).await.unwrap();
        let loaded = store.get().await.unwrap();
        assert_eq!(loaded, settings);
    }

    #[tokio::test]
    async fn test_get_merges_partial_stored_record() {
        let store = memory_store();

        // 直接向后端写入一条只有部分字段的旧记录
        store
            .backend
            .set_item(STORAGE_KEY, r#"{"history":["old.svc"]}"#)
            .await
            .unwrap();

        let settings = store.get().await.unwrap();
        assert_eq!(settings.history, vec!["old.svc".to_string()]);
        // 其余字段补全为默认值
        assert_eq!(settings.platforms.len(), 4);
        assert_eq!(settings.language, Language::En);
    }

    #[tokio::test]
    async fn test_get_corrupted_record_falls_back_to_defaults() {
        let store = memory_store();
        store
            .backend
            .set_item(STORAGE_KEY, "not json at all {")
            .await
            .unwrap();

        let settings = store.get().await.unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[tokio::test]
    async fn test_add_history_move_to_front_no_duplicate() {
        let store = memory_store();
        store.add_history("x").await.unwrap();
        store.add_history("y").await.unwrap();
        // 此时历史为 ["y", "x"]；重新添加 x 应移到最前
        store.add_history("x").await.unwrap();

        let settings = store.get().await.unwrap();
        assert_eq!(settings.history, vec!["x".to_string(), "y".to_string()]);
    }

    #[tokio::test]
    async fn test_add_history_respects_limit() {
        let store = memory_store();
        for i in 0..HISTORY_LIMIT {
            store.add_history(&format!("svc.{}", i)).await.unwrap();
        }
        store.add_history("svc.newest").await.unwrap();

        let settings = store.get().await.unwrap();
        assert_eq!(settings.history.len(), HISTORY_LIMIT);
        assert_eq!(settings.history[0], "svc.newest");
        assert!(!settings.history.contains(&"svc.0".to_string()));
    }

    #[tokio::test]
    async fn test_clear_history_leaves_other_fields() {
        let store = memory_store();
        store
            .update(|settings| {
                settings.language = Language::Cn;
                settings.push_history("svc.a");
            })
            .await
            .unwrap();

        store.clear_history().await.unwrap();

        let settings = store.get().await.unwrap();
        assert!(settings.history.is_empty());
        assert_eq!(settings.language, Language::Cn);
    }

    #[tokio::test]
    async fn test_clear_all_data_reconstructs_defaults() {
        let store = memory_store();
        store
            .update(|settings| {
                settings.language = Language::Cn;
                settings.platforms.clear();
            })
            .await
            .unwrap();

        store.clear_all_data().await.unwrap();

        let settings = store.get().await.unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[tokio::test]
    async fn test_concurrent_updates_do_not_lose_writes() {
        // 两个并发的历史追加都应落盘（写锁串行化读-改-写）
        let store = Arc::new(memory_store());
        let a = Arc::clone(&store);
        let b = Arc::clone(&store);

        let (ra, rb) = tokio::join!(a.add_history("svc.a"), b.add_history("svc.b"));
        ra.unwrap();
        rb.unwrap();

        let settings = store.get().await.unwrap();
        assert_eq!(settings.history.len(), 2);
        assert!(settings.history.contains(&"svc.a".to_string()));
        assert!(settings.history.contains(&"svc.b".to_string()));
    }
}
