//! # 设置 Tauri Commands
//!
//! 提供设置记录的读写 Tauri command 处理函数：
//! - `get_settings` / `save_settings` - 读取与整体保存设置记录
//! - `set_language` - 切换界面语言
//! - `save_last_state` - 持久化弹窗的上次使用状态
//! - `add_history` / `clear_history` - 访问历史维护
//! - `clear_all_data` - 清除整个持久化命名空间
//!
//! 设置存储以 Tauri managed state 注入（`State<SettingsStore>`），
//! 不存在进程级全局单例。

use tauri::State;

use crate::models::settings::{AppSettings, Language, LastState};
use crate::services::store::SettingsStore;

/// 读取设置记录
///
/// 前端在两个界面加载时调用。存储为空时返回硬编码默认记录，
/// 永远不会出现"未找到"类错误。
///
/// # 错误
/// 底层持久化读取失败时返回错误
#[tauri::command]
pub async fn get_settings(store: State<'_, SettingsStore>) -> Result<AppSettings, String> {
    store.get().await
}

/// 整体保存设置记录（后写者胜）
///
/// # 参数
/// - `settings` - 要保存的完整设置记录
///
/// # 错误
/// 序列化或底层持久化写入失败时返回错误
#[tauri::command]
pub async fn save_settings(
    settings: AppSettings,
    store: State<'_, SettingsStore>,
) -> Result<(), String> {
    store.set(&settings).await
}

/// 切换界面语言并返回更新后的记录
#[tauri::command]
pub async fn set_language(
    language: Language,
    store: State<'_, SettingsStore>,
) -> Result<AppSettings, String> {
    store.update(|settings| settings.language = language).await
}

/// 持久化弹窗的上次使用状态（输入的 PSM 和各变量选中值）
#[tauri::command]
pub async fn save_last_state(
    state: LastState,
    store: State<'_, SettingsStore>,
) -> Result<(), String> {
    store
        .update(|settings| settings.last_state = Some(state))
        .await?;
    Ok(())
}

/// 将一个 PSM 追加进访问历史
///
/// 已存在的条目移到最前（不重复），历史最多保留 10 条。
#[tauri::command]
pub async fn add_history(psm: String, store: State<'_, SettingsStore>) -> Result<(), String> {
    store.add_history(&psm).await
}

/// 清空访问历史，其余字段不动
#[tauri::command]
pub async fn clear_history(store: State<'_, SettingsStore>) -> Result<(), String> {
    store.clear_history().await
}

/// 清除所有数据
///
/// 删除整个持久化命名空间（不只是设置记录本身），
/// 下次读取将重建硬编码默认记录。前端在调用前要求用户输入
/// "delete all" 进行二次确认。
#[tauri::command]
pub async fn clear_all_data(store: State<'_, SettingsStore>) -> Result<(), String> {
    store.clear_all_data().await
}
