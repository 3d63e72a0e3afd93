//! # 本地化 Tauri Commands
//!
//! 提供词条查找的 command 处理函数。语言从当前设置记录中解析，
//! 前端无需自行跟踪语言状态。

use std::collections::HashMap;

use tauri::State;

use crate::services::i18n;
use crate::services::store::SettingsStore;

/// 按点分 key 查找当前语言的词条
///
/// 任何一段路径缺失时返回 key 本身；`params` 中的同名参数会替换
/// 词条里的 `{param}` 占位。
///
/// # 参数
/// - `key` - 点分词条路径（如 `options.platforms.add`）
/// - `params` - 参数替换表（可省略）
#[tauri::command]
pub async fn translate(
    key: String,
    params: Option<HashMap<String, String>>,
    store: State<'_, SettingsStore>,
) -> Result<String, String> {
    let settings = store.get().await?;
    Ok(i18n::translate(
        settings.language,
        &key,
        &params.unwrap_or_default(),
    ))
}
