//! # 数据管理 Tauri Commands
//!
//! 选项页"数据管理"标签对应的 command 处理函数：
//! - `export_config` - 导出完整配置为可下载的 JSON 文档
//! - `import_config` - 从 JSON 文档恢复配置（结构校验后整体替换）
//! - `import_psm_list` - 导入按行粘贴的 PSM 语料

use serde::Serialize;
use tauri::State;

use crate::models::settings::AppSettings;
use crate::services::interchange::{self, ExportDocument};
use crate::services::store::SettingsStore;

/// PSM 语料导入的结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PsmImportResult {
    /// 去重后的导入条数（用于成功提示）
    pub count: usize,

    /// 更新后的完整设置记录
    pub settings: AppSettings,
}

/// 导出完整配置
///
/// 返回文档内容与带日期戳的建议文件名
/// （`psm-navigator-config-<YYYY-MM-DD>.json`），
/// 由前端配合 dialog/fs 插件落盘。
#[tauri::command]
pub async fn export_config(store: State<'_, SettingsStore>) -> Result<ExportDocument, String> {
    let settings = store.get().await?;
    interchange::export_document(&settings)
}

/// 从 JSON 文档恢复配置
///
/// 解析失败或结构校验失败（`platforms`/`variables` 不是数组）时
/// 返回错误且不触碰现有记录；校验通过后整体替换持久化记录。
///
/// # 参数
/// - `content` - 导入文档的原始文本
///
/// # 返回值
/// 恢复后的完整设置记录
#[tauri::command]
pub async fn import_config(
    content: String,
    store: State<'_, SettingsStore>,
) -> Result<AppSettings, String> {
    let imported = interchange::parse_import(&content)?;
    store.set(&imported).await?;
    store.get().await
}

/// 导入按行粘贴的 PSM 语料
///
/// 每行一个 PSM：trim、去空行、大小写敏感去重后整体替换语料字段。
///
/// # 返回值
/// 去重后的条数和更新后的完整设置记录
#[tauri::command]
pub async fn import_psm_list(
    text: String,
    store: State<'_, SettingsStore>,
) -> Result<PsmImportResult, String> {
    let psms = interchange::parse_psm_list(&text);
    let count = psms.len();

    let settings = store
        .update(move |settings| settings.predefined_psms = psms)
        .await?;

    Ok(PsmImportResult { count, settings })
}
