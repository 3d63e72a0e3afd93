//! # 配置交换服务
//!
//! 设置记录的文件级导入导出，以及 PSM 语料的行文本导入：
//! - **导出**：整条 `AppSettings` 序列化为 2 空格缩进的 JSON 文档，
//!   文件名带 UTC 日期戳（`psm-navigator-config-<日期>.json`）
//! - **导入**：解析 JSON 并做结构校验（`platforms` 与 `variables`
//!   必须是数组，不做更深的逐字段校验），失败时不触碰现有记录
//! - **PSM 列表**：按行切分、trim、去空行，大小写敏感地去重

use serde::Serialize;

use crate::models::settings::{AppSettings, StoredSettings};

/// 待下载的配置导出文档
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// 建议的下载文件名（含 UTC 日期戳）
    pub file_name: String,

    /// 文档内容：完整设置记录的格式化 JSON
    pub content: String,
}

/// 把设置记录打包为导出文档
///
/// # 错误
/// 序列化失败时返回错误
pub fn export_document(settings: &AppSettings) -> Result<ExportDocument, String> {
    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("序列化配置失败: {}", e))?;

    let date = chrono::Utc::now().format("%Y-%m-%d");
    Ok(ExportDocument {
        file_name: format!("psm-navigator-config-{}.json", date),
        content,
    })
}

/// 解析并校验导入的配置文档
///
/// 两类失败都映射为导入错误，由调用方以通用的"导入失败"提示呈现：
/// - JSON 解析失败
/// - 结构校验失败：顶层缺少数组类型的 `platforms` 或 `variables`
///
/// 校验通过后经 [`AppSettings::from_stored`] 归一化，调用方随后
/// 整体替换持久化记录。
pub fn parse_import(content: &str) -> Result<AppSettings, String> {
    let value: serde_json::Value =
        serde_json::from_str(content).map_err(|e| format!("导入配置解析失败: {}", e))?;

    // 结构校验：仅检查两个数组字段的形状
    if !value.get("platforms").is_some_and(|v| v.is_array())
        || !value.get("variables").is_some_and(|v| v.is_array())
    {
        return Err("导入配置格式无效: platforms/variables 必须是数组".to_string());
    }

    let stored: StoredSettings =
        serde_json::from_value(value).map_err(|e| format!("导入配置解析失败: {}", e))?;
    Ok(AppSettings::from_stored(stored))
}

/// 解析按行粘贴的 PSM 列表
///
/// 每行一个 PSM：trim 后丢弃空行，大小写敏感地去重，
/// 保留首次出现的顺序。
pub fn parse_psm_list(text: &str) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| seen.insert(line.to_string()))
        .map(str::to_string)
        .collect()
}
