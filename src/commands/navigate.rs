//! # 导航 Tauri Commands
//!
//! 弹窗界面的核心交互路径：
//! - `jump_to_platform` - 生成 URL、记录历史与上次状态、打开系统浏览器
//! - `preview_url` - 纯替换预览（不落历史、不打开浏览器）
//! - `extract_template_variables` - 列出模板引用的变量名
//! - `suggest_psms` - 在导入的 PSM 语料中联想补全

use std::collections::HashMap;

use tauri::State;

use crate::models::settings::LastState;
use crate::services::navigator;
use crate::services::store::SettingsStore;

/// 跳转到指定平台
///
/// 完整的一次导航：按 id 找到启用的平台，用 trim 后的 PSM 和当前
/// 选中的变量值替换其 URL 模板，把 PSM 压入访问历史、同时把本次
/// 输入记为上次状态（合并成一次写入），最后在系统浏览器中打开。
///
/// # 参数
/// - `platform_id` - 目标平台 id
/// - `psm` - 用户输入的服务标识（此处统一 trim）
/// - `selected_vars` - 变量名 → 当前选中的替换值
///
/// # 返回值
/// 实际打开的 URL
///
/// # 错误
/// PSM 为空、平台不存在或已禁用、存储写入失败、浏览器打开失败
#[tauri::command]
pub async fn jump_to_platform(
    platform_id: String,
    psm: String,
    selected_vars: HashMap<String, String>,
    store: State<'_, SettingsStore>,
) -> Result<String, String> {
    let psm = psm.trim().to_string();
    if psm.is_empty() {
        return Err("PSM 不能为空".to_string());
    }

    let settings = store.get().await?;
    let platform = settings
        .platforms
        .iter()
        .find(|p| p.id == platform_id)
        .ok_or_else(|| format!("未找到平台: {}", platform_id))?;
    if !platform.enabled {
        return Err(format!("平台已禁用: {}", platform.name));
    }

    let url = navigator::generate_url(&platform.url_template, &psm, &selected_vars);

    // 历史追加与上次状态更新合并为一次读-改-写
    store
        .update(move |settings| {
            settings.push_history(&psm);
            settings.last_state = Some(LastState { psm, selected_vars });
        })
        .await?;

    navigator::open_url(&url)?;
    Ok(url)
}

/// 预览替换结果
///
/// 纯函数路径：不读存储、不落历史、不打开浏览器。
/// 前端在编辑模板时用它实时展示效果。
#[tauri::command]
pub fn preview_url(template: String, psm: String, variables: HashMap<String, String>) -> String {
    navigator::generate_url(&template, psm.trim(), &variables)
}

/// 列出模板引用的变量名（排除保留名 psm，保留重复）
///
/// 弹窗据此决定每个平台卡片下渲染哪些变量选择器。
#[tauri::command]
pub fn extract_template_variables(template: String) -> Vec<String> {
    navigator::extract_variables(&template)
}

/// 在导入的 PSM 语料中联想补全
///
/// 大小写不敏感的子串匹配，排除与输入完全相同的条目，最多 5 条。
#[tauri::command]
pub async fn suggest_psms(
    input: String,
    store: State<'_, SettingsStore>,
) -> Result<Vec<String>, String> {
    let settings = store.get().await?;
    Ok(navigator::suggest_psms(&settings.predefined_psms, &input))
}
