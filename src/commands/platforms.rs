//! # 平台管理 Tauri Commands
//!
//! 提供平台列表的增删改 Tauri command 处理函数：
//! - `add_platform` - 新建平台（id 由后端生成）
//! - `update_platform` - 按 id 整体替换一个平台
//! - `toggle_platform` - 启用/禁用切换
//! - `delete_platform` - 删除平台
//!
//! 每个 command 都返回更新后的完整设置记录，前端直接用返回值刷新界面。

use serde::Deserialize;
use tauri::State;

use crate::models::platform::PlatformConfig;
use crate::models::settings::AppSettings;
use crate::services::store::SettingsStore;
use crate::utils::id;

/// 新建平台的表单数据（不含 id，id 由后端分配）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPlatform {
    /// 平台显示名称
    pub name: String,

    /// URL 模板
    pub url_template: String,

    /// 分类（缺省或留空时归入 "Custom"）
    pub category: Option<String>,

    /// 图标（可选）
    pub icon: Option<String>,
}

/// 把新平台插入列表末尾
///
/// 分类缺省或为空串时落到 "Custom"，新平台默认启用。
fn insert_platform(settings: &mut AppSettings, draft: NewPlatform) {
    let category = draft
        .category
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "Custom".to_string());

    settings.platforms.push(PlatformConfig {
        id: id::next_id(),
        name: draft.name,
        url_template: draft.url_template,
        category: Some(category),
        icon: draft.icon,
        enabled: true,
    });
}

/// 按 id 整体替换平台；id 不存在时不做任何修改
fn apply_platform_update(settings: &mut AppSettings, platform: PlatformConfig) {
    if let Some(existing) = settings.platforms.iter_mut().find(|p| p.id == platform.id) {
        *existing = platform;
    }
}

/// 新建平台
///
/// # 参数
/// - `platform` - 表单数据（名称、URL 模板、分类、图标）
///
/// # 返回值
/// 更新后的完整设置记录
#[tauri::command]
pub async fn add_platform(
    platform: NewPlatform,
    store: State<'_, SettingsStore>,
) -> Result<AppSettings, String> {
    store
        .update(|settings| insert_platform(settings, platform))
        .await
}

/// 按 id 整体替换一个平台
///
/// id 不存在时等价于无修改的写回（与前端 map 替换语义一致）。
#[tauri::command]
pub async fn update_platform(
    platform: PlatformConfig,
    store: State<'_, SettingsStore>,
) -> Result<AppSettings, String> {
    store
        .update(|settings| apply_platform_update(settings, platform))
        .await
}

/// 切换平台的启用状态
///
/// 禁用的平台保留在存储里，但不出现在弹窗的导航列表中。
#[tauri::command]
pub async fn toggle_platform(
    id: String,
    store: State<'_, SettingsStore>,
) -> Result<AppSettings, String> {
    store
        .update(|settings| {
            if let Some(platform) = settings.platforms.iter_mut().find(|p| p.id == id) {
                platform.enabled = !platform.enabled;
            }
        })
        .await
}

/// 删除平台；id 不存在时等价于无修改的写回
#[tauri::command]
pub async fn delete_platform(
    id: String,
    store: State<'_, SettingsStore>,
) -> Result<AppSettings, String> {
    store
        .update(|settings| settings.platforms.retain(|p| p.id != id))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, category: Option<&str>) -> NewPlatform {
        NewPlatform {
            name: name.to_string(),
            url_template: "https://x/{psm}".to_string(),
            category: category.map(|c| c.to_string()),
            icon: None,
        }
    }

    #[test]
    fn test_insert_platform_assigns_id_and_defaults() {
        let mut settings = AppSettings::default();
        insert_platform(&mut settings, draft("Argos", None));

        let added = settings.platforms.last().unwrap();
        assert!(!added.id.is_empty());
        assert_eq!(added.category.as_deref(), Some("Custom"));
        assert!(added.enabled);
    }

    #[test]
    fn test_insert_platform_empty_category_falls_back() {
        let mut settings = AppSettings::default();
        insert_platform(&mut settings, draft("Argos", Some("")));
        assert_eq!(
            settings.platforms.last().unwrap().category.as_deref(),
            Some("Custom")
        );
    }

    #[test]
    fn test_insert_platform_generates_distinct_ids() {
        let mut settings = AppSettings::default();
        insert_platform(&mut settings, draft("A", None));
        insert_platform(&mut settings, draft("B", None));

        let n = settings.platforms.len();
        assert_ne!(settings.platforms[n - 2].id, settings.platforms[n - 1].id);
    }

    #[test]
    fn test_apply_platform_update_replaces_matching_id() {
        let mut settings = AppSettings::default();
        let mut edited = settings.platforms[0].clone();
        edited.name = "Renamed".to_string();
        edited.enabled = false;

        apply_platform_update(&mut settings, edited);
        assert_eq!(settings.platforms[0].name, "Renamed");
        assert!(!settings.platforms[0].enabled);
    }

    #[test]
    fn test_apply_platform_update_unknown_id_is_noop() {
        let mut settings = AppSettings::default();
        let before = settings.platforms.clone();

        let mut ghost = settings.platforms[0].clone();
        ghost.id = "no-such-id".to_string();
        ghost.name = "Ghost".to_string();

        apply_platform_update(&mut settings, ghost);
        assert_eq!(settings.platforms, before);
    }
}
