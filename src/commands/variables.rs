//! # 变量管理 Tauri Commands
//!
//! 提供自定义变量列表的增删改 Tauri command 处理函数：
//! - `add_variable` - 新建变量（id 由后端生成）
//! - `update_variable` - 按 id 整体替换一个变量
//! - `delete_variable` - 删除变量
//!
//! 与平台管理一致，每个 command 返回更新后的完整设置记录。

use serde::Deserialize;
use tauri::State;

use crate::models::settings::AppSettings;
use crate::models::variable::{VariableConfig, VariableOption};
use crate::services::store::SettingsStore;
use crate::utils::id;

/// 新建变量的表单数据（不含 id，id 由后端分配）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewVariable {
    /// 占位符 token（不含花括号）
    pub name: String,

    /// 有序可选项列表
    pub values: Vec<VariableOption>,

    /// 默认值；缺省或留空时回退到第一个选项的替换值
    pub default_value: Option<String>,
}

/// 把新变量插入列表末尾
fn insert_variable(settings: &mut AppSettings, draft: NewVariable) {
    let default_value = draft
        .default_value
        .filter(|v| !v.is_empty())
        .or_else(|| draft.values.first().map(|v| v.value.clone()));

    settings.variables.push(VariableConfig {
        id: id::next_id(),
        name: draft.name,
        values: draft.values,
        default_value,
    });
}

/// 按 id 整体替换变量；id 不存在时不做任何修改
fn apply_variable_update(settings: &mut AppSettings, variable: VariableConfig) {
    if let Some(existing) = settings.variables.iter_mut().find(|v| v.id == variable.id) {
        *existing = variable;
    }
}

/// 新建变量
///
/// # 参数
/// - `variable` - 表单数据（名称、可选项列表、默认值）
///
/// # 返回值
/// 更新后的完整设置记录
#[tauri::command]
pub async fn add_variable(
    variable: NewVariable,
    store: State<'_, SettingsStore>,
) -> Result<AppSettings, String> {
    store
        .update(|settings| insert_variable(settings, variable))
        .await
}

/// 按 id 整体替换一个变量
///
/// id 不存在时等价于无修改的写回（与前端 map 替换语义一致）。
#[tauri::command]
pub async fn update_variable(
    variable: VariableConfig,
    store: State<'_, SettingsStore>,
) -> Result<AppSettings, String> {
    store
        .update(|settings| apply_variable_update(settings, variable))
        .await
}

/// 删除变量；id 不存在时等价于无修改的写回
///
/// 引用该变量的模板不受影响：失去取值来源的占位符在导航时
/// 按 `{name}` 原样保留。
#[tauri::command]
pub async fn delete_variable(
    id: String,
    store: State<'_, SettingsStore>,
) -> Result<AppSettings, String> {
    store
        .update(|settings| settings.variables.retain(|v| v.id != id))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option(name: &str, value: &str) -> VariableOption {
        VariableOption {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_insert_variable_defaults_to_first_option_value() {
        let mut settings = AppSettings::default();
        insert_variable(
            &mut settings,
            NewVariable {
                name: "Cluster".to_string(),
                values: vec![option("默认集群", "default"), option("灰度", "canary")],
                default_value: None,
            },
        );

        let added = settings.variables.last().unwrap();
        assert!(!added.id.is_empty());
        // 回退到第一个选项的替换值（而非展示名）
        assert_eq!(added.default_value.as_deref(), Some("default"));
    }

    #[test]
    fn test_insert_variable_keeps_explicit_default() {
        let mut settings = AppSettings::default();
        insert_variable(
            &mut settings,
            NewVariable {
                name: "Cluster".to_string(),
                values: vec![option("a", "a"), option("b", "b")],
                default_value: Some("b".to_string()),
            },
        );
        assert_eq!(
            settings.variables.last().unwrap().default_value.as_deref(),
            Some("b")
        );
    }

    #[test]
    fn test_insert_variable_without_options_has_no_default() {
        let mut settings = AppSettings::default();
        insert_variable(
            &mut settings,
            NewVariable {
                name: "Empty".to_string(),
                values: vec![],
                default_value: None,
            },
        );
        assert_eq!(settings.variables.last().unwrap().default_value, None);
    }

    #[test]
    fn test_apply_variable_update_unknown_id_is_noop() {
        let mut settings = AppSettings::default();
        let before = settings.variables.clone();

        let mut ghost = settings.variables[0].clone();
        ghost.id = "no-such-id".to_string();
        ghost.name = "Ghost".to_string();

        apply_variable_update(&mut settings, ghost);
        assert_eq!(settings.variables, before);
    }
}
