//! # 应用设置数据模型
//!
//! 定义持久化的根记录 `AppSettings`（平台列表、变量列表、访问历史、
//! 导入的 PSM 语料、界面语言、上次弹窗状态）及其读取时的兜底合并语义。
//!
//! ## 设计决策
//! - 存储中的记录可能来自旧版本或被部分写入，因此反序列化目标是
//!   全字段可选的 `StoredSettings`，再经由唯一的构造路径
//!   `AppSettings::from_stored` 逐字段覆盖默认值。已知字段缺失或为
//!   null 时回退默认；未知字段通过 `#[serde(flatten)]` 原样保留，
//!   避免读取后保存时被丢弃。
//! - 数组字段整体替换而非逐项合并：存储的平台列表会完全覆盖默认
//!   平台列表，被用户删除的默认项不会复活。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::platform::PlatformConfig;
use crate::models::variable::{VariableConfig, VariableOption};

/// 访问历史的最大长度：超出时丢弃最旧的条目
pub const HISTORY_LIMIT: usize = 10;

/// 界面语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// 英文（默认）
    #[default]
    En,
    /// 中文
    Cn,
}

/// 弹窗的上次使用状态
///
/// 记录上次输入的 PSM 和各变量的选中值，重新打开弹窗时恢复。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastState {
    /// 上次输入的 PSM
    pub psm: String,

    /// 上次各变量的选中值：变量名 → 替换值
    pub selected_vars: HashMap<String, String>,
}

/// 应用设置根记录
///
/// 整条记录以单个 JSON 文档持久化，所有修改都是整记录的读-改-写。
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface AppSettings {
///   platforms: PlatformConfig[];
///   variables: VariableConfig[];
///   history: string[];
///   predefinedPsms: string[];
///   language: 'en' | 'cn';
///   lastState?: { psm: string; selectedVars: Record<string, string> };
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// 目标平台列表
    pub platforms: Vec<PlatformConfig>,

    /// 自定义变量列表
    pub variables: Vec<VariableConfig>,

    /// 最近访问的 PSM，最新在前，最多 [`HISTORY_LIMIT`] 条，无重复
    pub history: Vec<String>,

    /// 导入的 PSM 语料，供输入联想；导入时大小写敏感地去重
    pub predefined_psms: Vec<String>,

    /// 界面语言
    pub language: Language,

    /// 上次弹窗状态（可选）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_state: Option<LastState>,

    /// 未知的顶层字段：原样保留，随记录一起写回
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 存储中记录的反序列化形态
///
/// 每个已知字段都是可选的（缺失或 null 均视为未设置），
/// 未知字段收集到 `extra` 中。仅作为 [`AppSettings::from_stored`]
/// 的输入，不在其他地方使用。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSettings {
    pub platforms: Option<Vec<PlatformConfig>>,
    pub variables: Option<Vec<VariableConfig>>,
    pub history: Option<Vec<String>>,
    pub predefined_psms: Option<Vec<String>>,
    pub language: Option<Language>,
    pub last_state: Option<LastState>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AppSettings {
    /// 硬编码默认记录：4 个默认平台 + 2 个默认变量，
    /// 空历史、空 PSM 语料、英文界面
    fn default() -> Self {
        Self {
            platforms: default_platforms(),
            variables: default_variables(),
            history: vec![],
            predefined_psms: vec![],
            language: Language::En,
            last_state: None,
            extra: Map::new(),
        }
    }
}

impl AppSettings {
    /// 将存储中读到的记录合并到默认值之上
    ///
    /// 这是记录的唯一兜底构造路径：五个已知字段逐一应用
    /// "缺失即默认" 规则，`lastState` 与未知字段原样透传。
    pub fn from_stored(stored: StoredSettings) -> Self {
        Self {
            platforms: stored.platforms.unwrap_or_else(default_platforms),
            variables: stored.variables.unwrap_or_else(default_variables),
            history: stored.history.unwrap_or_default(),
            predefined_psms: stored.predefined_psms.unwrap_or_default(),
            language: stored.language.unwrap_or_default(),
            last_state: stored.last_state,
            extra: stored.extra,
        }
    }

    /// 将一个 PSM 压入访问历史
    ///
    /// 语义：已存在的同名条目先移除（移到最前而非重复），
    /// 新条目插到最前，整体截断到 [`HISTORY_LIMIT`] 条。
    pub fn push_history(&mut self, psm: &str) {
        self.history.retain(|h| h != psm);
        self.history.insert(0, psm.to_string());
        self.history.truncate(HISTORY_LIMIT);
    }
}

/// 默认平台列表：代码搜索、部署控制台、监控面板、日志平台
fn default_platforms() -> Vec<PlatformConfig> {
    vec![
        PlatformConfig {
            id: "1".to_string(),
            name: "SCM (Code)".to_string(),
            url_template: "https://code.internal/search?q={psm}".to_string(),
            category: Some("Code".to_string()),
            icon: None,
            enabled: true,
        },
        PlatformConfig {
            id: "2".to_string(),
            name: "TCE (Deploy)".to_string(),
            url_template: "https://tce.internal/services/{psm}?region={VRegion}&env={Env}"
                .to_string(),
            category: Some("Deployment".to_string()),
            icon: None,
            enabled: true,
        },
        PlatformConfig {
            id: "3".to_string(),
            name: "Grafana (Metrics)".to_string(),
            url_template:
                "https://grafana.internal/d/service-overview?var-service={psm}&var-region={VRegion}"
                    .to_string(),
            category: Some("Observability".to_string()),
            icon: None,
            enabled: true,
        },
        PlatformConfig {
            id: "4".to_string(),
            name: "Kibana (Logs)".to_string(),
            url_template:
                "https://kibana.internal/app/discover#/?_a=(query:(language:kuery,query:{psm}))"
                    .to_string(),
            category: Some("Observability".to_string()),
            icon: None,
            enabled: true,
        },
    ]
}

/// 默认变量列表：Region（US/CN/SG）和 Env（prod/boe/ppe）
fn default_variables() -> Vec<VariableConfig> {
    vec![
        VariableConfig {
            id: "v1".to_string(),
            name: "Region".to_string(),
            values: vec![
                VariableOption {
                    name: "US".to_string(),
                    value: "US".to_string(),
                },
                VariableOption {
                    name: "CN".to_string(),
                    value: "CN".to_string(),
                },
                VariableOption {
                    name: "SG".to_string(),
                    value: "SG".to_string(),
                },
            ],
            default_value: Some("US".to_string()),
        },
        VariableConfig {
            id: "v2".to_string(),
            name: "Env".to_string(),
            values: vec![
                VariableOption {
                    name: "prod".to_string(),
                    value: "prod".to_string(),
                },
                VariableOption {
                    name: "boe".to_string(),
                    value: "boe".to_string(),
                },
                VariableOption {
                    name: "ppe".to_string(),
                    value: "ppe".to_string(),
                },
            ],
            default_value: Some("prod".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_shape() {
        // 默认记录：4 个平台、2 个变量、空历史、空语料、英文
        let settings = AppSettings::default();
        assert_eq!(settings.platforms.len(), 4);
        assert_eq!(settings.variables.len(), 2);
        assert!(settings.history.is_empty());
        assert!(settings.predefined_psms.is_empty());
        assert_eq!(settings.language, Language::En);
        assert!(settings.last_state.is_none());
    }

    #[test]
    fn test_from_stored_overlays_known_fields() {
        let stored: StoredSettings =
            serde_json::from_str(r#"{"history":["svc.a.b"],"language":"cn"}"#).unwrap();
        let settings = AppSettings::from_stored(stored);

        // 显式存在的字段覆盖默认值
        assert_eq!(settings.history, vec!["svc.a.b".to_string()]);
        assert_eq!(settings.language, Language::Cn);
        // 缺失的字段回退默认值
        assert_eq!(settings.platforms.len(), 4);
        assert_eq!(settings.variables.len(), 2);
    }

    #[test]
    fn test_from_stored_null_field_falls_back() {
        // null 与缺失同样回退默认（对应原先的 falsy 兜底）
        let stored: StoredSettings =
            serde_json::from_str(r#"{"platforms":null,"history":null}"#).unwrap();
        let settings = AppSettings::from_stored(stored);
        assert_eq!(settings.platforms.len(), 4);
        assert!(settings.history.is_empty());
    }

    #[test]
    fn test_from_stored_stored_array_replaces_defaults_wholesale() {
        // 存储的平台列表整体替换默认列表，被删除的默认项不复活
        let stored: StoredSettings = serde_json::from_str(
            r#"{"platforms":[{"id":"9","name":"Argos","urlTemplate":"https://argos/{psm}","enabled":false}]}"#,
        )
        .unwrap();
        let settings = AppSettings::from_stored(stored);
        assert_eq!(settings.platforms.len(), 1);
        assert_eq!(settings.platforms[0].name, "Argos");
        assert!(!settings.platforms[0].enabled);
    }

    #[test]
    fn test_unknown_fields_round_trip() {
        // 未知顶层字段在 反序列化 → 序列化 后原样保留
        let stored: StoredSettings =
            serde_json::from_str(r#"{"history":[],"futureFlag":{"nested":1}}"#).unwrap();
        let settings = AppSettings::from_stored(stored);
        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json["futureFlag"]["nested"], 1);
    }

    #[test]
    fn test_camel_case_field_names() {
        let json = serde_json::to_value(AppSettings::default()).unwrap();
        assert!(json.get("predefinedPsms").is_some());
        assert!(json.get("platforms").is_some());
        assert_eq!(
            json["platforms"][0]["urlTemplate"],
            "https://code.internal/search?q={psm}"
        );
        // 未设置的 lastState 不序列化
        assert!(json.get("lastState").is_none());
    }

    #[test]
    fn test_push_history_moves_existing_to_front() {
        let mut settings = AppSettings::default();
        settings.history = vec!["x".to_string(), "y".to_string()];
        settings.push_history("x");
        assert_eq!(settings.history, vec!["x".to_string(), "y".to_string()]);

        settings.push_history("y");
        assert_eq!(settings.history, vec!["y".to_string(), "x".to_string()]);
    }

    #[test]
    fn test_push_history_truncates_to_limit() {
        let mut settings = AppSettings::default();
        for i in 0..HISTORY_LIMIT {
            settings.push_history(&format!("svc.{}", i));
        }
        assert_eq!(settings.history.len(), HISTORY_LIMIT);

        // 新条目插到最前，最旧的 svc.0 被丢弃
        settings.push_history("svc.new");
        assert_eq!(settings.history.len(), HISTORY_LIMIT);
        assert_eq!(settings.history[0], "svc.new");
        assert!(!settings.history.contains(&"svc.0".to_string()));
    }
}
