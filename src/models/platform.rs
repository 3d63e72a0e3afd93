//! # 平台数据模型
//!
//! 定义可跳转的目标平台（代码搜索、部署控制台、监控面板、日志平台等）
//! 的 Rust 结构体。每个平台携带一个 URL 模板，在导航时由模板引擎
//! 将 `{psm}` 与自定义变量占位符替换为具体值。

use serde::{Deserialize, Serialize};

/// 目标平台配置
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface PlatformConfig {
///   id: string;
///   name: string;
///   urlTemplate: string;
///   category?: string;
///   icon?: string;
///   enabled: boolean;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformConfig {
    /// 唯一标识符：由毫秒时间戳和进程内单调计数器组合生成
    pub id: String,

    /// 平台显示名称（如 "Grafana (Metrics)"）
    pub name: String,

    /// URL 模板：包含 `{psm}` 及任意自定义变量占位符
    /// （如 `https://grafana.internal/d/{psm}?region={Region}`）
    pub url_template: String,

    /// 分类标签（可选，如 "Code" / "Deployment" / "Observability"）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// 图标名称或 URL（可选，仅供前端渲染）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// 是否启用：禁用的平台不出现在导航列表中，但保留在存储里
    pub enabled: bool,
}
