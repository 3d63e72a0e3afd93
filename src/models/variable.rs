//! # 自定义变量数据模型
//!
//! 定义跨平台模板共享的命名替换变量（如 Region、Env）。
//! 变量名即模板中的占位符 token（不含花括号），
//! 变量值是一个有序的可选项列表，供弹窗界面切换。

use serde::{Deserialize, Serialize};

/// 变量的单个可选项
///
/// `name` 是展示给用户的标签，`value` 是实际替换进 URL 的字符串。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableOption {
    /// 展示名称（如 "US"）
    pub name: String,

    /// 替换值（如 "us-east"）
    pub value: String,
}

/// 自定义变量配置
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface VariableConfig {
///   id: string;
///   name: string;
///   values: { name: string; value: string }[];
///   defaultValue?: string;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableConfig {
    /// 唯一标识符：由毫秒时间戳和进程内单调计数器组合生成
    pub id: String,

    /// 占位符 token（不含花括号，如 "Region"）
    pub name: String,

    /// 有序可选项列表；不同选项允许同名
    pub values: Vec<VariableOption>,

    /// 默认值（可选）：通常等于某个选项的 value，但不强制校验
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl VariableConfig {
    /// 计算变量的生效默认值
    ///
    /// 优先使用显式配置的 `default_value`，缺省时回退到第一个选项的替换值。
    /// 弹窗界面据此为每个变量预选一个值。
    ///
    /// # 返回值
    /// - `Some(value)` - 生效的默认替换值
    /// - `None` - 既无显式默认值也无任何选项
    pub fn effective_default(&self) -> Option<&str> {
        self.default_value
            .as_deref()
            .or_else(|| self.values.first().map(|v| v.value.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variable(default_value: Option<&str>, values: &[(&str, &str)]) -> VariableConfig {
        VariableConfig {
            id: "v1".to_string(),
            name: "Region".to_string(),
            values: values
                .iter()
                .map(|(name, value)| VariableOption {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            default_value: default_value.map(|v| v.to_string()),
        }
    }

    #[test]
    fn test_effective_default_prefers_explicit_value() {
        let v = variable(Some("CN"), &[("US", "US"), ("CN", "CN")]);
        assert_eq!(v.effective_default(), Some("CN"));
    }

    #[test]
    fn test_effective_default_falls_back_to_first_option() {
        // 无显式默认值时取第一个选项的 value（而非展示名）
        let v = variable(None, &[("美东", "us-east"), ("新加坡", "sg")]);
        assert_eq!(v.effective_default(), Some("us-east"));
    }

    #[test]
    fn test_effective_default_empty_variable() {
        let v = variable(None, &[]);
        assert_eq!(v.effective_default(), None);
    }
}
