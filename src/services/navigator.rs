//! # URL 模板引擎
//!
//! 纯函数实现的模板解析与替换：把 URL 模板切分为 字面量/占位符 片段，
//! 再逐片段替换为具体值。`{psm}` 是保留占位符，始终替换为用户输入的
//! 服务标识；其余占位符按名字在变量映射中精确查找。
//!
//! ## 切分式替换
//! 模板只做一次正则扫描，替换按片段进行。相比逐变量的全串替换，
//! 这保证了互为子串的变量名（如 `Region` 与 `VRegion`）不会互相
//! 误替换，且替换结果与映射的遍历顺序无关。
//!
//! 替换不做任何转义或 URL 编码，原始字符串直接写入结果；
//! 值里若含有 `{...}` 形式的文本也不会被二次替换（单遍替换）。

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// 保留占位符名：始终替换为用户输入的 PSM
pub const PSM_PLACEHOLDER: &str = "psm";

/// 输入联想的最大返回条数
pub const SUGGESTION_LIMIT: usize = 5;

/// 占位符匹配正则：一个开花括号、一个或多个 ASCII 字母/数字/下划线、一个闭花括号
///
/// 含空格、标点等其他字符的花括号内容不构成占位符，按字面量原样保留。
/// 使用 `LazyLock` 实现全局唯一的预编译正则，避免重复编译开销。
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap());

/// 模板片段：字面量或占位符
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateSegment {
    /// 原样输出的字面量文本
    Literal(String),
    /// 占位符名（不含花括号）
    Placeholder(String),
}

/// 将模板切分为 字面量/占位符 片段序列
///
/// 按顺序输出全部片段，把各片段原样拼接即可还原模板。
/// 空模板返回空序列。
pub fn tokenize(template: &str) -> Vec<TemplateSegment> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for found in PLACEHOLDER_RE.find_iter(template) {
        if found.start() > last_end {
            segments.push(TemplateSegment::Literal(
                template[last_end..found.start()].to_string(),
            ));
        }
        // 去掉首尾花括号得到占位符名
        let name = &template[found.start() + 1..found.end() - 1];
        segments.push(TemplateSegment::Placeholder(name.to_string()));
        last_end = found.end();
    }

    if last_end < template.len() {
        segments.push(TemplateSegment::Literal(template[last_end..].to_string()));
    }

    segments
}

/// 列出模板引用的变量名
///
/// 按出现顺序返回全部占位符名，排除保留名 `psm`；
/// 模板中重复出现的占位符会产生重复条目，由调用方按需去重。
pub fn extract_variables(template: &str) -> Vec<String> {
    tokenize(template)
        .into_iter()
        .filter_map(|segment| match segment {
            TemplateSegment::Placeholder(name) if name != PSM_PLACEHOLDER => Some(name),
            _ => None,
        })
        .collect()
}

/// 用具体值替换模板中的占位符，生成可导航的 URL
///
/// 逐片段输出：字面量原样；`{psm}` 替换为 `psm` 参数（调用方负责
/// 预先 trim）；在 `variables` 中能查到的占位符替换为对应值；
/// 查不到的占位符按 `{name}` 原样保留。本函数没有失败路径。
pub fn generate_url(template: &str, psm: &str, variables: &HashMap<String, String>) -> String {
    let mut url = String::with_capacity(template.len() + psm.len());

    for segment in tokenize(template) {
        match segment {
            TemplateSegment::Literal(text) => url.push_str(&text),
            TemplateSegment::Placeholder(name) => {
                if name == PSM_PLACEHOLDER {
                    url.push_str(psm);
                } else if let Some(value) = variables.get(&name) {
                    url.push_str(value);
                } else {
                    // 未提供值的占位符原样透传
                    url.push('{');
                    url.push_str(&name);
                    url.push('}');
                }
            }
        }
    }

    url
}

/// 在系统默认浏览器中打开 URL
///
/// 委托给 opener 插件的 OS 原生打开能力；失败时把错误转为字符串
/// 交由 command 层透传给前端。
pub fn open_url(url: &str) -> Result<(), String> {
    tauri_plugin_opener::open_url(url, None::<&str>)
        .map_err(|e| format!("打开浏览器失败: {}", e))
}

/// 在导入的 PSM 语料中联想补全
///
/// 大小写不敏感的子串包含匹配，排除与输入完全相同（忽略大小写）的
/// 条目，最多返回 [`SUGGESTION_LIMIT`] 条。空输入不联想。
pub fn suggest_psms(predefined: &[String], input: &str) -> Vec<String> {
    if input.is_empty() {
        return vec![];
    }

    let needle = input.to_lowercase();
    predefined
        .iter()
        .filter(|psm| {
            let lower = psm.to_lowercase();
            lower.contains(&needle) && lower != needle
        })
        .take(SUGGESTION_LIMIT)
        .cloned()
        .collect()
}
