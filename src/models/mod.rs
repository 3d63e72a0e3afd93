//! # 数据模型模块
//!
//! 定义了与前端 TypeScript 类型一一对应的 Rust 数据结构。
//! 所有结构体均派生 `Serialize` 和 `Deserialize`，用于 Tauri IPC 传输和 JSON 文件读写。
//! - `platform` - 目标平台及其 URL 模板的数据结构
//! - `variable` - 自定义替换变量的数据结构
//! - `settings` - 应用设置根记录及其默认值与合并语义

pub mod platform;
pub mod settings;
pub mod variable;
