//! # Tauri Command 处理模块
//!
//! 本模块包含所有注册到 Tauri 的 command 处理函数。
//! 每个子模块对应一个功能域：
//! - `navigate` - 跳转、预览、模板变量提取与 PSM 联想 commands
//! - `settings` - 设置记录读写、语言、历史相关 commands
//! - `platforms` - 平台列表的增删改 commands
//! - `variables` - 自定义变量的增删改 commands
//! - `data` - 配置导入导出与 PSM 语料导入 commands
//! - `i18n` - 词条查找 command

pub mod data;
pub mod i18n;
pub mod navigate;
pub mod platforms;
pub mod settings;
pub mod variables;
