//! # 通用工具模块
//!
//! - `path` - 应用配置目录定位
//! - `id` - 平台/变量的唯一标识符生成

pub mod id;
pub mod path;
