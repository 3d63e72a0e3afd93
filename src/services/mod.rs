//! # 业务逻辑服务模块
//!
//! 包含核心业务逻辑的实现，与 Tauri command 层解耦：
//! - `navigator` - URL 模板引擎：占位符切分、变量提取、替换与打开浏览器
//! - `backend` - 持久化键值后端接口及文件/内存两种实现
//! - `store` - 设置存储：读取兜底合并、整体写入、串行化的派生修改
//! - `interchange` - 配置文档导入导出与 PSM 语料的行文本导入
//! - `i18n` - en/cn 本地化字符串表与点分 key 查找

pub mod backend;
pub mod i18n;
pub mod interchange;
pub mod navigator;
pub mod store;
