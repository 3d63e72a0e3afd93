//! # 路径工具函数
//!
//! 提供应用配置目录的定位。所有持久化数据都存放在用户主目录下的
//! `.psm-navigator` 文件夹中，与其他应用的数据互相隔离。

use std::path::PathBuf;

/// 获取应用配置目录的绝对路径
///
/// 使用 `dirs` crate 获取跨平台的主目录路径。
///
/// # 返回值
/// 返回 `~/.psm-navigator/` 目录的绝对路径。
///
/// # 错误
/// 如果无法确定用户主目录（极端情况，如无 HOME 环境变量），返回错误信息。
///
/// # 示例
/// - Windows: `C:\Users\username\.psm-navigator`
/// - Linux/macOS: `/home/username/.psm-navigator`
pub fn get_config_dir() -> Result<PathBuf, String> {
    let home = dirs::home_dir().ok_or_else(|| "无法获取用户主目录".to_string())?;
    Ok(home.join(".psm-navigator"))
}
