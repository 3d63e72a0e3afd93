//! # 标识符生成
//!
//! 新建平台/变量时由后端分配 id。使用 毫秒时间戳 + 进程内单调计数器
//! 的组合，同一进程内快速连续创建也不会冲突（纯时间戳在同一毫秒内
//! 会碰撞）。

use std::sync::atomic::{AtomicU64, Ordering};

/// 进程内单调递增的序号
static ID_SEQ: AtomicU64 = AtomicU64::new(0);

/// 生成一个新的唯一标识符
///
/// 格式为 `<epoch毫秒>-<序号>`，如 `1754500000123-7`。
pub fn next_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let seq = ID_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", millis, seq)
}
