//! # PSM Navigator - Tauri 应用核心初始化模块
//!
//! 本模块负责 Tauri 应用的完整初始化流程，包括：
//! - 注册 Tauri 官方插件（文件系统、对话框、浏览器打开、日志）
//! - 注册自定义 Tauri commands（导航、设置、平台/变量管理、数据导入导出）
//! - 初始化应用全局状态（设置存储）
//! - 生成应用上下文并启动事件循环
//!
//! ## 架构说明
//! 通过将核心逻辑放在 `lib.rs` 而非 `main.rs` 中，
//! Tauri 可以在桌面端（`main.rs`）和移动端入口之间共享此初始化代码。
//!
//! ## 模块结构
//! - `commands/` - Tauri command 处理函数（IPC 接口层）
//! - `models/` - 数据模型（对应前端 TypeScript 类型）
//! - `services/` - 核心业务逻辑（模板引擎、设置存储、配置交换、本地化）
//! - `utils/` - 通用工具函数

mod commands;
mod models;
mod services;
mod utils;

use services::store::SettingsStore;

// `#[cfg_attr(mobile, tauri::mobile_entry_point)]`：条件编译属性
// 当目标平台为移动端（Android/iOS）时，此属性将 `run()` 函数标记为
// Tauri 移动端入口点，使移动端运行时能够正确定位并调用该函数。
// 在桌面端编译时，此属性不生效，`run()` 由 `main.rs` 直接调用。
#[cfg_attr(mobile, tauri::mobile_entry_point)]
/// Tauri 应用启动函数
///
/// 构建并运行 Tauri 应用实例。该函数完成以下工作：
/// 1. 创建 `tauri::Builder` 默认实例
/// 2. 注册所需的 Tauri 插件（文件系统、对话框、浏览器打开）
/// 3. 初始化应用全局状态（文件后端的 SettingsStore）
/// 4. 注册所有自定义 Tauri commands
/// 5. 在 `setup` 钩子中按需注册调试专用插件（日志）
/// 6. 生成应用上下文并启动主事件循环
///
/// # Panics
/// 如果设置存储初始化失败（无法定位用户主目录）或 Tauri 应用启动
/// 失败（例如配置文件缺失或窗口创建失败），将通过 `.expect()` 触发
/// panic 并输出错误信息。
pub fn run() {
    // 设置存储是显式持有的对象：在这里构造一次，
    // 作为 managed state 注入各 command，而非进程级全局单例
    let store = SettingsStore::with_file_backend().expect("初始化设置存储失败");

    tauri::Builder::default()
        // === 官方插件注册 ===
        // 文件系统插件：允许前端通过 Tauri API 保存导出的配置文档
        .plugin(tauri_plugin_fs::init())
        // 对话框插件：提供原生的文件选择器、消息框等系统对话框功能
        .plugin(tauri_plugin_dialog::init())
        // Opener 插件：在系统默认浏览器中打开生成的平台 URL
        // 使用 OS 原生 API，避免手动拼接 shell 命令
        .plugin(tauri_plugin_opener::init())
        // === 应用全局状态初始化 ===
        // 注册 SettingsStore 为 Tauri managed state，所有 command 函数
        // 可通过 `State<SettingsStore>` 参数注入访问
        .manage(store)
        // === 自定义 Tauri Commands 注册 ===
        // 所有 command 函数通过 `invoke_handler` 注册，前端通过 `invoke()` 调用
        .invoke_handler(tauri::generate_handler![
            // 导航 commands
            commands::navigate::jump_to_platform,
            commands::navigate::preview_url,
            commands::navigate::extract_template_variables,
            commands::navigate::suggest_psms,
            // 设置记录 commands
            commands::settings::get_settings,
            commands::settings::save_settings,
            commands::settings::set_language,
            commands::settings::save_last_state,
            commands::settings::add_history,
            commands::settings::clear_history,
            commands::settings::clear_all_data,
            // 平台管理 commands
            commands::platforms::add_platform,
            commands::platforms::update_platform,
            commands::platforms::toggle_platform,
            commands::platforms::delete_platform,
            // 变量管理 commands
            commands::variables::add_variable,
            commands::variables::update_variable,
            commands::variables::delete_variable,
            // 数据导入导出 commands
            commands::data::export_config,
            commands::data::import_config,
            commands::data::import_psm_list,
            // 本地化 command
            commands::i18n::translate,
        ])
        // `setup` 闭包：在应用窗口创建之前执行的初始化钩子
        .setup(|app| {
            // 仅在开发调试模式下启用日志插件
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }
            Ok(())
        })
        // `tauri::generate_context!()` 宏：在编译时读取 `tauri.conf.json` 配置文件，
        // 生成包含应用名称、窗口配置、安全策略等信息的上下文对象。
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
