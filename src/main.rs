// ==========================================
// 用户订单管理控制台 - Tauri 主入口
// ==========================================
// 技术栈: Tauri + Rust + 远端 REST 服务
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

#[cfg(feature = "tauri-app")]
fn main() {
    use user_order_console::app::tauri_commands::*;
    use user_order_console::app::AppState;

    // 初始化日志系统
    user_order_console::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", user_order_console::APP_NAME);
    tracing::info!("系统版本: {}", user_order_console::VERSION);
    tracing::info!("==================================================");

    // 创建AppState
    tracing::info!("正在初始化AppState...");
    let app_state = AppState::new().expect("无法初始化AppState");
    tracing::info!("AppState初始化成功");
    tracing::info!("启动Tauri应用...");

    // 启动Tauri应用
    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 用户相关命令 (5个)
            // ==========================================
            list_users,
            create_user,
            update_user,
            delete_user,
            get_user_orders,
            // ==========================================
            // 订单相关命令 (3个)
            // ==========================================
            list_orders,
            create_order,
            update_order_status,
            // ==========================================
            // 批量导入相关命令 (10个)
            // ==========================================
            import_users_load_file,
            import_users_load_fixtures,
            import_users_submit,
            import_users_reset,
            import_users_session,
            import_orders_load_file,
            import_orders_load_fixtures,
            import_orders_submit,
            import_orders_reset,
            import_orders_session,
            // ==========================================
            // 导出/模板相关命令 (4个)
            // ==========================================
            export_users,
            export_orders,
            download_user_template,
            download_order_template,
            // ==========================================
            // 配置相关命令 (2个)
            // ==========================================
            get_config,
            set_locale,
        ])
        .run(tauri::generate_context!())
        .expect("启动Tauri应用失败");

    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    println!("==================================================");
    println!("{}", user_order_console::APP_NAME);
    println!("系统版本: {}", user_order_console::VERSION);
    println!("==================================================");
    println!();
    println!("此可执行文件需要启用 tauri-app 特性");
    println!("使用: cargo run --features tauri-app");
    println!();
    println!("或者使用库模式:");
    println!("use user_order_console::app::AppState;");
}
