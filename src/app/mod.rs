// ==========================================
// 用户订单管理控制台 - 应用层
// ==========================================
// 职责: 应用状态管理与 Tauri 集成
// ==========================================

pub mod state;

#[cfg(feature = "tauri-app")]
pub mod tauri_commands;

pub use state::AppState;
