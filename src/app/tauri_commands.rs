// ==========================================
// 用户订单管理控制台 - Tauri 命令（按域拆分）
// ==========================================
// 职责: Tauri 命令定义,连接前端与后端 API
// ==========================================

#![cfg(feature = "tauri-app")]

mod common;
mod config;
mod export;
mod import;
mod order;
mod user;

pub use config::*;
pub use export::*;
pub use import::*;
pub use order::*;
pub use user::*;
