// ==========================================
// 批量导入相关命令
// ==========================================
// 每类实体各有一条导入管道；命令按实体拆分，
// 预览/提交/重置都作用于对应管道的当前会话
// ==========================================

use std::path::Path;

use crate::app::state::AppState;
use crate::importer::FixtureContext;

use super::common::{map_api_error, to_json};

// ==========================================
// 用户导入
// ==========================================

/// 装载用户导入文件并返回预览
#[tauri::command(rename_all = "snake_case")]
pub async fn import_users_load_file(
    state: tauri::State<'_, AppState>,
    file_path: String,
) -> Result<String, String> {
    tracing::info!(file_path = %file_path, "收到用户导入文件");

    let mut pipeline = state.user_import.lock().await;
    pipeline
        .load_file(Path::new(&file_path))
        .map_err(|e| map_api_error(e.into()))?;
    to_json(pipeline.session())
}

/// 生成用户构造数据并装入预览
#[tauri::command(rename_all = "snake_case")]
pub async fn import_users_load_fixtures(
    state: tauri::State<'_, AppState>,
    count: usize,
    seed: Option<u64>,
) -> Result<String, String> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut pipeline = state.user_import.lock().await;
    pipeline
        .load_fixtures(count, seed, &FixtureContext::default())
        .map_err(|e| map_api_error(e.into()))?;
    to_json(pipeline.session())
}

/// 提交用户预览批次，返回对账报告
#[tauri::command(rename_all = "snake_case")]
pub async fn import_users_submit(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let mut pipeline = state.user_import.lock().await;
    let report = pipeline
        .submit(state.user_api.as_ref())
        .await
        .map_err(map_api_error)?;
    to_json(&report)
}

/// 重置用户导入会话
#[tauri::command(rename_all = "snake_case")]
pub async fn import_users_reset(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let mut pipeline = state.user_import.lock().await;
    pipeline.reset();
    to_json(pipeline.session())
}

/// 查询用户导入会话当前状态
#[tauri::command(rename_all = "snake_case")]
pub async fn import_users_session(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let pipeline = state.user_import.lock().await;
    to_json(pipeline.session())
}

// ==========================================
// 订单导入
// ==========================================

/// 装载订单导入文件并返回预览
#[tauri::command(rename_all = "snake_case")]
pub async fn import_orders_load_file(
    state: tauri::State<'_, AppState>,
    file_path: String,
) -> Result<String, String> {
    tracing::info!(file_path = %file_path, "收到订单导入文件");

    let mut pipeline = state.order_import.lock().await;
    pipeline
        .load_file(Path::new(&file_path))
        .map_err(|e| map_api_error(e.into()))?;
    to_json(pipeline.session())
}

/// 生成订单构造数据并装入预览
///
/// # 参数
/// - user_id_pool: 可用的用户 ID 池（缺省时使用固定兜底集合）
#[tauri::command(rename_all = "snake_case")]
pub async fn import_orders_load_fixtures(
    state: tauri::State<'_, AppState>,
    count: usize,
    seed: Option<u64>,
    user_id_pool: Option<Vec<i64>>,
) -> Result<String, String> {
    let seed = seed.unwrap_or_else(rand::random);
    let ctx = match user_id_pool {
        Some(pool) => FixtureContext::with_user_ids(pool),
        None => FixtureContext::default(),
    };

    let mut pipeline = state.order_import.lock().await;
    pipeline
        .load_fixtures(count, seed, &ctx)
        .map_err(|e| map_api_error(e.into()))?;
    to_json(pipeline.session())
}

/// 提交订单预览批次，返回对账报告
#[tauri::command(rename_all = "snake_case")]
pub async fn import_orders_submit(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let mut pipeline = state.order_import.lock().await;
    let report = pipeline
        .submit(state.order_api.as_ref())
        .await
        .map_err(map_api_error)?;
    to_json(&report)
}

/// 重置订单导入会话
#[tauri::command(rename_all = "snake_case")]
pub async fn import_orders_reset(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let mut pipeline = state.order_import.lock().await;
    pipeline.reset();
    to_json(pipeline.session())
}

/// 查询订单导入会话当前状态
#[tauri::command(rename_all = "snake_case")]
pub async fn import_orders_session(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let pipeline = state.order_import.lock().await;
    to_json(pipeline.session())
}
