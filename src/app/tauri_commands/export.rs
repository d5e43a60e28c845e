// ==========================================
// 导出/模板相关命令
// ==========================================

use crate::app::state::AppState;
use crate::exporter;

use super::common::map_api_error;

/// 导出全部用户为本地 JSON 文件，返回文件路径
#[tauri::command(rename_all = "snake_case")]
pub async fn export_users(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let resp = state.user_api.export().await.map_err(map_api_error)?;
    let path = exporter::write_users_export(&resp, &state.config.export_dir())
        .map_err(|e| format!("导出失败: {}", e))?;
    Ok(path.display().to_string())
}

/// 导出订单为本地 JSON 文件（可选按用户过滤），返回文件路径
#[tauri::command(rename_all = "snake_case")]
pub async fn export_orders(
    state: tauri::State<'_, AppState>,
    user_id: Option<i64>,
) -> Result<String, String> {
    let resp = state
        .order_api
        .export(user_id)
        .await
        .map_err(map_api_error)?;
    let path = exporter::write_orders_export(&resp, &state.config.export_dir(), user_id)
        .map_err(|e| format!("导出失败: {}", e))?;
    Ok(path.display().to_string())
}

/// 下载用户导入模板，返回文件路径
#[tauri::command(rename_all = "snake_case")]
pub async fn download_user_template(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let path = exporter::write_user_template(&state.config.export_dir())
        .map_err(|e| format!("模板生成失败: {}", e))?;
    Ok(path.display().to_string())
}

/// 下载订单导入模板，返回文件路径
#[tauri::command(rename_all = "snake_case")]
pub async fn download_order_template(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let path = exporter::write_order_template(&state.config.export_dir())
        .map_err(|e| format!("模板生成失败: {}", e))?;
    Ok(path.display().to_string())
}
