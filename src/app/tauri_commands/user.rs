// ==========================================
// 用户相关命令
// ==========================================

use crate::app::state::AppState;
use crate::domain::UserUpdate;

use super::common::{map_api_error, to_json};

/// 分页查询用户列表
#[tauri::command(rename_all = "snake_case")]
pub async fn list_users(
    state: tauri::State<'_, AppState>,
    page: i64,
    per_page: i64,
    search: Option<String>,
) -> Result<String, String> {
    let result = state
        .user_api
        .list(page, per_page, search.as_deref())
        .await
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 创建用户
#[tauri::command(rename_all = "snake_case")]
pub async fn create_user(
    state: tauri::State<'_, AppState>,
    name: String,
    email: String,
) -> Result<String, String> {
    let result = state
        .user_api
        .create(&name, &email)
        .await
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 更新用户（仅提交给出的字段）
#[tauri::command(rename_all = "snake_case")]
pub async fn update_user(
    state: tauri::State<'_, AppState>,
    user_id: i64,
    name: Option<String>,
    email: Option<String>,
) -> Result<String, String> {
    let update = UserUpdate { name, email };
    let result = state
        .user_api
        .update(user_id, &update)
        .await
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 删除用户（后端拒绝删除仍有订单的用户）
#[tauri::command(rename_all = "snake_case")]
pub async fn delete_user(
    state: tauri::State<'_, AppState>,
    user_id: i64,
) -> Result<String, String> {
    let result = state
        .user_api
        .delete(user_id)
        .await
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 查询某用户的全部订单
#[tauri::command(rename_all = "snake_case")]
pub async fn get_user_orders(
    state: tauri::State<'_, AppState>,
    user_id: i64,
) -> Result<String, String> {
    let result = state
        .user_api
        .get_orders(user_id)
        .await
        .map_err(map_api_error)?;
    to_json(&result)
}
