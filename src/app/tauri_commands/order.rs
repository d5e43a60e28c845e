// ==========================================
// 订单相关命令
// ==========================================

use crate::api::OrderListQuery;
use crate::app::state::AppState;
use crate::domain::{OrderRecord, OrderStatus};

use super::common::{map_api_error, to_json};

/// 分页查询订单列表（可按商品名搜索、按用户过滤）
#[tauri::command(rename_all = "snake_case")]
pub async fn list_orders(
    state: tauri::State<'_, AppState>,
    page: i64,
    per_page: i64,
    search: Option<String>,
    user_id: Option<i64>,
) -> Result<String, String> {
    let query = OrderListQuery {
        page,
        per_page,
        search,
        user_id,
    };
    let result = state.order_api.list(&query).await.map_err(map_api_error)?;
    to_json(&result)
}

/// 创建订单
#[tauri::command(rename_all = "snake_case")]
pub async fn create_order(
    state: tauri::State<'_, AppState>,
    user_id: i64,
    product_name: String,
    amount: f64,
) -> Result<String, String> {
    let record = OrderRecord {
        user_id,
        product_name,
        amount,
    };
    let result = state
        .order_api
        .create(&record)
        .await
        .map_err(map_api_error)?;
    to_json(&result)
}

/// 更新订单状态（pending/completed/cancelled）
#[tauri::command(rename_all = "snake_case")]
pub async fn update_order_status(
    state: tauri::State<'_, AppState>,
    order_id: i64,
    status: String,
) -> Result<String, String> {
    let status: OrderStatus = status.parse().map_err(|e: String| e)?;
    let result = state
        .order_api
        .update_status(order_id, status)
        .await
        .map_err(map_api_error)?;
    to_json(&result)
}
