// ==========================================
// 订单管理API
// ==========================================
// 职责: 封装订单相关的远端接口访问
// 契约: GET/POST /orders, PATCH /orders/:id（仅状态）,
//       GET /orders/export[?user_id], POST /orders/batch
// ==========================================

use crate::api::client::{build_query, validate_pagination, ApiClient};
use crate::api::error::{ApiError, ApiResult};
use crate::domain::{BatchReport, BatchRowError, EntityKind, Order, OrderRecord, OrderStatus};
use crate::importer::batch_importer_trait::BatchSubmitter;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tracing::{debug, instrument};

// ==========================================
// DTO 类型定义
// ==========================================

/// 订单列表查询参数
#[derive(Debug, Clone)]
pub struct OrderListQuery {
    pub page: i64,
    pub per_page: i64,
    /// 商品名称模糊搜索
    pub search: Option<String>,
    /// 按所属用户过滤
    pub user_id: Option<i64>,
}

impl Default for OrderListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            search: None,
            user_id: None,
        }
    }
}

/// 订单列表响应（分页 + 可选搜索回显）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    #[serde(default)]
    pub search: Option<String>,
}

/// 订单导出响应（filters 回显当前过滤条件）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderExportResponse {
    #[serde(default)]
    pub success: bool,
    pub total: i64,
    pub orders: Vec<Order>,
    pub exported_at: String,
    #[serde(default)]
    pub filters: Option<JsonValue>,
}

/// 批量创建响应（后端原始形状，仅内部使用）
#[derive(Debug, Deserialize)]
struct OrderBatchCreateResponse {
    total_processed: usize,
    created: usize,
    failed: usize,
    #[serde(default)]
    orders: Vec<Order>,
    #[serde(default)]
    errors: Vec<BatchRowError>,
}

impl From<OrderBatchCreateResponse> for BatchReport<Order> {
    fn from(resp: OrderBatchCreateResponse) -> Self {
        BatchReport {
            total_processed: resp.total_processed,
            created: resp.created,
            failed: resp.failed,
            records: resp.orders,
            errors: resp.errors,
        }
    }
}

// ==========================================
// OrderApi - 订单API
// ==========================================
pub struct OrderApi {
    client: Arc<ApiClient>,
}

impl OrderApi {
    /// 创建新的OrderApi实例
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 分页查询订单列表
    ///
    /// # 参数
    /// - query: 分页/搜索/用户过滤参数
    #[instrument(skip(self, query), fields(page = query.page, per_page = query.per_page))]
    pub async fn list(&self, query: &OrderListQuery) -> ApiResult<OrderListResponse> {
        validate_pagination(query.page, query.per_page)?;

        let params = build_query(&[
            ("page", Some(query.page.to_string())),
            ("per_page", Some(query.per_page.to_string())),
            ("search", query.search.as_ref().map(|s| s.trim().to_string())),
            ("user_id", query.user_id.map(|id| id.to_string())),
        ]);

        self.client.get_json("/orders", &params).await
    }

    /// 创建订单
    ///
    /// 提交前按与后端相同的规则先行校验，避免明显无效的请求
    #[instrument(skip(self, record), fields(user_id = record.user_id))]
    pub async fn create(&self, record: &OrderRecord) -> ApiResult<Order> {
        if record.user_id <= 0 {
            return Err(ApiError::InvalidInput(
                "user_id 必须为正整数".to_string(),
            ));
        }
        if record.product_name.trim().is_empty() {
            return Err(ApiError::InvalidInput("商品名称不能为空".to_string()));
        }
        if !(record.amount.is_finite() && record.amount > 0.0) {
            return Err(ApiError::InvalidInput(
                "amount 必须为大于 0 的数值".to_string(),
            ));
        }

        self.client.post_json("/orders", record).await
    }

    /// 更新订单状态（PATCH，仅状态字段）
    pub async fn update_status(&self, order_id: i64, status: OrderStatus) -> ApiResult<Order> {
        self.client
            .patch_json(
                &format!("/orders/{}", order_id),
                &serde_json::json!({ "status": status }),
            )
            .await
    }

    /// 导出订单（可选按用户过滤）
    pub async fn export(&self, user_id: Option<i64>) -> ApiResult<OrderExportResponse> {
        let params = build_query(&[("user_id", user_id.map(|id| id.to_string()))]);
        self.client.get_json("/orders/export", &params).await
    }

    /// 批量创建订单
    ///
    /// # 参数
    /// - records: 已通过客户端校验的完整批次（≤ 1000 条）
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub async fn batch_create(&self, records: &[OrderRecord]) -> ApiResult<BatchReport<Order>> {
        let body = serde_json::json!({ "orders": records });
        let resp: OrderBatchCreateResponse = self.client.post_json("/orders/batch", &body).await?;

        debug!(
            created = resp.created,
            failed = resp.failed,
            "批量创建订单完成"
        );
        Ok(resp.into())
    }
}

// ==========================================
// BatchSubmitter 实现（导入管道的提交端口）
// ==========================================
#[async_trait]
impl BatchSubmitter for OrderApi {
    type Input = OrderRecord;
    type Created = Order;

    fn entity_kind(&self) -> EntityKind {
        EntityKind::Orders
    }

    async fn submit_batch(&self, records: &[OrderRecord]) -> ApiResult<BatchReport<Order>> {
        self.batch_create(records).await
    }
}
