// ==========================================
// 用户管理API
// ==========================================
// 职责: 封装用户相关的远端接口访问
// 契约: GET/POST /users, PUT/DELETE /users/:id,
//       GET /users/:id/orders, GET /users/export, POST /users/batch
// ==========================================

use crate::api::client::{build_query, validate_pagination, ApiClient};
use crate::api::error::{ApiError, ApiResult};
use crate::domain::{BatchReport, BatchRowError, EntityKind, Order, User, UserRecord, UserUpdate};
use crate::importer::batch_importer_trait::BatchSubmitter;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

// ==========================================
// DTO 类型定义
// ==========================================

/// 用户列表响应（分页 + 可选搜索回显）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
    pub total_pages: i64,
    #[serde(default)]
    pub search: Option<String>,
}

/// 单个用户的订单列表响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserOrdersResponse {
    pub user: User,
    pub orders: Vec<Order>,
    pub total_orders: i64,
}

/// 用户导出响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserExportResponse {
    #[serde(default)]
    pub success: bool,
    pub total: i64,
    pub users: Vec<User>,
    pub exported_at: String,
}

/// 删除用户响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub success: bool,
    pub message: String,
}

/// 批量创建响应（后端原始形状，仅内部使用）
#[derive(Debug, Deserialize)]
struct UserBatchCreateResponse {
    total_processed: usize,
    created: usize,
    failed: usize,
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    errors: Vec<BatchRowError>,
}

impl From<UserBatchCreateResponse> for BatchReport<User> {
    fn from(resp: UserBatchCreateResponse) -> Self {
        BatchReport {
            total_processed: resp.total_processed,
            created: resp.created,
            failed: resp.failed,
            records: resp.users,
            errors: resp.errors,
        }
    }
}

// ==========================================
// UserApi - 用户API
// ==========================================
pub struct UserApi {
    client: Arc<ApiClient>,
}

impl UserApi {
    /// 创建新的UserApi实例
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// 分页查询用户列表（可选搜索: name/email 模糊匹配）
    ///
    /// # 参数
    /// - page: 页码（≥ 1）
    /// - per_page: 每页数量（1-100）
    /// - search: 搜索关键词（可选）
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        page: i64,
        per_page: i64,
        search: Option<&str>,
    ) -> ApiResult<UserListResponse> {
        validate_pagination(page, per_page)?;

        let query = build_query(&[
            ("page", Some(page.to_string())),
            ("per_page", Some(per_page.to_string())),
            ("search", search.map(|s| s.trim().to_string())),
        ]);

        self.client.get_json("/users", &query).await
    }

    /// 创建用户
    ///
    /// 提交前做与表单一致的归一化: name 去首尾空白，email 去空白并转小写
    #[instrument(skip(self))]
    pub async fn create(&self, name: &str, email: &str) -> ApiResult<User> {
        let name = name.trim();
        let email = email.trim().to_lowercase();

        if name.is_empty() {
            return Err(ApiError::InvalidInput("用户名不能为空".to_string()));
        }
        if email.is_empty() {
            return Err(ApiError::InvalidInput("邮箱不能为空".to_string()));
        }

        self.client
            .post_json("/users", &serde_json::json!({ "name": name, "email": email }))
            .await
    }

    /// 更新用户（仅提交提供的字段）
    pub async fn update(&self, user_id: i64, update: &UserUpdate) -> ApiResult<User> {
        if update.is_empty() {
            return Err(ApiError::InvalidInput(
                "更新内容不能为空".to_string(),
            ));
        }
        self.client
            .put_json(&format!("/users/{}", user_id), update)
            .await
    }

    /// 删除用户（后端拒绝删除仍有订单的用户，错误原样透出）
    pub async fn delete(&self, user_id: i64) -> ApiResult<DeleteUserResponse> {
        self.client
            .delete_json(&format!("/users/{}", user_id))
            .await
    }

    /// 查询某用户的全部订单
    pub async fn get_orders(&self, user_id: i64) -> ApiResult<UserOrdersResponse> {
        self.client
            .get_json(&format!("/users/{}/orders", user_id), &[])
            .await
    }

    /// 导出全部用户（客户端据此落地下载文件）
    pub async fn export(&self) -> ApiResult<UserExportResponse> {
        self.client.get_json("/users/export", &[]).await
    }

    /// 批量创建用户
    ///
    /// # 参数
    /// - records: 已通过客户端校验的完整批次（≤ 1000 条）
    ///
    /// # 返回
    /// - Ok(BatchReport): 服务端逐条处理后的对账报告
    /// - Err(ApiError): 传输/协议失败（包括零成功时后端返回的 400）
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub async fn batch_create(&self, records: &[UserRecord]) -> ApiResult<BatchReport<User>> {
        let body = serde_json::json!({ "users": records });
        let resp: UserBatchCreateResponse = self.client.post_json("/users/batch", &body).await?;

        debug!(
            created = resp.created,
            failed = resp.failed,
            "批量创建用户完成"
        );
        Ok(resp.into())
    }
}

// ==========================================
// BatchSubmitter 实现（导入管道的提交端口）
// ==========================================
#[async_trait]
impl BatchSubmitter for UserApi {
    type Input = UserRecord;
    type Created = User;

    fn entity_kind(&self) -> EntityKind {
        EntityKind::Users
    }

    async fn submit_batch(&self, records: &[UserRecord]) -> ApiResult<BatchReport<User>> {
        self.batch_create(records).await
    }
}
