// ==========================================
// 用户订单管理控制台 - API 层
// ==========================================
// 职责: 远端 REST 服务访问（CRUD/分页/搜索/批量/导出）
// 说明: 本层只消费远端契约，不做本地持久化
// ==========================================

pub mod client;
pub mod error;
pub mod order_api;
pub mod user_api;

// 重导出核心类型
pub use client::{build_query, ApiClient, HelloResponse};
pub use error::{ApiError, ApiResult};
pub use order_api::{OrderApi, OrderExportResponse, OrderListQuery, OrderListResponse};
pub use user_api::{
    DeleteUserResponse, UserApi, UserExportResponse, UserListResponse, UserOrdersResponse,
};
