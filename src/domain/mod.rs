// ==========================================
// 用户订单管理控制台 - 领域层
// ==========================================
// 职责: 实体与类型定义（与后端序列化形状对齐）
// ==========================================

pub mod batch;
pub mod order;
pub mod types;
pub mod user;

// 重导出核心类型
pub use batch::{BatchReport, BatchRowError};
pub use order::{Order, OrderRecord};
pub use types::{EntityKind, OrderStatus};
pub use user::{User, UserRecord, UserUpdate};
