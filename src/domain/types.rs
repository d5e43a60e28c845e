// ==========================================
// 用户订单管理控制台 - 领域类型定义
// ==========================================
// 依据: 后端 REST 契约（users/orders 两类实体）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 实体种类 (Entity Kind)
// ==========================================
// 批量导入管道按实体种类参数化:
// - 导入文件包装键（{"users": [...]} / {"orders": [...]}）
// - 批量创建接口路径（/users/batch, /orders/batch）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Users,
    Orders,
}

impl EntityKind {
    /// 包装键 / 接口路径段（"users" / "orders"）
    pub fn key(&self) -> &'static str {
        match self {
            EntityKind::Users => "users",
            EntityKind::Orders => "orders",
        }
    }

    /// 中文名词（用于用户可见消息）
    pub fn noun(&self) -> &'static str {
        match self {
            EntityKind::Users => "用户",
            EntityKind::Orders => "订单",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "users" | "user" => Ok(EntityKind::Users),
            "orders" | "order" => Ok(EntityKind::Orders),
            other => Err(format!("未知的实体种类: {}", other)),
        }
    }
}

// ==========================================
// 订单状态 (Order Status)
// ==========================================
// 序列化格式: 小写（与后端一致: pending/completed/cancelled）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,   // 待处理（创建时的默认状态）
    Completed, // 已完成
    Cancelled, // 已取消
}

impl OrderStatus {
    /// 后端接受的全部状态值
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Pending,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // 后端在 PATCH 前也会统一转小写
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(format!(
                "无效的订单状态: {}（应为 pending/completed/cancelled）",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_kind_key() {
        assert_eq!(EntityKind::Users.key(), "users");
        assert_eq!(EntityKind::Orders.key(), "orders");
        assert_eq!("orders".parse::<EntityKind>().unwrap(), EntityKind::Orders);
        assert!("invoices".parse::<EntityKind>().is_err());
    }

    #[test]
    fn test_order_status_roundtrip() {
        for status in OrderStatus::ALL {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("shipped".parse::<OrderStatus>().is_err());

        // 序列化为小写字符串
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }
}
