// ==========================================
// 用户订单管理控制台 - 订单领域模型
// ==========================================
// 对齐: 后端 Order.serialize() 输出形状
// ==========================================

use crate::domain::types::OrderStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// Order - 订单实体
// ==========================================
// 用途: 列表/导出/批量创建回执中由后端返回
// 列表接口会联表带出 user_name（导出同理）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,                       // 订单唯一标识（后端分配）
    pub user_id: i64,                  // 所属用户（外键）
    pub product_name: String,          // 商品名称
    pub amount: f64,                   // 金额（> 0）
    pub status: OrderStatus,           // 订单状态（pending/completed/cancelled）
    pub created_at: String,            // 创建时间（ISO-8601 字符串）
    #[serde(default)]
    pub user_name: Option<String>,     // 所属用户名（联表字段，可能缺失）
}

// ==========================================
// OrderRecord - 批量导入记录
// ==========================================
// 用途: 导入管道中间产物，同时也是单条创建的请求载荷
// （后端 POST /orders 与批量条目接受同一字段集）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub user_id: i64,         // 正整数，引用已存在用户
    pub product_name: String, // 非空文本
    pub amount: f64,          // 数值，> 0
}
