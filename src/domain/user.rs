// ==========================================
// 用户订单管理控制台 - 用户领域模型
// ==========================================
// 对齐: 后端 User.serialize() 输出形状
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// User - 用户实体
// ==========================================
// 用途: 列表/详情/批量创建回执中由后端返回
// 只读: 客户端不在本地修改实体，所有写操作走远端接口
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,                 // 用户唯一标识（后端分配）
    pub name: String,            // 用户名
    pub email: String,           // 邮箱（后端保证唯一，统一小写）
    pub created_at: String,      // 创建时间（ISO-8601 字符串，后端时区）
    #[serde(default)]
    pub order_count: i64,        // 关联订单数量（删除保护的依据）
}

// ==========================================
// UserRecord - 批量导入记录
// ==========================================
// 用途: 导入管道中间产物（文件解析 → 校验 → 预览 → 提交）
// 生命周期: 仅在单次导入会话内，提交后由对账报告取代
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,  // 非空文本
    pub email: String, // 非空文本，需满足邮箱格式
}

// ==========================================
// UserUpdate - 用户更新载荷
// ==========================================
// 未提供的字段不出现在请求体中（后端按字段存在性部分更新）
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UserUpdate {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
