// ==========================================
// 用户订单管理控制台 - 批量导入对账模型
// ==========================================
// 对齐: 后端 /users/batch 与 /orders/batch 响应形状
// 不变量: created + failed == total_processed == 提交批次长度
// ==========================================

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// ==========================================
// BatchRowError - 单条记录的服务端拒绝
// ==========================================
// 服务端逐条校验，失败不阻断其他记录；index 指向提交批次中的位置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRowError {
    pub index: usize,              // 提交批次中的位置（0 起）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,   // 原始记录回显（订单批次接口不回显）
    pub error: String,             // 服务端给出的拒绝原因（原样展示，不重试）
}

// ==========================================
// BatchReport - 批量创建对账报告
// ==========================================
// 一次提交的完整结果；records 为已创建实体（含后端分配的 id）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport<T> {
    pub total_processed: usize, // 提交的记录总数
    pub created: usize,         // 创建成功数
    pub failed: usize,          // 创建失败数
    pub records: Vec<T>,        // 已创建实体（按创建顺序）
    pub errors: Vec<BatchRowError>, // 逐条失败明细
}

impl<T> BatchReport<T> {
    /// 校验对账不变量: created + failed == total_processed
    ///
    /// 后端按此约定生成报告；不满足时视为协议错误而非展示数据
    pub fn is_consistent(&self) -> bool {
        self.created + self.failed == self.total_processed
    }
}
