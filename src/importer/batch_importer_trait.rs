// ==========================================
// 用户订单管理控制台 - 批量提交 Trait
// ==========================================
// 职责: 定义导入管道与远端批量创建接口之间的缝隙
// 实现者: api::UserApi, api::OrderApi
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::{BatchReport, EntityKind};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

// ==========================================
// BatchSubmitter Trait
// ==========================================
#[async_trait]
pub trait BatchSubmitter: Send + Sync {
    /// 提交载荷类型（已通过客户端校验的导入记录）
    type Input: Serialize + Send + Sync;

    /// 创建成功后由后端返回的实体类型
    type Created: DeserializeOwned + Send;

    /// 实体种类（请求包装键）
    fn entity_kind(&self) -> EntityKind;

    /// 把整批已校验记录一次性提交到远端批量创建接口
    ///
    /// # 参数
    /// - records: 完整批次（≤ 1000 条，已通过客户端校验）
    ///
    /// # 返回
    /// - Ok(BatchReport): 服务端逐条处理后的对账报告
    /// - Err(ApiError): 传输/协议失败（整体失败，不合成部分报告）
    ///
    /// # 说明
    /// - 无幂等键、无去重: 相同输入提交两次即产生两个独立批次
    /// - 客户端不对部分失败做自动重试
    async fn submit_batch(&self, records: &[Self::Input]) -> ApiResult<BatchReport<Self::Created>>;
}
