// ==========================================
// 用户订单管理控制台 - 记录模式与校验器
// ==========================================
// 职责: 把两类实体近乎相同的导入逻辑统一为按模式参数化的
//       通用管道（字段 → 校验规则，外加实体种类标识）
// 校验策略: 按序逐条，首条违规即中止整个批次（快速失败）
//           服务端则逐条尽力而为，两侧不对称为有意保留的行为
// ==========================================

use crate::domain::{EntityKind, Order, OrderRecord, User, UserRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::fixture_generator::{
    generate_order_fixtures, generate_user_fixtures, FixtureContext,
};
use rand::rngs::StdRng;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::sync::OnceLock;

// 邮箱格式（与后端同一正则）
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

fn email_regex() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("邮箱正则为编译期常量"))
}

// ==========================================
// RecordSchema Trait
// ==========================================
// 用途: 导入管道的实体模式描述
// 实现者: UserSchema, OrderSchema
pub trait RecordSchema: Send + Sync {
    /// 导入记录类型（客户端校验产物，也是提交载荷）
    type Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    /// 创建成功后由后端返回的实体类型
    type Created: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    /// 实体种类（包装键 / 接口路径段）
    fn entity_kind(&self) -> EntityKind;

    /// 校验单条记录
    ///
    /// # 参数
    /// - index: 记录在批次中的位置（用于错误定位）
    /// - value: 未信任的原始 JSON 记录
    ///
    /// # 返回
    /// - Ok(Record): 类型化记录（字段原样保留，不做归一化）
    /// - Err(ImportError::SchemaViolation): 首个违规字段
    fn validate_record(&self, index: usize, value: &JsonValue) -> ImportResult<Self::Record>;

    /// 生成 count 条构造记录（必须能通过 validate_record）
    fn generate_fixtures(
        &self,
        count: usize,
        rng: &mut StdRng,
        ctx: &FixtureContext,
    ) -> Vec<Self::Record>;
}

/// 按序校验整个批次，首条违规即中止
///
/// # 返回
/// - Ok(Vec<Record>): 与输入同序的类型化记录（预览与提交共用）
pub fn validate_batch<S: RecordSchema>(
    schema: &S,
    values: &[JsonValue],
) -> ImportResult<Vec<S::Record>> {
    let mut records = Vec::with_capacity(values.len());
    for (index, value) in values.iter().enumerate() {
        records.push(schema.validate_record(index, value)?);
    }
    Ok(records)
}

// ==========================================
// 字段提取辅助
// ==========================================

fn violation(index: usize, field: &str, message: &str) -> ImportError {
    ImportError::SchemaViolation {
        index,
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn as_object<'a>(
    index: usize,
    value: &'a JsonValue,
) -> ImportResult<&'a serde_json::Map<String, JsonValue>> {
    value
        .as_object()
        .ok_or_else(|| violation(index, "record", "记录必须是 JSON 对象"))
}

/// 取非空文本字段（缺失、非文本、全空白均为违规）
fn require_text(
    obj: &serde_json::Map<String, JsonValue>,
    index: usize,
    field: &str,
) -> ImportResult<String> {
    match obj.get(field) {
        Some(JsonValue::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(violation(
            index,
            field,
            &format!("'{}' 为必填字段且必须为非空文本", field),
        )),
    }
}

// ==========================================
// UserSchema - 用户记录模式
// ==========================================
// 规则: name 非空文本; email 非空文本且满足邮箱格式
pub struct UserSchema;

impl RecordSchema for UserSchema {
    type Record = UserRecord;
    type Created = User;

    fn entity_kind(&self) -> EntityKind {
        EntityKind::Users
    }

    fn validate_record(&self, index: usize, value: &JsonValue) -> ImportResult<UserRecord> {
        let obj = as_object(index, value)?;

        let name = require_text(obj, index, "name")?;
        let email = require_text(obj, index, "email")?;

        if !email_regex().is_match(email.trim()) {
            return Err(violation(index, "email", "'email' 格式无效"));
        }

        Ok(UserRecord { name, email })
    }

    fn generate_fixtures(
        &self,
        count: usize,
        rng: &mut StdRng,
        _ctx: &FixtureContext,
    ) -> Vec<UserRecord> {
        generate_user_fixtures(count, rng)
    }
}

// ==========================================
// OrderSchema - 订单记录模式
// ==========================================
// 规则: user_id 正整数; product_name 非空文本; amount 数值且 > 0
pub struct OrderSchema;

impl RecordSchema for OrderSchema {
    type Record = OrderRecord;
    type Created = Order;

    fn entity_kind(&self) -> EntityKind {
        EntityKind::Orders
    }

    fn validate_record(&self, index: usize, value: &JsonValue) -> ImportResult<OrderRecord> {
        let obj = as_object(index, value)?;

        // user_id: JSON 整数且 > 0（浮点数与文本均拒绝）
        let user_id = match obj.get("user_id").and_then(JsonValue::as_i64) {
            Some(id) if id > 0 => id,
            _ => {
                return Err(violation(
                    index,
                    "user_id",
                    "'user_id' 为必填字段且必须为正整数",
                ))
            }
        };

        let product_name = require_text(obj, index, "product_name")?;

        // amount: 数值且 > 0
        let amount = match obj.get("amount").and_then(JsonValue::as_f64) {
            Some(v) if v.is_finite() && v > 0.0 => v,
            _ => {
                return Err(violation(
                    index,
                    "amount",
                    "'amount' 必须为大于 0 的数值",
                ))
            }
        };

        Ok(OrderRecord {
            user_id,
            product_name,
            amount,
        })
    }

    fn generate_fixtures(
        &self,
        count: usize,
        rng: &mut StdRng,
        ctx: &FixtureContext,
    ) -> Vec<OrderRecord> {
        generate_order_fixtures(count, rng, ctx)
    }
}
