// ==========================================
// 用户订单管理控制台 - 导入文件解析器
// ==========================================
// 职责: 把不可信的 JSON 文本解析为待校验的记录序列
// 支持: 记录数组，或包装对象 {"users": [...]} / {"orders": [...]}
// ==========================================

use crate::domain::EntityKind;
use crate::importer::error::{ImportError, ImportResult};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

/// 单批次记录数上限（与后端批量接口一致）
pub const MAX_BATCH_RECORDS: usize = 1000;

// ==========================================
// JsonFileParser - JSON 批次解析器
// ==========================================
pub struct JsonFileParser;

impl JsonFileParser {
    /// 解析 JSON 文本为记录序列
    ///
    /// # 参数
    /// - raw: 文件原始文本
    /// - kind: 实体种类（决定包装键 "users"/"orders"）
    ///
    /// # 返回
    /// - Ok(Vec<JsonValue>): 原始顺序的记录序列（尚未逐条校验）
    /// - Err(ImportError): 语法错误 / 顶层结构错误 / 空批次 / 超出上限
    ///
    /// # 约束
    /// - 空序列与超出 1000 条是两类不同的错误（各自独立的消息）
    /// - 纯转换，不修改任何共享状态
    pub fn parse_text(&self, raw: &str, kind: EntityKind) -> ImportResult<Vec<JsonValue>> {
        let json: JsonValue =
            serde_json::from_str(raw).map_err(|e| ImportError::JsonSyntax(e.to_string()))?;

        // 顶层结构: 数组，或包装对象中实体键对应的数组
        let records = match json {
            JsonValue::Array(items) => items,
            JsonValue::Object(mut map) => match map.remove(kind.key()) {
                Some(JsonValue::Array(items)) => items,
                _ => {
                    return Err(ImportError::InvalidShape {
                        entity: kind.noun().to_string(),
                        key: kind.key().to_string(),
                    })
                }
            },
            _ => {
                return Err(ImportError::InvalidShape {
                    entity: kind.noun().to_string(),
                    key: kind.key().to_string(),
                })
            }
        };

        if records.is_empty() {
            return Err(ImportError::EmptyBatch {
                entity: kind.noun().to_string(),
            });
        }

        if records.len() > MAX_BATCH_RECORDS {
            return Err(ImportError::TooManyRecords {
                entity: kind.noun().to_string(),
                max: MAX_BATCH_RECORDS,
                actual: records.len(),
            });
        }

        Ok(records)
    }

    /// 从文件解析记录序列
    ///
    /// # 参数
    /// - file_path: 导入文件路径（.json）
    ///
    /// # 返回
    /// - Ok(Vec<JsonValue>): 记录序列
    /// - Err(ImportError): 文件不存在、扩展名不符或解析失败
    pub fn parse_file(&self, file_path: &Path, kind: EntityKind) -> ImportResult<Vec<JsonValue>> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(
                file_path.display().to_string(),
            ));
        }

        // 检查扩展名
        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "json" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let raw = fs::read_to_string(file_path)?;
        self.parse_text(&raw, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_array() {
        let parser = JsonFileParser;
        let records = parser
            .parse_text(r#"[{"name":"Ana","email":"ana@x.com"}]"#, EntityKind::Users)
            .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_parse_wrapper_object() {
        let parser = JsonFileParser;
        let records = parser
            .parse_text(
                r#"{"orders": [{"user_id":1,"product_name":"Mouse","amount":5}]}"#,
                EntityKind::Orders,
            )
            .unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_wrapper_key_must_match_entity_kind() {
        // users 包装键对订单导入无效
        let parser = JsonFileParser;
        let err = parser
            .parse_text(r#"{"users": [{"user_id":1}]}"#, EntityKind::Orders)
            .unwrap_err();
        assert!(matches!(err, ImportError::InvalidShape { .. }));
    }

    #[test]
    fn test_empty_and_too_many_are_distinct_errors() {
        let parser = JsonFileParser;

        let err = parser.parse_text("[]", EntityKind::Users).unwrap_err();
        assert!(matches!(err, ImportError::EmptyBatch { .. }));

        let big: Vec<serde_json::Value> = (0..1001)
            .map(|i| serde_json::json!({"name": format!("u{}", i), "email": "a@b.co"}))
            .collect();
        let raw = serde_json::to_string(&big).unwrap();
        let err = parser.parse_text(&raw, EntityKind::Users).unwrap_err();
        assert!(matches!(
            err,
            ImportError::TooManyRecords { actual: 1001, .. }
        ));
    }

    #[test]
    fn test_exactly_max_records_passes() {
        let parser = JsonFileParser;
        let big: Vec<serde_json::Value> = (0..MAX_BATCH_RECORDS)
            .map(|i| serde_json::json!({"name": format!("u{}", i), "email": "a@b.co"}))
            .collect();
        let raw = serde_json::to_string(&big).unwrap();
        assert_eq!(
            parser.parse_text(&raw, EntityKind::Users).unwrap().len(),
            MAX_BATCH_RECORDS
        );
    }

    #[test]
    fn test_invalid_syntax_and_shape() {
        let parser = JsonFileParser;
        assert!(matches!(
            parser.parse_text("not json", EntityKind::Users).unwrap_err(),
            ImportError::JsonSyntax(_)
        ));
        assert!(matches!(
            parser.parse_text("42", EntityKind::Users).unwrap_err(),
            ImportError::InvalidShape { .. }
        ));
    }
}
