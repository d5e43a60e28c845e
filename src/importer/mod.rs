// ==========================================
// 用户订单管理控制台 - 导入层
// ==========================================
// 职责: 把不可信的 JSON 文件转换为已校验、可预览的记录批次，
//       一次性提交到远端批量创建接口并呈现逐条对账结果
// 覆盖: users / orders 两类实体（按 RecordSchema 参数化）
// ==========================================

// 模块声明
pub mod batch_importer_trait;
pub mod error;
pub mod file_parser;
pub mod fixture_generator;
pub mod pipeline;
pub mod record_schema;
pub mod session;

// 重导出核心类型
pub use batch_importer_trait::BatchSubmitter;
pub use error::{ImportError, ImportResult};
pub use file_parser::{JsonFileParser, MAX_BATCH_RECORDS};
pub use fixture_generator::{FixtureContext, FALLBACK_USER_IDS};
pub use pipeline::BatchImportPipeline;
pub use record_schema::{validate_batch, OrderSchema, RecordSchema, UserSchema};
pub use session::{ImportSession, ImportStage};
