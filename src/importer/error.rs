// ==========================================
// 用户订单管理控制台 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .json）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("JSON 解析失败: {0}")]
    JsonSyntax(String),

    // ===== 批次结构错误 =====
    #[error("JSON 顶层必须是{entity}数组，或包含 \"{key}\" 数组的对象")]
    InvalidShape { entity: String, key: String },

    #[error("{entity}数组为空")]
    EmptyBatch { entity: String },

    #[error("单次最多导入 {max} 条{entity}（实际 {actual} 条）")]
    TooManyRecords {
        entity: String,
        max: usize,
        actual: usize,
    },

    // ===== 记录校验错误 =====
    // 全批次快速失败: 第一条违规即中止整个解析
    #[error("记录校验失败 (索引 {index}, 字段 {field}): {message}")]
    SchemaViolation {
        index: usize,
        field: String,
        message: String,
    },

    // ===== 会话状态错误 =====
    #[error("无效的导入阶段转换: from={from} to={to}")]
    InvalidStageTransition { from: String, to: String },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
