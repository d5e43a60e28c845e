// ==========================================
// 用户订单管理控制台 - API层错误类型
// ==========================================
// 职责: 定义远端访问层错误类型，转换导入层错误为用户友好的错误消息
// ==========================================

use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 传输层错误
    // ==========================================
    /// 网络层失败（连接、超时等），未取得任何服务端响应
    #[error("网络请求失败: {0}")]
    Transport(String),

    /// 服务端返回非 2xx（消息取自响应体 error/message 字段）
    #[error("后端返回错误 (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    /// 响应体无法按约定解析
    #[error("响应解析失败: {0}")]
    InvalidResponse(String),

    // ==========================================
    // 业务规则错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 导入错误
    // ==========================================
    #[error("文件导入失败: {0}")]
    ImportError(String),

    #[error("数据验证失败: {0}")]
    ValidationError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 ImportError 转换
// 目的: 将导入层错误转换为 API 层可统一呈现的业务错误
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            // 记录校验错误
            ImportError::SchemaViolation { .. } => ApiError::ValidationError(err.to_string()),

            // 会话状态错误（重复提交等操作时序问题）
            ImportError::InvalidStageTransition { .. } => ApiError::InvalidInput(err.to_string()),

            // 文件/批次结构错误
            ImportError::FileNotFound(_)
            | ImportError::UnsupportedFormat(_)
            | ImportError::FileReadError(_)
            | ImportError::JsonSyntax(_)
            | ImportError::InvalidShape { .. }
            | ImportError::EmptyBatch { .. }
            | ImportError::TooManyRecords { .. } => ApiError::ImportError(err.to_string()),

            // 通用错误
            ImportError::Other(err) => ApiError::Other(err),
        }
    }
}

// ==========================================
// 从 reqwest::Error 转换
// ==========================================
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::InvalidResponse(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
