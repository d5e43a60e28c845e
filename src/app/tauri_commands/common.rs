// ==========================================
// Tauri 命令 - 公共辅助
// ==========================================

use crate::api::ApiError;
use serde::Serialize;

/// 把 API 错误转换为前端可展示的消息
pub fn map_api_error(err: ApiError) -> String {
    tracing::error!(error = %err, "命令执行失败");
    err.to_string()
}

/// 统一的命令响应序列化
pub fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("序列化失败: {}", e))
}
