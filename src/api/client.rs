// ==========================================
// 用户订单管理控制台 - 远端服务客户端
// ==========================================
// 职责: 统一的 HTTP 访问封装（JSON 进出、错误体解析、查询串构建）
// 错误约定: 非 2xx 响应体为 {"error": ...} 或 {"message": ...}，
//           两者皆无时退化为 "HTTP <status>"
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::AppConfig;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::time::Duration;

// ==========================================
// ApiClient - HTTP 客户端封装
// ==========================================
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

/// GET /hello 健康探测响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelloResponse {
    pub message: String,
}

impl ApiClient {
    /// 依据配置创建客户端
    ///
    /// # 参数
    /// - config: 应用配置（后端地址、请求超时）
    pub fn new(config: &AppConfig) -> ApiResult<Self> {
        Self::with_base_url(&config.backend_url, config.request_timeout_secs)
    }

    /// 指定后端地址创建客户端（测试常用）
    pub fn with_base_url(base_url: &str, timeout_secs: u64) -> ApiResult<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ApiError::InvalidInput(
                "后端服务地址未配置".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ApiError::InternalError(format!("HTTP 客户端构建失败: {}", e)))?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// 健康探测（后端存活检查）
    pub async fn hello(&self) -> ApiResult<HelloResponse> {
        self.get_json("/hello", &[]).await
    }

    // ==========================================
    // HTTP 方法封装
    // ==========================================

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(String, String)],
    ) -> ApiResult<T> {
        let resp = self
            .http
            .get(self.url(endpoint))
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::handle_response(resp).await
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let resp = self
            .http
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::handle_response(resp).await
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let resp = self
            .http
            .put(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::handle_response(resp).await
    }

    pub async fn patch_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        let resp = self
            .http
            .patch(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::handle_response(resp).await
    }

    pub async fn delete_json<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        let resp = self
            .http
            .delete(self.url(endpoint))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::handle_response(resp).await
    }

    /// 统一响应处理
    ///
    /// 后端无论成败均返回 JSON 体；非 2xx 时取 error/message 字段作为
    /// 用户可见消息（404 单独映射为 NotFound）
    async fn handle_response<T: DeserializeOwned>(resp: reqwest::Response) -> ApiResult<T> {
        let status = resp.status();
        let body: JsonValue = resp
            .json()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))?;

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(JsonValue::as_str)
                .or_else(|| body.get("message").and_then(JsonValue::as_str))
                .map(|s| s.to_string())
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(ApiError::NotFound(message));
            }
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_value(body).map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

// ==========================================
// 查询串构建
// ==========================================

/// 过滤掉 None 与空字符串参数（与前端 buildQueryString 同语义）
pub fn build_query(params: &[(&str, Option<String>)]) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| match value {
            Some(v) if !v.is_empty() => Some((key.to_string(), v.clone())),
            _ => None,
        })
        .collect()
}

/// 校验分页参数（与后端同一规则，请求前先行拦截）
pub(crate) fn validate_pagination(page: i64, per_page: i64) -> ApiResult<()> {
    if page < 1 {
        return Err(ApiError::InvalidInput("page 必须大于 0".to_string()));
    }
    if !(1..=100).contains(&per_page) {
        return Err(ApiError::InvalidInput(
            "per_page 必须在 1-100 之间".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_skips_empty() {
        let query = build_query(&[
            ("page", Some("1".to_string())),
            ("search", Some("".to_string())),
            ("user_id", None),
            ("per_page", Some("10".to_string())),
        ]);
        assert_eq!(
            query,
            vec![
                ("page".to_string(), "1".to_string()),
                ("per_page".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_validate_pagination() {
        assert!(validate_pagination(1, 10).is_ok());
        assert!(validate_pagination(1, 100).is_ok());
        assert!(validate_pagination(0, 10).is_err());
        assert!(validate_pagination(1, 0).is_err());
        assert!(validate_pagination(1, 101).is_err());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::with_base_url("http://localhost:5000/api/", 5).unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert!(ApiClient::with_base_url("  ", 5).is_err());
    }
}
