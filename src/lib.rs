// ==========================================
// 用户订单管理控制台 - 核心库
// ==========================================
// 技术栈: Tauri + Rust + 远端 REST 服务
// 系统定位: 管理支持系统 (数据存于远端后端)
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 批量导入管道
pub mod importer;

// API 层 - 远端服务访问
pub mod api;

// 导出层 - 本地下载文件
pub mod exporter;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 应用层 - Tauri 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{EntityKind, OrderStatus};

// 领域实体
pub use domain::{
    BatchReport, BatchRowError, Order, OrderRecord, User, UserRecord,
};

// 导入管道
pub use importer::{
    BatchImportPipeline, BatchSubmitter, FixtureContext, ImportError, ImportResult, ImportSession,
    ImportStage, JsonFileParser, OrderSchema, RecordSchema, UserSchema, MAX_BATCH_RECORDS,
};

// API
pub use api::{ApiClient, ApiError, ApiResult, OrderApi, UserApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "用户订单管理控制台";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
