// ==========================================
// 用户订单管理控制台 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::api::{ApiClient, OrderApi, UserApi};
use crate::config::ConfigManager;
use crate::importer::{BatchImportPipeline, OrderSchema, UserSchema};

/// 应用状态
///
/// 包含所有API实例和共享资源
/// 在Tauri应用中作为全局状态管理
pub struct AppState {
    /// 配置管理器
    pub config: Arc<ConfigManager>,

    /// HTTP 客户端（所有API共享）
    pub client: Arc<ApiClient>,

    /// 用户API
    pub user_api: Arc<UserApi>,

    /// 订单API
    pub order_api: Arc<OrderApi>,

    /// 用户批量导入管道（预览缓冲由管道独占）
    pub user_import: Arc<Mutex<BatchImportPipeline<UserSchema>>>,

    /// 订单批量导入管道
    pub order_import: Arc<Mutex<BatchImportPipeline<OrderSchema>>>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(String): 初始化错误
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 加载配置（文件 + 环境变量覆写）
    /// 2. 初始化 HTTP 客户端
    /// 3. 创建所有API实例与导入管道
    pub fn new() -> Result<Self, String> {
        let config = ConfigManager::load().map_err(|e| format!("无法加载配置: {}", e))?;
        Self::with_config(config)
    }

    /// 使用给定配置创建AppState（测试常用）
    pub fn with_config(config: ConfigManager) -> Result<Self, String> {
        tracing::info!(backend_url = %config.backend_url(), "初始化AppState");

        // 应用配置的界面语言
        crate::i18n::set_locale(config.locale());

        let client = Arc::new(
            ApiClient::new(config.config()).map_err(|e| format!("无法创建ApiClient: {}", e))?,
        );

        let user_api = Arc::new(UserApi::new(client.clone()));
        let order_api = Arc::new(OrderApi::new(client.clone()));

        let user_import = Arc::new(Mutex::new(BatchImportPipeline::new(UserSchema)));
        let order_import = Arc::new(Mutex::new(BatchImportPipeline::new(OrderSchema)));

        tracing::info!("AppState初始化完成");

        Ok(Self {
            config: Arc::new(config),
            client,
            user_api,
            order_api,
            user_import,
            order_import,
        })
    }
}
