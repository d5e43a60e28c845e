// ==========================================
// 用户订单管理控制台 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: 用户配置目录下的 config.json（本系统无本地数据库）
// 覆写: 环境变量优先于配置文件
// ==========================================

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 后端 REST 服务地址（含 /api 前缀）
    pub backend_url: String,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 列表默认每页数量
    pub default_per_page: i64,
    /// 导出文件目录（空则使用系统下载目录）
    pub export_dir: Option<String>,
    /// 界面语言（"zh-CN" / "en"）
    pub locale: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:5000/api".to_string(),
            request_timeout_secs: 30,
            default_per_page: 10,
            export_dir: None,
            locale: "zh-CN".to_string(),
        }
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    path: PathBuf,
    config: AppConfig,
}

impl ConfigManager {
    /// 从默认路径加载配置（文件不存在时使用默认值）
    pub fn load() -> Result<Self, Box<dyn Error>> {
        Self::load_from(Self::default_config_path())
    }

    /// 从指定路径加载配置
    ///
    /// # 参数
    /// - path: 配置文件路径（JSON）
    ///
    /// # 说明
    /// 加载完成后应用环境变量覆写（环境变量优先）
    pub fn load_from(path: PathBuf) -> Result<Self, Box<dyn Error>> {
        let mut config = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            serde_json::from_str(&raw)?
        } else {
            AppConfig::default()
        };

        Self::apply_env_overrides(&mut config);

        Ok(Self { path, config })
    }

    /// 直接使用给定配置创建（测试常用）
    pub fn from_config(config: AppConfig) -> Self {
        Self {
            path: Self::default_config_path(),
            config,
        }
    }

    /// 当前配置快照
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn backend_url(&self) -> &str {
        &self.config.backend_url
    }

    pub fn request_timeout_secs(&self) -> u64 {
        self.config.request_timeout_secs
    }

    pub fn default_per_page(&self) -> i64 {
        self.config.default_per_page
    }

    pub fn locale(&self) -> &str {
        &self.config.locale
    }

    /// 导出目录: 配置值 → 系统下载目录 → 用户数据目录 → 当前目录
    pub fn export_dir(&self) -> PathBuf {
        if let Some(dir) = &self.config.export_dir {
            let trimmed = dir.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }
        dirs::download_dir()
            .or_else(dirs::data_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// 更新并持久化配置
    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// 修改内存中的配置（调用方决定是否 save）
    pub fn set_config(&mut self, config: AppConfig) {
        self.config = config;
    }

    /// 默认配置文件路径
    ///
    /// # 返回
    /// - 环境变量 USER_ORDER_CONSOLE_CONFIG_PATH 优先
    /// - 开发环境: 用户配置目录/user-order-console-dev/config.json
    /// - 生产环境: 用户配置目录/user-order-console/config.json
    pub fn default_config_path() -> PathBuf {
        if let Ok(path) = std::env::var("USER_ORDER_CONSOLE_CONFIG_PATH") {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return PathBuf::from(trimmed);
            }
        }

        let mut path = PathBuf::from("./config.json");

        if let Some(config_dir) = dirs::config_dir() {
            // 开发环境使用独立目录，避免污染生产配置
            #[cfg(debug_assertions)]
            {
                path = config_dir.join("user-order-console-dev");
            }

            #[cfg(not(debug_assertions))]
            {
                path = config_dir.join("user-order-console");
            }

            path = path.join("config.json");
        }

        path
    }

    /// 应用环境变量覆写
    fn apply_env_overrides(config: &mut AppConfig) {
        if let Ok(url) = std::env::var("USER_ORDER_CONSOLE_BACKEND_URL") {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                config.backend_url = trimmed.to_string();
            }
        }
        if let Ok(locale) = std::env::var("USER_ORDER_CONSOLE_LOCALE") {
            let trimmed = locale.trim();
            if !trimmed.is_empty() {
                config.locale = trimmed.to_string();
            }
        }
    }
}
