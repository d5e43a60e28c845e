// ==========================================
// 用户订单管理控制台 - 导出文件落地
// ==========================================
// 职责: 把远端导出响应写成本地下载文件，并提供导入模板下载
// 命名: <entity>_export_<YYYY-MM-DD>[_user_<id>].json
// 模板: plantilla_usuarios.json / orders_template.json（固定文件名）
// ==========================================

use crate::api::order_api::OrderExportResponse;
use crate::api::user_api::UserExportResponse;
use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 用户导入模板文件名（历史沿用，保持不变）
pub const USER_TEMPLATE_FILE_NAME: &str = "plantilla_usuarios.json";

/// 订单导入模板文件名
pub const ORDER_TEMPLATE_FILE_NAME: &str = "orders_template.json";

/// 写出用户导出文件（内容为用户数组的 pretty JSON）
///
/// # 返回
/// - Ok(PathBuf): 落地文件完整路径
pub fn write_users_export(resp: &UserExportResponse, dir: &Path) -> Result<PathBuf> {
    let file_name = format!("users_export_{}.json", Local::now().format("%Y-%m-%d"));
    let path = write_pretty_json(dir, &file_name, &resp.users)?;
    info!(total = resp.total, path = %path.display(), "用户导出完成");
    Ok(path)
}

/// 写出订单导出文件
///
/// # 参数
/// - user_id: 导出时的用户过滤条件，会体现在文件名中
pub fn write_orders_export(
    resp: &OrderExportResponse,
    dir: &Path,
    user_id: Option<i64>,
) -> Result<PathBuf> {
    let mut file_name = format!("orders_export_{}", Local::now().format("%Y-%m-%d"));
    if let Some(id) = user_id {
        file_name.push_str(&format!("_user_{}", id));
    }
    file_name.push_str(".json");

    let path = write_pretty_json(dir, &file_name, &resp.orders)?;
    info!(total = resp.total, path = %path.display(), "订单导出完成");
    Ok(path)
}

/// 写出用户导入模板（3 条示例记录，包装对象形式）
pub fn write_user_template(dir: &Path) -> Result<PathBuf> {
    let template = json!({
        "users": [
            { "name": "Usuario Ejemplo 1", "email": "usuario1@ejemplo.com" },
            { "name": "Usuario Ejemplo 2", "email": "usuario2@ejemplo.com" },
            { "name": "Usuario Ejemplo 3", "email": "usuario3@ejemplo.com" }
        ]
    });
    write_pretty_json(dir, USER_TEMPLATE_FILE_NAME, &template)
}

/// 写出订单导入模板（3 条示例记录，数组形式）
pub fn write_order_template(dir: &Path) -> Result<PathBuf> {
    let template = json!([
        { "user_id": 1, "product_name": "Laptop", "amount": 2 },
        { "user_id": 1, "product_name": "Mouse", "amount": 5 },
        { "user_id": 2, "product_name": "Teclado", "amount": 3 }
    ]);
    write_pretty_json(dir, ORDER_TEMPLATE_FILE_NAME, &template)
}

fn write_pretty_json<T: Serialize>(dir: &Path, file_name: &str, value: &T) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("创建导出目录失败: {}", dir.display()))?;

    let path = dir.join(file_name);
    let text = serde_json::to_string_pretty(value).context("导出内容序列化失败")?;
    fs::write(&path, text).with_context(|| format!("写入导出文件失败: {}", path.display()))?;

    Ok(path)
}
