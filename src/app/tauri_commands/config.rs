// ==========================================
// 配置相关命令
// ==========================================

use crate::app::state::AppState;

use super::common::to_json;

/// 查询当前配置快照
#[tauri::command(rename_all = "snake_case")]
pub async fn get_config(state: tauri::State<'_, AppState>) -> Result<String, String> {
    to_json(state.config.config())
}

/// 切换界面语言（"zh-CN" / "en"）
#[tauri::command(rename_all = "snake_case")]
pub async fn set_locale(locale: String) -> Result<String, String> {
    let locale = locale.trim();
    if locale.is_empty() {
        return Err("语言代码不能为空".to_string());
    }
    crate::i18n::set_locale(locale);
    Ok(crate::i18n::current_locale())
}
