// ==========================================
// 用户订单管理控制台 - 导入会话状态机
// ==========================================
// 阶段流转: Idle → FileSelected → Previewing → Submitting
//           → Completed | Failed
// 约束: Submitting 期间拒绝再次提交（状态即互斥）；
//       Previewing/Failed 可重新选择文件；Completed 需 reset 回 Idle
// 状态对象可序列化，便于在无渲染环境下做确定性单元测试
// ==========================================

use crate::domain::BatchReport;
use crate::importer::error::{ImportError, ImportResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ==========================================
// ImportStage - 导入阶段
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportStage {
    Idle,         // 初始/已重置
    FileSelected, // 已选择文件，解析进行中
    Previewing,   // 校验通过，预览待提交
    Submitting,   // 提交中（唯一在途请求）
    Completed,    // 已收到对账报告
    Failed,       // 解析失败或提交失败
}

impl fmt::Display for ImportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportStage::Idle => write!(f, "IDLE"),
            ImportStage::FileSelected => write!(f, "FILE_SELECTED"),
            ImportStage::Previewing => write!(f, "PREVIEWING"),
            ImportStage::Submitting => write!(f, "SUBMITTING"),
            ImportStage::Completed => write!(f, "COMPLETED"),
            ImportStage::Failed => write!(f, "FAILED"),
        }
    }
}

// ==========================================
// ImportSession - 导入会话
// ==========================================
// R: 导入记录类型（预览缓冲）
// C: 创建成功实体类型（对账报告）
//
// 预览缓冲由当前会话独占，不被并发访问
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportSession<R, C> {
    /// 会话标识（日志关联用）
    pub session_id: Uuid,
    stage: ImportStage,
    file_name: Option<String>,
    preview: Vec<R>,
    report: Option<BatchReport<C>>,
    last_error: Option<String>,
}

impl<R, C> Default for ImportSession<R, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, C> ImportSession<R, C> {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            stage: ImportStage::Idle,
            file_name: None,
            preview: Vec::new(),
            report: None,
            last_error: None,
        }
    }

    pub fn stage(&self) -> ImportStage {
        self.stage
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// 当前预览缓冲（Previewing 之外可能为空）
    pub fn preview(&self) -> &[R] {
        &self.preview
    }

    pub fn report(&self) -> Option<&BatchReport<C>> {
        self.report.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn invalid_transition(&self, to: ImportStage) -> ImportError {
        ImportError::InvalidStageTransition {
            from: self.stage.to_string(),
            to: to.to_string(),
        }
    }

    /// 选择新文件
    ///
    /// 允许来源: Idle / FileSelected / Previewing / Failed
    /// （Completed 必须先 reset；Submitting 期间禁止换文件）
    pub fn select_file(&mut self, file_name: &str) -> ImportResult<()> {
        match self.stage {
            ImportStage::Idle
            | ImportStage::FileSelected
            | ImportStage::Previewing
            | ImportStage::Failed => {
                self.stage = ImportStage::FileSelected;
                self.file_name = Some(file_name.to_string());
                self.preview.clear();
                self.report = None;
                self.last_error = None;
                Ok(())
            }
            _ => Err(self.invalid_transition(ImportStage::FileSelected)),
        }
    }

    /// 解析+校验成功，进入预览
    pub fn set_preview(&mut self, records: Vec<R>) -> ImportResult<()> {
        match self.stage {
            ImportStage::FileSelected => {
                self.preview = records;
                self.stage = ImportStage::Previewing;
                Ok(())
            }
            _ => Err(self.invalid_transition(ImportStage::Previewing)),
        }
    }

    /// 解析失败: 整批拒绝，不保留部分预览
    pub fn fail_parse(&mut self, message: &str) -> ImportResult<()> {
        match self.stage {
            ImportStage::FileSelected => {
                self.preview.clear();
                self.last_error = Some(message.to_string());
                self.stage = ImportStage::Failed;
                Ok(())
            }
            _ => Err(self.invalid_transition(ImportStage::Failed)),
        }
    }

    /// 开始提交
    ///
    /// 允许来源: Previewing，或提交失败后（Failed 且预览仍在）重试
    pub fn begin_submit(&mut self) -> ImportResult<()> {
        match self.stage {
            ImportStage::Previewing => {}
            ImportStage::Failed if !self.preview.is_empty() => {}
            _ => return Err(self.invalid_transition(ImportStage::Submitting)),
        }
        self.last_error = None;
        self.stage = ImportStage::Submitting;
        Ok(())
    }

    /// 提交失败（传输/协议错误）: 预览保持原样，可重试
    pub fn fail_submit(&mut self, message: &str) -> ImportResult<()> {
        match self.stage {
            ImportStage::Submitting => {
                self.last_error = Some(message.to_string());
                self.stage = ImportStage::Failed;
                Ok(())
            }
            _ => Err(self.invalid_transition(ImportStage::Failed)),
        }
    }

    /// 提交完成: 对账报告取代预览
    pub fn complete(&mut self, report: BatchReport<C>) -> ImportResult<()> {
        match self.stage {
            ImportStage::Submitting => {
                self.preview.clear();
                self.report = Some(report);
                self.stage = ImportStage::Completed;
                Ok(())
            }
            _ => Err(self.invalid_transition(ImportStage::Completed)),
        }
    }

    /// 重置回 Idle（关闭对话框）
    ///
    /// 注意: 不会中止在途请求，只丢弃本地状态
    pub fn reset(&mut self) {
        self.stage = ImportStage::Idle;
        self.file_name = None;
        self.preview.clear();
        self.report = None;
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{User, UserRecord};

    fn record() -> UserRecord {
        UserRecord {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
        }
    }

    fn report() -> BatchReport<User> {
        BatchReport {
            total_processed: 1,
            created: 1,
            failed: 0,
            records: vec![],
            errors: vec![],
        }
    }

    #[test]
    fn test_happy_path() {
        let mut session: ImportSession<UserRecord, User> = ImportSession::new();
        assert_eq!(session.stage(), ImportStage::Idle);

        session.select_file("usuarios.json").unwrap();
        assert_eq!(session.stage(), ImportStage::FileSelected);

        session.set_preview(vec![record()]).unwrap();
        assert_eq!(session.stage(), ImportStage::Previewing);
        assert_eq!(session.preview().len(), 1);

        session.begin_submit().unwrap();
        assert_eq!(session.stage(), ImportStage::Submitting);

        session.complete(report()).unwrap();
        assert_eq!(session.stage(), ImportStage::Completed);
        assert!(session.preview().is_empty());
        assert!(session.report().is_some());

        session.reset();
        assert_eq!(session.stage(), ImportStage::Idle);
    }

    #[test]
    fn test_no_concurrent_submit() {
        let mut session: ImportSession<UserRecord, User> = ImportSession::new();
        session.select_file("usuarios.json").unwrap();
        session.set_preview(vec![record()]).unwrap();
        session.begin_submit().unwrap();

        // Submitting 期间再次提交被拒绝
        let err = session.begin_submit().unwrap_err();
        assert!(matches!(err, ImportError::InvalidStageTransition { .. }));
        // 换文件同样被拒绝
        assert!(session.select_file("otro.json").is_err());
    }

    #[test]
    fn test_submit_failure_keeps_preview_and_allows_retry() {
        let mut session: ImportSession<UserRecord, User> = ImportSession::new();
        session.select_file("usuarios.json").unwrap();
        session.set_preview(vec![record()]).unwrap();
        session.begin_submit().unwrap();
        session.fail_submit("HTTP 500").unwrap();

        assert_eq!(session.stage(), ImportStage::Failed);
        assert_eq!(session.preview().len(), 1);
        assert_eq!(session.last_error(), Some("HTTP 500"));

        // 预览仍在: 允许重试提交
        session.begin_submit().unwrap();
        session.complete(report()).unwrap();
    }

    #[test]
    fn test_parse_failure_discards_preview() {
        let mut session: ImportSession<UserRecord, User> = ImportSession::new();
        session.select_file("usuarios.json").unwrap();
        session.fail_parse("JSON 解析失败").unwrap();

        assert_eq!(session.stage(), ImportStage::Failed);
        assert!(session.preview().is_empty());
        // 解析失败后不能提交（无预览）
        assert!(session.begin_submit().is_err());
        // 但可以重新选择文件
        session.select_file("corregido.json").unwrap();
    }

    #[test]
    fn test_completed_requires_reset() {
        let mut session: ImportSession<UserRecord, User> = ImportSession::new();
        session.select_file("usuarios.json").unwrap();
        session.set_preview(vec![record()]).unwrap();
        session.begin_submit().unwrap();
        session.complete(report()).unwrap();

        // Completed 状态下直接选文件被拒绝
        assert!(session.select_file("otro.json").is_err());
        session.reset();
        session.select_file("otro.json").unwrap();
    }

    #[test]
    fn test_session_is_serializable() {
        let mut session: ImportSession<UserRecord, User> = ImportSession::new();
        session.select_file("usuarios.json").unwrap();
        session.set_preview(vec![record()]).unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let restored: ImportSession<UserRecord, User> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.stage(), ImportStage::Previewing);
        assert_eq!(restored.preview().len(), 1);
    }
}
