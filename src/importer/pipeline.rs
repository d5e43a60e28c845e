// ==========================================
// 用户订单管理控制台 - 批量导入管道
// ==========================================
// 职责: 整合导入流程，从文件到对账报告
// 流程: 解析 → 逐条校验(快速失败) → 预览 → 一次性提交 → 对账
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::BatchReport;
use crate::importer::batch_importer_trait::BatchSubmitter;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::JsonFileParser;
use crate::importer::fixture_generator::FixtureContext;
use crate::importer::record_schema::{validate_batch, RecordSchema};
use crate::importer::session::{ImportSession, ImportStage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

// ==========================================
// BatchImportPipeline - 批量导入管道
// ==========================================
// 按 RecordSchema 参数化，users/orders 共用同一实现
pub struct BatchImportPipeline<S: RecordSchema> {
    schema: S,
    parser: JsonFileParser,
    session: ImportSession<S::Record, S::Created>,
}

impl<S: RecordSchema> BatchImportPipeline<S> {
    pub fn new(schema: S) -> Self {
        Self {
            schema,
            parser: JsonFileParser,
            session: ImportSession::new(),
        }
    }

    /// 当前会话状态（预览/报告/错误均从这里读取）
    pub fn session(&self) -> &ImportSession<S::Record, S::Created> {
        &self.session
    }

    pub fn stage(&self) -> ImportStage {
        self.session.stage()
    }

    /// 从文本装载批次: 解析 + 校验 + 进入预览
    ///
    /// # 参数
    /// - file_name: 文件名（用于 .json 扩展名检查与会话记录）
    /// - raw: 文件原始文本
    ///
    /// # 返回
    /// - Ok(&[Record]): 与文件同序的预览记录
    /// - Err(ImportError): 整批拒绝（会话进入 Failed，无部分预览）
    #[instrument(skip(self, raw), fields(session_id = %self.session.session_id, kind = %self.schema.entity_kind()))]
    pub fn load_text(&mut self, file_name: &str, raw: &str) -> ImportResult<&[S::Record]> {
        // 扩展名不符时不推进会话状态（对应 UI 直接拒绝选择）
        if !file_name.to_lowercase().ends_with(".json") {
            return Err(ImportError::UnsupportedFormat(file_name.to_string()));
        }

        self.session.select_file(file_name)?;
        debug!(file_name = %file_name, "开始解析导入文件");

        match self.parse_and_validate(raw) {
            Ok(records) => {
                info!(count = records.len(), "解析校验通过，进入预览");
                self.session.set_preview(records)?;
                Ok(self.session.preview())
            }
            Err(e) => {
                warn!(error = %e, "导入文件被拒绝");
                self.session.fail_parse(&e.to_string())?;
                Err(e)
            }
        }
    }

    /// 从文件装载批次
    pub fn load_file(&mut self, file_path: &Path) -> ImportResult<&[S::Record]> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("import.json")
            .to_string();
        let raw = std::fs::read_to_string(file_path)?;
        self.load_text(&file_name, &raw)
    }

    /// 生成构造数据并装入预览（走与文件导入相同的校验路径）
    ///
    /// # 参数
    /// - count: 记录条数
    /// - seed: 随机种子（相同种子产生相同批次）
    /// - ctx: 生成上下文（订单的 user_id 池）
    #[instrument(skip(self, ctx), fields(session_id = %self.session.session_id, kind = %self.schema.entity_kind()))]
    pub fn load_fixtures(
        &mut self,
        count: usize,
        seed: u64,
        ctx: &FixtureContext,
    ) -> ImportResult<&[S::Record]> {
        let mut rng = StdRng::seed_from_u64(seed);
        let records = self.schema.generate_fixtures(count, &mut rng, ctx);

        // 序列化回 JSON 再走同一条校验路径，保证构造数据与
        // 文件导入受同等约束（包含空批次/上限检查）
        let values = records
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ImportError::JsonSyntax(e.to_string()))?;
        let raw = serde_json::to_string(&values)
            .map_err(|e| ImportError::JsonSyntax(e.to_string()))?;

        let file_name = format!("{}_fixtures.json", self.schema.entity_kind().key());
        self.load_text(&file_name, &raw)
    }

    fn parse_and_validate(&self, raw: &str) -> ImportResult<Vec<S::Record>> {
        let values = self.parser.parse_text(raw, self.schema.entity_kind())?;
        validate_batch(&self.schema, &values)
    }

    /// 提交当前预览批次并完成对账
    ///
    /// # 返回
    /// - Ok(BatchReport): 逐条对账报告（会话进入 Completed）
    /// - Err(ApiError): 传输/协议失败（会话进入 Failed，预览保留可重试）
    ///
    /// # 说明
    /// - Submitting 期间重复调用会被会话状态拒绝
    /// - 相同预览重复提交会产生两个独立的服务端批次（无幂等保证）
    #[instrument(skip(self, submitter), fields(session_id = %self.session.session_id, kind = %self.schema.entity_kind()))]
    pub async fn submit<B>(&mut self, submitter: &B) -> ApiResult<BatchReport<S::Created>>
    where
        B: BatchSubmitter<Input = S::Record, Created = S::Created> + ?Sized,
    {
        self.session.begin_submit().map_err(ApiError::from)?;

        let records = self.session.preview().to_vec();
        info!(count = records.len(), "开始批量提交");

        match submitter.submit_batch(&records).await {
            Ok(report) => {
                // 对账不变量: created + failed == total_processed
                if !report.is_consistent() || report.total_processed != records.len() {
                    let message = format!(
                        "对账报告不一致: total_processed={}, created={}, failed={}, submitted={}",
                        report.total_processed,
                        report.created,
                        report.failed,
                        records.len()
                    );
                    warn!("{}", message);
                    self.session.fail_submit(&message).map_err(ApiError::from)?;
                    return Err(ApiError::InvalidResponse(message));
                }

                info!(
                    created = report.created,
                    failed = report.failed,
                    "批量提交完成"
                );
                self.session.complete(report.clone()).map_err(ApiError::from)?;
                Ok(report)
            }
            Err(e) => {
                warn!(error = %e, "批量提交失败，预览保留待重试");
                self.session
                    .fail_submit(&e.to_string())
                    .map_err(ApiError::from)?;
                Err(e)
            }
        }
    }

    /// 重置会话回 Idle
    pub fn reset(&mut self) {
        self.session.reset();
    }
}
