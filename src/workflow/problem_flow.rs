//! 题目处理流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整处理流程
//!
//! 流程顺序：
//! 1. 从链接提取 slug
//! 2. 查询题目元数据
//! 3. 创建题目目录和文件
//! 4. 更新索引文档

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::clients::LeetcodeClient;
use crate::config::Config;
use crate::error::FetchError;
use crate::models::ProblemRecord;
use crate::services::{extract_slug, IndexUpdate, IndexWriter, ProblemScaffolder, ScaffoldReport};
use crate::utils::logging;

/// 题目元数据来源
///
/// 生产环境为 `LeetcodeClient`，测试中可替换为固定数据
#[allow(async_fn_in_trait)]
pub trait ProblemSource {
    async fn fetch(&self, slug: &str) -> Result<ProblemRecord, FetchError>;
}

impl ProblemSource for LeetcodeClient {
    async fn fetch(&self, slug: &str) -> Result<ProblemRecord, FetchError> {
        self.fetch_problem(slug).await
    }
}

/// 流程结果
#[derive(Debug)]
pub enum FlowOutcome {
    /// 全部完成
    Completed {
        record: ProblemRecord,
        scaffold: ScaffoldReport,
        index: IndexUpdate,
    },
    /// 链接中没有题目 slug，未发起网络请求
    InvalidUrl,
    /// 获取元数据失败，未写入任何文件
    FetchFailed(FetchError),
}

/// 题目处理流程
///
/// - 不持有网络以外的资源
/// - 只依赖业务能力（services）
pub struct ProblemFlow<S: ProblemSource> {
    source: S,
    scaffolder: ProblemScaffolder,
    index_writer: IndexWriter,
}

impl ProblemFlow<LeetcodeClient> {
    /// 使用 LeetCode 客户端创建流程
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = LeetcodeClient::new(config).context("无法创建 HTTP 客户端")?;
        Ok(Self::new(client, config))
    }
}

impl<S: ProblemSource> ProblemFlow<S> {
    pub fn new(source: S, config: &Config) -> Self {
        Self {
            source,
            scaffolder: ProblemScaffolder::new(config),
            index_writer: IndexWriter::new(config),
        }
    }

    pub async fn run(&self, url: &str) -> Result<FlowOutcome> {
        let url = url.trim();

        // ========== 1. 提取 slug ==========
        let Some(slug) = extract_slug(url) else {
            warn!("⚠️ 链接中未找到题目 slug: {}", url);
            return Ok(FlowOutcome::InvalidUrl);
        };
        info!("🔍 正在查询题目: {}", slug);

        // ========== 2. 查询元数据 ==========
        let record = match self.source.fetch(&slug).await {
            Ok(record) => record,
            Err(e) => return Ok(FlowOutcome::FetchFailed(e)),
        };
        logging::log_problem(&record);

        // ========== 3. 创建目录 ==========
        let scaffold = self
            .scaffolder
            .scaffold(&record)
            .with_context(|| format!("创建题目目录失败: {}", record.folder_name()))?;
        info!("📁 题目目录: {}", scaffold.folder.display());

        // ========== 4. 更新索引 ==========
        let index = self
            .index_writer
            .update(&record, url)
            .context("更新索引文档失败")?;

        Ok(FlowOutcome::Completed {
            record,
            scaffold,
            index,
        })
    }
}
