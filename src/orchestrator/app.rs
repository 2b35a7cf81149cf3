use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{error, info};

use crate::clients::LeetcodeClient;
use crate::config::Config;
use crate::utils::logging;
use crate::workflow::{FlowOutcome, ProblemFlow, ProblemSource};

/// 交互提示
pub const PROMPT: &str = "Enter Leetcode Question URL: ";

/// 应用主结构
///
/// 每次进程运行只处理一道题
pub struct App<S: ProblemSource = LeetcodeClient> {
    flow: ProblemFlow<S>,
}

impl App<LeetcodeClient> {
    /// 初始化应用
    pub fn initialize(config: &Config) -> Result<Self> {
        logging::log_startup(config);
        Ok(Self {
            flow: ProblemFlow::from_config(config)?,
        })
    }

    /// 从标准输入读取链接并运行
    ///
    /// 标准输入/输出的锁只在读取和输出结果时持有，网络请求期间不持有
    pub async fn run(&self) -> Result<FlowOutcome> {
        let url = prompt_url(&mut std::io::stdin().lock(), &mut std::io::stdout().lock())?;
        let outcome = self.flow.run(&url).await?;
        report(&outcome, &url, &mut std::io::stdout().lock())?;
        Ok(outcome)
    }
}

impl<S: ProblemSource> App<S> {
    pub fn with_flow(flow: ProblemFlow<S>) -> Self {
        Self { flow }
    }

    /// 提示输入、读取一行链接、执行流程并输出结果
    pub async fn run_with_io<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<FlowOutcome> {
        let url = prompt_url(input, output)?;
        let outcome = self.flow.run(&url).await?;
        report(&outcome, &url, output)?;
        Ok(outcome)
    }
}

/// 输出提示并读取一行链接
pub fn prompt_url<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut url = String::new();
    input.read_line(&mut url).context("无法读取输入")?;
    Ok(url)
}

/// 在控制台输出流程结果
pub fn report<W: Write>(outcome: &FlowOutcome, url: &str, output: &mut W) -> Result<()> {
    match outcome {
        FlowOutcome::Completed { record, .. } => {
            info!("✅ 题目 {} 处理完成", record);
            writeln!(
                output,
                "✅ Problem '{}' setup completed successfully!",
                record.title
            )?;
        }
        FlowOutcome::InvalidUrl => {
            error!("❌ 无效的题目链接: {}", url.trim());
            writeln!(output, "❌ Invalid Leetcode URL. Exiting...")?;
        }
        FlowOutcome::FetchFailed(e) => {
            error!("❌ 获取题目信息失败: {}", e);
            writeln!(output, "❌ Failed to fetch problem details. Exiting...")?;
        }
    }
    Ok(())
}
