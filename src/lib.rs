//! # LeetCode Scaffold
//!
//! 根据一条 LeetCode 题目链接，拉取题目元数据、创建本地题目目录，并更新根目录的题目索引
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 持有 HTTP 连接，只暴露查询能力
//! - `LeetcodeClient` - GraphQL 查询，失败转换为 `FetchError`
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单道题
//! - `extract_slug` - 从链接提取 slug
//! - `ProblemScaffolder` - 创建题目目录和文件
//! - `IndexWriter` - 更新 README.md 索引
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整处理流程
//! - `ProblemFlow` - 流程编排（slug → 查询 → 建目录 → 更新索引）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 读取输入、输出结果

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::LeetcodeClient;
pub use config::Config;
pub use error::{AppError, AppResult, FetchError};
pub use models::{Language, ProblemRecord};
pub use orchestrator::App;
pub use workflow::{FlowOutcome, ProblemFlow, ProblemSource};
