//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 读取用户输入的一条题目链接，交给流程层处理，并在控制台输出结果。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (读取输入 / 输出结果)
//!     ↓
//! workflow::ProblemFlow (处理单道题)
//!     ↓
//! services (能力层：slug / scaffold / index)
//!     ↓
//! clients (LeetCode GraphQL)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单次运行**：不循环、不批量、不接受命令行参数
//! 2. **向下依赖**：编排层 → workflow → services → clients
//! 3. **无业务逻辑**：只做调度和结果展示

pub mod app;

pub use app::{prompt_url, report, App, PROMPT};
