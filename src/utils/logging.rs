/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::ProblemRecord;

/// 初始化日志
///
/// 输出到 stderr，stdout 留给交互提示。`RUST_LOG` 优先，
/// 否则按 `verbose` 选择 debug / info。重复调用不会 panic
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 LeetCode 题目脚手架启动");
    info!("📁 根目录: {}", config.root_dir.display());
    info!("📝 题解语言: {}", config.language.display_name());
    info!("{}", "=".repeat(60));
}

/// 记录获取到的题目信息
pub fn log_problem(record: &ProblemRecord) {
    info!("✓ 题号: {}", record.id);
    info!("✓ 标题: {}", record.title);
    info!("✓ 难度: {}", record.difficulty);
    info!("✓ 标签: {}", truncate_text(&record.joined_tags(), 80));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（字符数）
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
