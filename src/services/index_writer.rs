//! 索引文档写入服务 - 业务能力层
//!
//! 根目录 README.md 是一张按题号排序的 Markdown 表格：
//! 前 4 行非空行为表头，其余每行对应一道题

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Language, ProblemRecord};

/// 新建索引文档时写入的表头
pub const INDEX_HEADER: &str = "# Leetcode\n\n### Leetcode Problem Index\n\n\
| # | Title | Solution | Tags | Difficulty |\n\
|:----:|:--------:|:--------:|:-------:|:----------:|\n";

/// 表头占用的非空行数
const HEADER_LINES: usize = 4;

/// 表格行至少包含的 `|` 数量，不足的行在重写时被丢弃
const MIN_ROW_PIPES: usize = 5;

/// 索引更新结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexUpdate {
    /// 新行是否被追加（完全相同的行已存在时为 false）
    pub added: bool,
    /// 重写后的题目行数
    pub entries: usize,
}

/// 索引文档写入服务
pub struct IndexWriter {
    index_path: PathBuf,
    problemset_dir: String,
    language: Language,
}

impl IndexWriter {
    pub fn new(config: &Config) -> Self {
        Self {
            index_path: config.index_path(),
            problemset_dir: config.problemset_dir.clone(),
            language: config.language,
        }
    }

    /// 构建一道题的表格行
    ///
    /// `| id | [title](url) | [Lang](problemset/<id>.<slug>/<slug>.<ext>) | tags | difficulty |`
    pub fn build_row(&self, record: &ProblemRecord, url: &str) -> String {
        let solution_path = format!(
            "{}/{}/{}.{}",
            self.problemset_dir,
            record.folder_name(),
            record.slug,
            self.language.extension()
        );
        format!(
            "| {} | [{}]({}) | [{}]({}) | {} | {} |",
            record.id,
            record.title,
            url,
            self.language.display_name(),
            solution_path,
            record.joined_tags(),
            record.difficulty
        )
    }

    /// 插入新行、去重、排序并重写整个索引文档
    pub fn update(&self, record: &ProblemRecord, url: &str) -> AppResult<IndexUpdate> {
        let path = self.index_path.as_path();
        if !path.exists() {
            info!("📋 索引文档不存在，创建: {}", path.display());
            write_atomic(path, INDEX_HEADER)?;
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        let mut lines = non_blank_lines(&content);
        if lines.is_empty() {
            info!("📋 索引文档为空，补写表头: {}", path.display());
            lines = non_blank_lines(INDEX_HEADER);
        }

        let row = self.build_row(record, url);
        let (lines, added) = merge_entries(lines, row);
        let entries = lines.len().saturating_sub(HEADER_LINES);

        write_atomic(path, &(lines.join("\n") + "\n"))?;

        if added {
            info!("📋 索引已更新，共 {} 道题", entries);
        } else {
            info!("📋 索引中已存在相同条目，仅重新排序 (共 {} 道题)", entries);
        }

        Ok(IndexUpdate { added, entries })
    }
}

/// 逐行去除首尾空白并丢弃空行
fn non_blank_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// 合并新行到索引的所有非空行中
///
/// 1. 与已有行完全相同则不追加（按文本去重，不按题号）
/// 2. 前 4 行视为表头，其余为题目行
/// 3. 丢弃 `|` 少于 5 个的题目行
/// 4. 按题号升序稳定排序，非数字题号排在最后
///
/// 返回合并后的全部行以及新行是否被追加
pub fn merge_entries(mut lines: Vec<String>, row: String) -> (Vec<String>, bool) {
    let added = !lines.contains(&row);
    if added {
        lines.push(row);
    }

    let split = lines.len().min(HEADER_LINES);
    let mut entries = lines.split_off(split);
    let before = entries.len();
    entries.retain(|l| l.matches('|').count() >= MIN_ROW_PIPES);
    if entries.len() != before {
        debug!("丢弃 {} 行格式错误的条目", before - entries.len());
    }

    entries.sort_by_key(|l| sort_key(l));
    lines.extend(entries);
    (lines, added)
}

/// 题目行的排序键：第一列为纯数字时按数值排序，否则排在最后
pub fn sort_key(line: &str) -> (bool, u64) {
    let id = line.split('|').nth(1).map(str::trim).unwrap_or("");
    let numeric = !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit());
    match id.parse::<u64>() {
        Ok(n) if numeric => (false, n),
        _ => (true, 0),
    }
}

/// 先写临时文件再重命名，避免中途中断留下截断的索引
fn write_atomic(path: &Path, content: &str) -> AppResult<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, content)
        .map_err(|e| AppError::file_write_failed(tmp.display().to_string(), e))?;
    fs::rename(&tmp, path)
        .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;
    Ok(())
}
