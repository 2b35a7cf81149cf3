//! 题目目录脚手架 - 业务能力层
//!
//! 只负责"建目录 + 建文件"能力，已存在的文件一律不覆盖

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Language, ProblemRecord};

/// 脚手架执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub folder: PathBuf,
    pub readme_created: bool,
    pub solution_created: bool,
}

/// 题目目录脚手架
pub struct ProblemScaffolder {
    problemset_path: PathBuf,
    author: String,
    language: Language,
    timezone_label: String,
}

impl ProblemScaffolder {
    pub fn new(config: &Config) -> Self {
        Self {
            problemset_path: config.problemset_path(),
            author: config.author.clone(),
            language: config.language,
            timezone_label: config.timezone_label.clone(),
        }
    }

    /// 题解文件名：`<slug>.<ext>`
    pub fn solution_file_name(&self, slug: &str) -> String {
        format!("{}.{}", slug, self.language.extension())
    }

    /// 创建 `<problemset>/<id>.<slug>/` 以及其中的 README.md 和题解文件
    ///
    /// 重复执行是幂等的：目录已存在不报错，文件已存在不改动
    pub fn scaffold(&self, record: &ProblemRecord) -> AppResult<ScaffoldReport> {
        self.scaffold_at(record, &Local::now())
    }

    /// 使用指定时间生成题解头部，便于测试
    pub fn scaffold_at<Tz: TimeZone>(
        &self,
        record: &ProblemRecord,
        solved_on: &DateTime<Tz>,
    ) -> AppResult<ScaffoldReport>
    where
        Tz::Offset: std::fmt::Display,
    {
        let folder = self.problemset_path.join(record.folder_name());
        fs::create_dir_all(&folder)
            .map_err(|e| AppError::create_dir_failed(folder.display().to_string(), e))?;
        debug!("题目目录: {}", folder.display());

        let readme_created = create_if_absent(&folder.join("README.md"), "")?;

        let header = self.solution_header(&record.title, solved_on);
        let solution_path = folder.join(self.solution_file_name(&record.slug));
        let solution_created = create_if_absent(&solution_path, &header)?;

        if solution_created {
            info!("📄 已创建题解文件: {}", solution_path.display());
        } else {
            info!("📄 题解文件已存在，跳过: {}", solution_path.display());
        }

        Ok(ScaffoldReport {
            folder,
            readme_created,
            solution_created,
        })
    }

    /// 生成题解文件头部注释
    pub fn solution_header<Tz: TimeZone>(&self, title: &str, solved_on: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        let c = self.language.comment_prefix();
        format!(
            "{c} Author: {}\n{c} Question: {}\n{c} Solved On: {} {}\n",
            self.author,
            title,
            solved_on.format("%d/%m/%Y %H:%M:%S"),
            self.timezone_label,
        )
    }
}

/// 文件不存在时写入内容，返回是否新建
fn create_if_absent(path: &Path, content: &str) -> AppResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, content).map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record() -> ProblemRecord {
        ProblemRecord {
            id: "1".to_string(),
            title: "Two Sum".to_string(),
            slug: "two-sum".to_string(),
            difficulty: "Easy".to_string(),
            tags: vec!["Array".to_string(), "Hash Table".to_string()],
        }
    }

    fn scaffolder(root: &Path) -> ProblemScaffolder {
        let config = Config {
            author: "Jane <jane@example.com>".to_string(),
            ..Config::with_root(root)
        };
        ProblemScaffolder::new(&config)
    }

    #[test]
    fn test_solution_header_format() {
        let dir = tempfile::tempdir().unwrap();
        let s = scaffolder(dir.path());
        let at = Utc.with_ymd_and_hms(2024, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(
            s.solution_header("Two Sum", &at),
            "# Author: Jane <jane@example.com>\n# Question: Two Sum\n# Solved On: 07/03/2024 09:05:01 IST\n"
        );
    }

    #[test]
    fn test_rust_header_uses_slash_comments() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            language: Language::Rust,
            ..Config::with_root(dir.path())
        };
        let s = ProblemScaffolder::new(&config);
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(s.solution_header("Two Sum", &at).starts_with("// Author:"));
        assert_eq!(s.solution_file_name("two-sum"), "two-sum.rs");
    }

    #[test]
    fn test_scaffold_creates_layout() {
        let dir = tempfile::tempdir().unwrap();
        let report = scaffolder(dir.path()).scaffold(&record()).unwrap();

        let folder = dir.path().join("problemset").join("1.two-sum");
        assert_eq!(report.folder, folder);
        assert!(report.readme_created);
        assert!(report.solution_created);
        assert_eq!(fs::read_to_string(folder.join("README.md")).unwrap(), "");
        let solution = fs::read_to_string(folder.join("two-sum.py")).unwrap();
        assert!(solution.contains("# Question: Two Sum"));
        assert!(solution.trim_end().ends_with("IST"));
    }

    #[test]
    fn test_scaffold_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let s = scaffolder(dir.path());
        s.scaffold(&record()).unwrap();

        let solution_path = dir.path().join("problemset/1.two-sum/two-sum.py");
        fs::write(&solution_path, "class Solution: pass\n").unwrap();

        let report = s.scaffold(&record()).unwrap();
        assert!(!report.readme_created);
        assert!(!report.solution_created);
        assert_eq!(
            fs::read_to_string(&solution_path).unwrap(),
            "class Solution: pass\n"
        );
        let entries = fs::read_dir(dir.path().join("problemset/1.two-sum"))
            .unwrap()
            .count();
        assert_eq!(entries, 2);
    }
}
