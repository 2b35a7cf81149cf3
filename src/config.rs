use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::Language;

/// 程序配置
///
/// 启动时构造一次，之后以引用形式传递给各组件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- LeetCode API 配置 ---
    pub graphql_url: String,
    pub origin: String,
    pub referer: String,
    pub user_agent: String,
    /// 请求超时（秒），None 表示使用 reqwest 默认值
    pub request_timeout_secs: Option<u64>,
    // --- 本地目录配置 ---
    /// 仓库根目录，索引文件与题目集目录都位于其下
    pub root_dir: PathBuf,
    pub problemset_dir: String,
    pub index_file: String,
    // --- 题解文件配置 ---
    pub author: String,
    pub language: Language,
    /// 题解时间戳后缀，固定标签，与本机实际时区无关
    pub timezone_label: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            graphql_url: "https://leetcode.com/graphql".to_string(),
            origin: "https://leetcode.com".to_string(),
            referer: "https://leetcode.com/".to_string(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string(),
            request_timeout_secs: None,
            root_dir: PathBuf::from("."),
            problemset_dir: "problemset".to_string(),
            index_file: "README.md".to_string(),
            author: "Anonymous".to_string(),
            language: Language::Python,
            timezone_label: "IST".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 先读取 `LEETCODE_CONFIG` 指定的 TOML 文件（如有），再叠加环境变量
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// 使用给定的变量查询函数加载配置
    pub fn load_with(env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base = match env("LEETCODE_CONFIG") {
            Some(path) => Self::from_toml_file(Path::new(&path))?,
            None => Self::default(),
        };
        Ok(base.with_overrides(env))
    }

    /// 从 TOML 文件加载，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })
    }

    /// 按变量名查询覆盖值，无法解析的值保留原值
    pub fn with_overrides(self, env: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            graphql_url: env("LEETCODE_GRAPHQL_URL").unwrap_or(self.graphql_url),
            origin: env("LEETCODE_ORIGIN").unwrap_or(self.origin),
            referer: env("LEETCODE_REFERER").unwrap_or(self.referer),
            user_agent: env("LEETCODE_USER_AGENT").unwrap_or(self.user_agent),
            request_timeout_secs: env("LEETCODE_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .or(self.request_timeout_secs),
            root_dir: env("LEETCODE_ROOT").map(PathBuf::from).unwrap_or(self.root_dir),
            problemset_dir: env("LEETCODE_PROBLEMSET_DIR").unwrap_or(self.problemset_dir),
            index_file: env("LEETCODE_INDEX_FILE").unwrap_or(self.index_file),
            author: env("LEETCODE_AUTHOR").unwrap_or(self.author),
            language: env("LEETCODE_LANGUAGE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.language),
            timezone_label: env("LEETCODE_TZ_LABEL").unwrap_or(self.timezone_label),
            verbose_logging: env("VERBOSE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
        }
    }

    /// 以指定根目录构造配置，其余字段取默认值
    pub fn with_root(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
            ..Self::default()
        }
    }

    pub fn problemset_path(&self) -> PathBuf {
        self.root_dir.join(&self.problemset_dir)
    }

    pub fn index_path(&self) -> PathBuf {
        self.root_dir.join(&self.index_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_paths() {
        let config = Config::with_root("/tmp/lc");
        assert_eq!(config.problemset_path(), PathBuf::from("/tmp/lc/problemset"));
        assert_eq!(config.index_path(), PathBuf::from("/tmp/lc/README.md"));
        assert_eq!(config.timezone_label, "IST");
    }

    #[test]
    fn test_from_toml_file_partial() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "author = \"Jane <jane@example.com>\"").unwrap();
        writeln!(f, "language = \"rust\"").unwrap();
        writeln!(f, "request_timeout_secs = 10").unwrap();
        f.flush().unwrap();

        let config = Config::from_toml_file(f.path()).unwrap();
        assert_eq!(config.author, "Jane <jane@example.com>");
        assert_eq!(config.language, Language::Rust);
        assert_eq!(config.request_timeout_secs, Some(10));
        assert_eq!(config.graphql_url, "https://leetcode.com/graphql");
    }

    #[test]
    fn test_from_toml_file_bad_language() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "language = \"cobol\"").unwrap();
        f.flush().unwrap();

        let err = Config::from_toml_file(f.path()).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParseFailed { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_toml_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFailed { .. }));
    }

    /// 用固定的键值对模拟环境变量
    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_overrides_apply() {
        let config = Config::default().with_overrides(vars(&[
            ("LEETCODE_GRAPHQL_URL", "http://127.0.0.1:8080/graphql"),
            ("LEETCODE_ROOT", "/srv/leetcode"),
            ("LEETCODE_AUTHOR", "Jane"),
            ("LEETCODE_LANGUAGE", "rs"),
            ("LEETCODE_TIMEOUT_SECS", "15"),
            ("LEETCODE_TZ_LABEL", "UTC"),
            ("VERBOSE_LOGGING", "true"),
        ]));
        assert_eq!(config.graphql_url, "http://127.0.0.1:8080/graphql");
        assert_eq!(config.root_dir, PathBuf::from("/srv/leetcode"));
        assert_eq!(config.author, "Jane");
        assert_eq!(config.language, Language::Rust);
        assert_eq!(config.request_timeout_secs, Some(15));
        assert_eq!(config.timezone_label, "UTC");
        assert!(config.verbose_logging);
        assert_eq!(config.index_file, "README.md");
    }

    #[test]
    fn test_unparseable_overrides_keep_previous() {
        let base = Config {
            language: Language::Go,
            request_timeout_secs: Some(30),
            ..Config::default()
        };
        let config = base.with_overrides(vars(&[
            ("LEETCODE_TIMEOUT_SECS", "soon"),
            ("LEETCODE_LANGUAGE", "cobol"),
            ("VERBOSE_LOGGING", "yes please"),
        ]));
        assert_eq!(config.request_timeout_secs, Some(30));
        assert_eq!(config.language, Language::Go);
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_load_with_config_file_then_overrides() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "author = \"From File\"").unwrap();
        writeln!(f, "timezone_label = \"UTC\"").unwrap();
        f.flush().unwrap();
        let path = f.path().display().to_string();

        let config = Config::load_with(vars(&[
            ("LEETCODE_CONFIG", path.as_str()),
            ("LEETCODE_TZ_LABEL", "CET"),
        ]))
        .unwrap();
        assert_eq!(config.author, "From File");
        assert_eq!(config.timezone_label, "CET");
    }

    #[test]
    fn test_load_without_config_file() {
        let config = Config::load_with(vars(&[])).unwrap();
        assert_eq!(config.graphql_url, "https://leetcode.com/graphql");
        assert_eq!(config.language, Language::Python);

        let err = Config::load_with(vars(&[("LEETCODE_CONFIG", "/definitely/not/here.toml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ReadFailed { .. }));
    }
}
