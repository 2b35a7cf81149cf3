//! 题目 slug 提取

use regex::Regex;

/// 从题目链接中提取 slug
///
/// 取 `problems/` 之后、下一个 `/` 之前的片段；链接中没有 `problems/` 时返回 None
pub fn extract_slug(url: &str) -> Option<String> {
    let re = Regex::new(r"problems/([^/]+)").ok()?;
    re.captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_standard_url() {
        assert_eq!(
            extract_slug("https://leetcode.com/problems/two-sum/"),
            Some("two-sum".to_string())
        );
        assert_eq!(
            extract_slug("https://leetcode.com/problems/two-sum/description/?envType=daily"),
            Some("two-sum".to_string())
        );
    }

    #[test]
    fn test_extract_without_trailing_slash() {
        assert_eq!(
            extract_slug("leetcode.com/problems/lru-cache"),
            Some("lru-cache".to_string())
        );
    }

    #[test]
    fn test_extract_not_found() {
        assert_eq!(extract_slug("https://leetcode.com/discuss/general"), None);
        assert_eq!(extract_slug("https://leetcode.com/problems/"), None);
        assert_eq!(extract_slug(""), None);
    }
}
