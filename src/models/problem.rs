use std::fmt::Display;

use crate::models::graphql::QuestionNode;

/// 单道题目的元数据
///
/// 每次运行从 GraphQL 响应构造一次，随即投影到目录名、题解文件头和索引行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemRecord {
    /// 前台题号（保留字符串形式）
    pub id: String,
    pub title: String,
    pub slug: String,
    /// 难度标签，原样保留（Easy / Medium / Hard）
    pub difficulty: String,
    pub tags: Vec<String>,
}

impl ProblemRecord {
    /// 从 GraphQL 题目节点构造
    pub fn from_question(slug: &str, question: QuestionNode) -> Self {
        Self {
            id: question.question_frontend_id,
            title: question.title,
            slug: slug.to_string(),
            difficulty: question.difficulty,
            tags: question.topic_tags.into_iter().map(|t| t.name).collect(),
        }
    }

    /// 题目目录名：`<id>.<slug>`
    pub fn folder_name(&self) -> String {
        format!("{}.{}", self.id, self.slug)
    }

    pub fn joined_tags(&self) -> String {
        self.tags.join(", ")
    }
}

impl Display for ProblemRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[#{} {} ({})]", self.id, self.title, self.difficulty)
    }
}
