//! LeetCode GraphQL 请求/响应结构

use serde::{Deserialize, Serialize};

/// 查询单道题目详情的 GraphQL 语句
pub const QUESTION_DETAILS_QUERY: &str = r#"
query getQuestionDetails($titleSlug: String!) {
    question(titleSlug: $titleSlug) {
        questionFrontendId
        title
        difficulty
        topicTags { name }
    }
}"#;

#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'static str,
    pub variables: QuestionVariables<'a>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionVariables<'a> {
    pub title_slug: &'a str,
}

impl<'a> GraphQlRequest<'a> {
    pub fn question_details(slug: &'a str) -> Self {
        Self {
            query: QUESTION_DETAILS_QUERY,
            variables: QuestionVariables { title_slug: slug },
        }
    }
}

/// 响应外层：`{ data: { question: ... } }`
///
/// `data` 与 `question` 都可能缺失或为 null，解析时不能直接失败
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<QuestionData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionData {
    #[serde(default)]
    pub question: Option<QuestionNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionNode {
    pub question_frontend_id: String,
    pub title: String,
    pub difficulty: String,
    #[serde(default)]
    pub topic_tags: Vec<TopicTag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicTag {
    pub name: String,
}

impl GraphQlResponse {
    /// 取出题目节点，外层缺失时返回 None
    pub fn into_question(self) -> Option<QuestionNode> {
        self.data.and_then(|d| d.question)
    }
}
