/// LeetCode GraphQL API 客户端
///
/// 封装题目元数据查询，所有失败都在此处转换为 `FetchError`
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::FetchError;
use crate::models::{GraphQlRequest, GraphQlResponse, ProblemRecord};

/// LeetCode API 客户端
pub struct LeetcodeClient {
    http: reqwest::Client,
    graphql_url: String,
}

impl LeetcodeClient {
    /// 创建新的客户端，固定请求头在此一次性设置
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        // 非法头部值直接跳过，不影响请求本身
        for (name, value) in [
            (USER_AGENT, &config.user_agent),
            (ORIGIN, &config.origin),
            (REFERER, &config.referer),
        ] {
            match HeaderValue::from_str(value) {
                Ok(v) => {
                    headers.insert(name, v);
                }
                Err(_) => warn!("⚠️ 忽略非法请求头 {}: {:?}", name, value),
            }
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(FetchError::Transport)?;

        Ok(Self {
            http,
            graphql_url: config.graphql_url.clone(),
        })
    }

    /// 查询题目详情
    ///
    /// # 参数
    /// - `slug`: 题目 slug，如 `two-sum`
    ///
    /// # 返回
    /// 成功返回 `ProblemRecord`；非 200、缺少 data.question、网络异常均返回对应的 `FetchError`
    pub async fn fetch_problem(&self, slug: &str) -> Result<ProblemRecord, FetchError> {
        let result = self.request_problem(slug).await;
        if let Err(e) = &result {
            warn!("⚠️ {}", e);
        }
        result
    }

    async fn request_problem(&self, slug: &str) -> Result<ProblemRecord, FetchError> {
        let body = GraphQlRequest::question_details(slug);
        debug!("GraphQL 请求: {} titleSlug={}", self.graphql_url, slug);

        let response = self
            .http
            .post(&self.graphql_url)
            .json(&body)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(FetchError::Transport)?;
        let parsed: GraphQlResponse = serde_json::from_slice(&bytes).map_err(FetchError::Decode)?;
        debug!("GraphQL 响应长度: {} 字节", bytes.len());

        parsed
            .into_question()
            .map(|question| ProblemRecord::from_question(slug, question))
            .ok_or(FetchError::InvalidResponse)
    }
}
