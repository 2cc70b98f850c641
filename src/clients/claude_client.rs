//! Anthropic Claude 适配器
//!
//! 使用 messages 接口，声明单个 submit_answer 工具并通过 tool_choice
//! 强制调用，从 tool_use 内容块中取出答案字母

use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::clients::{validate_label, ProviderAdapter, ANSWER_LABELS};
use crate::config::Config;
use crate::error::AdapterError;

const PROVIDER: &str = "claude";

/// Anthropic API 版本号
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// 工具调用响应的 max_tokens 上限（只需容纳一个字母）
const MAX_TOKENS: u32 = 100;

/// Claude 客户端
pub struct ClaudeClient {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl ClaudeClient {
    /// 创建新的 Claude 客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            api_key: config.anthropic_api_key.clone(),
            base_url: config.anthropic_api_base_url.clone(),
            model: config.claude_model.clone(),
        }
    }

    /// 构建 messages 请求体（强制调用 submit_answer 工具）
    fn build_request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "tools": [{
                "name": "submit_answer",
                "description": "Submit your answer to the multiple choice question",
                "input_schema": {
                    "type": "object",
                    "properties": {
                        "answer": {
                            "type": "string",
                            "enum": ANSWER_LABELS,
                            "description": "The letter of your answer choice"
                        }
                    },
                    "required": ["answer"]
                }
            }],
            "tool_choice": { "type": "tool", "name": "submit_answer" },
            "messages": [{
                "role": "user",
                "content": format!(
                    "Answer the following multiple choice question. \
                     Use the submit_answer tool to provide your answer (A, B, C, or D).\n\n{}",
                    prompt
                )
            }]
        })
    }

    /// 从 messages 响应中找到 submit_answer 的 tool_use 块并解出字母
    fn decode_answer(value: &Value) -> Result<String, AdapterError> {
        let blocks = value
            .get("content")
            .and_then(|v| v.as_array())
            .ok_or_else(|| AdapterError::malformed(PROVIDER, "响应中缺少 content 数组"))?;

        for block in blocks {
            let is_submit = block.get("type").and_then(|v| v.as_str()) == Some("tool_use")
                && block.get("name").and_then(|v| v.as_str()) == Some("submit_answer");
            if is_submit {
                let answer = block
                    .pointer("/input/answer")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| {
                        AdapterError::malformed(PROVIDER, "tool_use 块缺少 input.answer")
                    })?;
                return validate_label(PROVIDER, answer);
            }
        }

        Err(AdapterError::malformed(
            PROVIDER,
            "响应中没有 submit_answer 的 tool_use 块",
        ))
    }
}

#[async_trait::async_trait]
impl ProviderAdapter for ClaudeClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn preflight(&self) -> Result<(), AdapterError> {
        if self.api_key.is_empty() {
            return Err(AdapterError::MissingApiKey {
                provider: PROVIDER,
                var_name: "ANTHROPIC_API_KEY",
            });
        }
        Ok(())
    }

    async fn ask_one(&self, prompt: &str) -> Result<String, AdapterError> {
        let url = format!("{}/v1/messages", self.base_url);
        debug!("调用 Claude API，模型: {}", self.model);

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&self.build_request_body(prompt))
            .send()
            .await
            .map_err(|e| AdapterError::RequestFailed {
                provider: PROVIDER,
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdapterError::BadStatus {
                provider: PROVIDER,
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| AdapterError::RequestFailed {
                provider: PROVIDER,
                source: e,
            })?;

        Self::decode_answer(&value)
    }
}
