//! Google Gemini 适配器
//!
//! 使用 generateContent 接口，通过声明式 responseSchema 把输出
//! 约束为 {"answer": "A"|"B"|"C"|"D"} 的 JSON

use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::clients::{build_answer_prompt, extract_answer_letter, ProviderAdapter, ANSWER_LABELS};
use crate::config::Config;
use crate::error::AdapterError;

const PROVIDER: &str = "gemini";

/// Gemini 客户端
pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// 创建新的 Gemini 客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_api_base_url.clone(),
            model: config.gemini_model.clone(),
        }
    }

    /// 构建 generateContent 请求体
    fn build_request_body(&self, prompt: &str) -> Value {
        json!({
            "contents": [{
                "parts": [{ "text": build_answer_prompt(prompt) }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "answer": {
                            "type": "STRING",
                            "enum": ANSWER_LABELS
                        }
                    },
                    "required": ["answer"]
                }
            }
        })
    }

    /// 从 generateContent 响应中取出结构化文本并解出字母
    fn decode_answer(value: &Value) -> Result<String, AdapterError> {
        let text = value
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                AdapterError::malformed(PROVIDER, "响应中缺少 candidates[0].content.parts[0].text")
            })?;

        extract_answer_letter(PROVIDER, text)
    }
}

#[async_trait::async_trait]
impl ProviderAdapter for GeminiClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn preflight(&self) -> Result<(), AdapterError> {
        if self.api_key.is_empty() {
            return Err(AdapterError::MissingApiKey {
                provider: PROVIDER,
                var_name: "GOOGLE_API_KEY",
            });
        }
        Ok(())
    }

    async fn ask_one(&self, prompt: &str) -> Result<String, AdapterError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        debug!("调用 Gemini API，模型: {}", self.model);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
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
