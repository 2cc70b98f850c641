//! OpenAI 适配器
//!
//! 使用 `async-openai` crate 发起 chat completion，通过 json_schema
//! 响应格式把输出约束为 {"answer": "A"|"B"|"C"|"D"}
//!
//! ## 技术栈
//! - 支持自定义 API 端点（兼容 OpenAI API 的服务）
//! - strict 模式下 schema 禁止额外字段

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, ResponseFormat, ResponseFormatJsonSchema,
    },
    Client,
};
use serde_json::json;
use tracing::debug;

use crate::clients::{build_answer_prompt, extract_answer_letter, ProviderAdapter, ANSWER_LABELS};
use crate::config::Config;
use crate::error::AdapterError;

const PROVIDER: &str = "openai";

/// OpenAI 客户端
pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    /// 创建新的 OpenAI 客户端
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.openai_api_key)
            .with_api_base(&config.openai_api_base_url);

        Self {
            client: Client::with_config(openai_config),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
        }
    }

    /// 构建 json_schema 响应格式：单个 answer 字段，取值限定为选项字母
    fn response_format() -> ResponseFormat {
        ResponseFormat::JsonSchema {
            json_schema: ResponseFormatJsonSchema {
                name: "mbe_answer".to_string(),
                description: None,
                strict: Some(true),
                schema: Some(json!({
                    "type": "object",
                    "properties": {
                        "answer": {
                            "type": "string",
                            "enum": ANSWER_LABELS
                        }
                    },
                    "required": ["answer"],
                    "additionalProperties": false
                })),
            },
        }
    }
}

#[async_trait::async_trait]
impl ProviderAdapter for OpenAiClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    fn preflight(&self) -> Result<(), AdapterError> {
        if self.api_key.is_empty() {
            return Err(AdapterError::MissingApiKey {
                provider: PROVIDER,
                var_name: "OPENAI_API_KEY",
            });
        }
        Ok(())
    }

    async fn ask_one(&self, prompt: &str) -> Result<String, AdapterError> {
        debug!("调用 OpenAI API，模型: {}", self.model);

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(build_answer_prompt(prompt))
            .build()
            .map_err(|e| AdapterError::SdkFailed {
                provider: PROVIDER,
                source: e,
            })?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![ChatCompletionRequestMessage::User(user_msg)])
            .response_format(Self::response_format())
            .build()
            .map_err(|e| AdapterError::SdkFailed {
                provider: PROVIDER,
                source: e,
            })?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            AdapterError::SdkFailed {
                provider: PROVIDER,
                source: e,
            }
        })?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| AdapterError::malformed(PROVIDER, "返回内容为空"))?;

        extract_answer_letter(PROVIDER, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_format_schema_shape() {
        let format = OpenAiClient::response_format();
        match format {
            ResponseFormat::JsonSchema { json_schema } => {
                assert_eq!(json_schema.name, "mbe_answer");
                assert_eq!(json_schema.strict, Some(true));
                let schema = json_schema.schema.expect("schema 不能为空");
                assert_eq!(
                    schema.pointer("/properties/answer/enum"),
                    Some(&json!(["A", "B", "C", "D"]))
                );
                assert_eq!(schema.pointer("/required"), Some(&json!(["answer"])));
                assert_eq!(
                    schema.pointer("/additionalProperties"),
                    Some(&json!(false))
                );
            }
            _ => panic!("响应格式必须是 JsonSchema"),
        }
    }

    #[test]
    fn test_content_decoding() {
        assert_eq!(
            extract_answer_letter(PROVIDER, r#"{"answer": "D"}"#).unwrap(),
            "D"
        );
    }
}
