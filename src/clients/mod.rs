//! 模型适配器层
//!
//! 每个厂商的"结构化单选作答"请求/响应编码各不相同：
//! - `gemini_client`: 声明式响应 schema（responseSchema + JSON MIME）
//! - `openai_client`: JSON Schema 约束的 chat completion（json_schema）
//! - `claude_client`: 强制调用单个 submit_answer 工具（tool_choice）
//!
//! 三者统一实现 `ProviderAdapter` 契约：给定一批题目，逐题发起一次
//! 结构化输出请求，返回 题号 -> 选项字母 的映射

pub mod claude_client;
pub mod gemini_client;
pub mod openai_client;

pub use claude_client::ClaudeClient;
pub use gemini_client::GeminiClient;
pub use openai_client::OpenAiClient;

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::AdapterError;
use crate::models::question::Question;
use crate::models::verdict::ProviderResponse;

/// 允许的选项字母表
pub const ANSWER_LABELS: [&str; 4] = ["A", "B", "C", "D"];

/// 各厂商结构化输出的统一载荷形状：{"answer": "A"}
#[derive(Debug, Deserialize)]
pub struct StructuredAnswer {
    pub answer: String,
}

/// 模型适配器契约
///
/// 把通用的"问一道选择题"翻译成各厂商自己的请求/响应方言。
/// `ask_one` 是唯一的厂商差异点；逐题循环由默认实现共享。
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    /// 模型名（用于日志和结果键）
    fn name(&self) -> &'static str;

    /// 预检：凭证缺失等无法开始调用的情况在这里直接失败
    fn preflight(&self) -> Result<(), AdapterError>;

    /// 发起一次结构化输出请求，返回单个选项字母
    ///
    /// `prompt` 是不含作答指令的题面文本；作答指令由各厂商自行
    /// 拼接（gemini/openai 用单字母指令，claude 用工具调用指令）
    async fn ask_one(&self, prompt: &str) -> Result<String, AdapterError>;

    /// 整卷作答：逐题请求，失败的题目跳过（该题号在结果中缺失）
    async fn answer(&self, questions: &[Question]) -> Result<ProviderResponse, AdapterError> {
        self.preflight()?;

        let mut results = ProviderResponse::new();
        for question in questions {
            let prompt = question.prompt_text();
            match self.ask_one(&prompt).await {
                Ok(letter) => {
                    info!(
                        "[{}] 第 {} 题作答: {}",
                        self.name(),
                        question.question_number,
                        letter
                    );
                    results.insert(question.question_number, letter);
                }
                Err(e) => {
                    warn!(
                        "[{}] 第 {} 题未获得有效答案: {}",
                        self.name(),
                        question.question_number,
                        e
                    );
                }
            }
        }

        Ok(results)
    }
}

/// 单字母作答指令（gemini / openai 共用）
pub const LETTER_INSTRUCTION: &str = "Answer the following multiple choice question. \
     Respond with ONLY the letter of your answer (A, B, C, or D).";

/// 构建单题提示词：单字母作答指令 + 题面
pub fn build_answer_prompt(prompt_text: &str) -> String {
    format!("{}\n\n{}", LETTER_INSTRUCTION, prompt_text)
}

/// 匹配独立出现的选项字母
static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-D])\b").expect("选项字母正则非法"));

/// 从结构化输出的文本载荷中提取选项字母
///
/// 优先按 `{"answer": "A"}` 严格解析；解析失败时退化为
/// 在文本中查找第一个独立出现的 A-D 字母
pub fn extract_answer_letter(provider: &'static str, raw: &str) -> Result<String, AdapterError> {
    if let Ok(parsed) = serde_json::from_str::<StructuredAnswer>(raw) {
        return validate_label(provider, parsed.answer.trim());
    }

    if let Some(caps) = LABEL_RE.captures(raw) {
        return validate_label(provider, &caps[1]);
    }

    Err(AdapterError::malformed(
        provider,
        format!("无法从文本中提取选项字母: {}", raw.trim()),
    ))
}

/// 校验字母是否在允许的选项字母表内
pub fn validate_label(provider: &'static str, label: &str) -> Result<String, AdapterError> {
    if ANSWER_LABELS.contains(&label) {
        Ok(label.to_string())
    } else {
        Err(AdapterError::invalid_label(provider, label))
    }
}
