use crate::error::{AppResult, ConfigError};

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 题库 JSON 文件路径
    pub questions_file: String,
    /// 结果报告输出路径
    pub output_file: String,
    /// 起始题号（含）
    pub question_start: u32,
    /// 结束题号（含）
    pub question_end: u32,
    /// 是否显示详细日志（题干预览等）
    pub verbose_logging: bool,
    // --- Gemini 配置 ---
    pub gemini_api_key: String,
    pub gemini_api_base_url: String,
    pub gemini_model: String,
    // --- OpenAI 配置 ---
    pub openai_api_key: String,
    pub openai_api_base_url: String,
    pub openai_model: String,
    // --- Anthropic 配置 ---
    pub anthropic_api_key: String,
    pub anthropic_api_base_url: String,
    pub claude_model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            questions_file: "mbe_sample_questions.json".to_string(),
            output_file: "mbe_api_results.json".to_string(),
            question_start: 1,
            question_end: 21,
            verbose_logging: false,
            gemini_api_key: String::new(),
            gemini_api_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            gemini_model: "gemini-3-pro-preview".to_string(),
            openai_api_key: String::new(),
            openai_api_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-5.2".to_string(),
            anthropic_api_key: String::new(),
            anthropic_api_base_url: "https://api.anthropic.com".to_string(),
            claude_model: "claude-opus-4-5-20251101".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置，缺失项使用默认值
    pub fn from_env() -> AppResult<Self> {
        let default = Self::default();
        let config = Self {
            questions_file: std::env::var("QUESTIONS_FILE").unwrap_or(default.questions_file),
            output_file: std::env::var("OUTPUT_FILE").unwrap_or(default.output_file),
            question_start: std::env::var("QUESTION_START").ok().and_then(|v| v.parse().ok()).unwrap_or(default.question_start),
            question_end: std::env::var("QUESTION_END").ok().and_then(|v| v.parse().ok()).unwrap_or(default.question_end),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            gemini_api_key: std::env::var("GOOGLE_API_KEY").unwrap_or(default.gemini_api_key),
            gemini_api_base_url: std::env::var("GEMINI_API_BASE_URL").unwrap_or(default.gemini_api_base_url),
            gemini_model: std::env::var("GEMINI_MODEL").unwrap_or(default.gemini_model),
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or(default.openai_api_key),
            openai_api_base_url: std::env::var("OPENAI_API_BASE_URL").unwrap_or(default.openai_api_base_url),
            openai_model: std::env::var("OPENAI_MODEL").unwrap_or(default.openai_model),
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").unwrap_or(default.anthropic_api_key),
            anthropic_api_base_url: std::env::var("ANTHROPIC_API_BASE_URL").unwrap_or(default.anthropic_api_base_url),
            claude_model: std::env::var("CLAUDE_MODEL").unwrap_or(default.claude_model),
        };
        config.validate()?;
        Ok(config)
    }

    /// 校验配置合法性
    fn validate(&self) -> Result<(), ConfigError> {
        if self.question_start > self.question_end {
            return Err(ConfigError::InvalidQuestionRange {
                start: self.question_start,
                end: self.question_end,
            });
        }
        Ok(())
    }

    /// 本次评测的目标题号列表（升序）
    pub fn target_question_ids(&self) -> Vec<u32> {
        (self.question_start..=self.question_end).collect()
    }
}
