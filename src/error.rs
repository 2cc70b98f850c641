//! 错误类型定义
//!
//! 按领域拆分错误枚举，统一由 `AppError` 包装：
//! - `LoadError`: 题库文件加载错误（致命，查询任何模型之前中止）
//! - `AdapterError`: 模型 API 调用错误（由编排层按模型隔离恢复）
//! - `ConfigError`: 启动配置错误
//! - `ReportError`: 结果报告写入错误

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 题库文件加载错误
    #[error("加载错误: {0}")]
    Load(#[from] LoadError),
    /// 模型 API 调用错误
    #[error("适配器错误: {0}")]
    Adapter(#[from] AdapterError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 报告写入错误
    #[error("报告错误: {0}")]
    Report(#[from] ReportError),
    /// 其他错误（用于包装第三方库错误）
    #[error("错误: {0}")]
    Other(String),
}

/// 题库文件加载错误
#[derive(Debug, Error)]
pub enum LoadError {
    /// 文件不存在
    #[error("题库文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取题库文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析失败（包括缺少顶层 questions 数组的情况）
    #[error("题库文件 JSON 解析失败 ({path}): {source}")]
    JsonParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 模型 API 调用错误
#[derive(Debug, Error)]
pub enum AdapterError {
    /// API 密钥缺失
    #[error("模型 {provider} 的 API 密钥缺失 (环境变量: {var_name})")]
    MissingApiKey {
        provider: &'static str,
        var_name: &'static str,
    },
    /// 网络请求失败
    #[error("模型 {provider} 请求失败: {source}")]
    RequestFailed {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// API 返回错误状态码
    #[error("模型 {provider} 返回错误响应 (状态: {status}): {body}")]
    BadStatus {
        provider: &'static str,
        status: u16,
        body: String,
    },
    /// OpenAI SDK 调用失败
    #[error("模型 {provider} SDK 调用失败: {source}")]
    SdkFailed {
        provider: &'static str,
        #[source]
        source: async_openai::error::OpenAIError,
    },
    /// 结构化响应缺失或形状不符合预期
    #[error("模型 {provider} 返回的结构化数据不完整: {detail}")]
    MalformedResponse {
        provider: &'static str,
        detail: String,
    },
    /// 提取出的答案不在允许的选项字母表内
    #[error("模型 {provider} 返回了无效选项: {label}")]
    InvalidLabel {
        provider: &'static str,
        label: String,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 题号范围非法
    #[error("题号范围非法: 起始 {start} 大于 结束 {end}")]
    InvalidQuestionRange { start: u32, end: u32 },
}

/// 报告写入错误
#[derive(Debug, Error)]
pub enum ReportError {
    /// 序列化失败
    #[error("报告序列化失败: {source}")]
    SerializeFailed {
        #[source]
        source: serde_json::Error,
    },
    /// 写入文件失败
    #[error("写入报告文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AdapterError {
    /// 创建结构化数据缺失错误
    pub fn malformed(provider: &'static str, detail: impl Into<String>) -> Self {
        AdapterError::MalformedResponse {
            provider,
            detail: detail.into(),
        }
    }

    /// 创建无效选项错误
    pub fn invalid_label(provider: &'static str, label: impl Into<String>) -> Self {
        AdapterError::InvalidLabel {
            provider,
            label: label.into(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
