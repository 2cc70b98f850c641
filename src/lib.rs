//! # MBE Model Eval
//!
//! 用 MBE 样题评测多个模型 API 的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 题目、标准答案、判定结果等数据结构
//! - `models/loaders` - 题库 JSON 文件加载（按题号过滤 + 升序排序）
//!
//! ### ② 适配器层（Clients）
//! - `clients/` - 每个厂商一个结构化输出适配器
//! - `GeminiClient` - responseSchema 约束的 generateContent
//! - `OpenAiClient` - json_schema 约束的 chat completion
//! - `ClaudeClient` - 强制 submit_answer 工具调用
//!
//! ### ③ 业务能力层（Services）
//! - `services/scorer` - 作答结果对照标准答案评分
//! - `services/report_writer` - JSON 结果报告写入
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - 评测生命周期管理，模型按固定顺序依次
//!   作答，单个模型失败不影响其余模型

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use clients::{ClaudeClient, GeminiClient, OpenAiClient, ProviderAdapter};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnswerKey, Choice, ProviderResponse, Question, ScoreSummary, Verdict, VerdictKind};
pub use orchestrator::{evaluate, App, PROVIDER_ORDER};
pub use services::{score, EvalReport, ReportWriter};
