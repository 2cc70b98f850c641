//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 管理一次评测的生命周期和模型间的调用顺序。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (一次评测)
//!     ↓
//! clients::ProviderAdapter (单个模型，逐题作答)
//!     ↓
//! services (能力层：score / report)
//! ```
//!
//! ## 设计原则
//!
//! 1. **顺序固定**：模型按 `PROVIDER_ORDER` 依次评测，结果可复现
//! 2. **失败隔离**：单个模型失败不影响其余模型的评测和评分
//! 3. **无业务逻辑**：只做调度，评分和报告交给 services

pub mod evaluator;

pub use evaluator::{evaluate, App};

/// 模型评测与展示的固定顺序
pub const PROVIDER_ORDER: [&str; 3] = ["gemini", "openai", "claude"];
