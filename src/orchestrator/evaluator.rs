//! 评测编排器
//!
//! 管理一次评测的完整生命周期：
//! 加载题目 → 逐模型作答 → 评分 → 输出表格 → 写报告
//!
//! 各模型的调用相互隔离：单个模型整体失败只会记录一个空的
//! 作答结果，不影响其余模型的评测和评分

use std::collections::BTreeMap;

use anyhow::Result;
use tracing::{error, info, warn};

use crate::clients::{ClaudeClient, GeminiClient, OpenAiClient, ProviderAdapter};
use crate::config::Config;
use crate::models::answer_key::AnswerKey;
use crate::models::load_questions;
use crate::models::question::Question;
use crate::models::verdict::ProviderResponse;
use crate::orchestrator::PROVIDER_ORDER;
use crate::services::{score, EvalReport, ReportWriter};
use crate::utils::logging;

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 创建应用
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 运行一次完整评测
    pub async fn run(&self) -> Result<()> {
        let ids = self.config.target_question_ids();
        let questions = load_questions(&self.config.questions_file, &ids).await?;

        if questions.is_empty() {
            warn!("⚠️ 目标题号在题库文件中一个都不存在，程序结束");
            return Ok(());
        }

        logging::log_startup(questions.len(), &PROVIDER_ORDER);

        if self.config.verbose_logging {
            for q in &questions {
                info!(
                    "Q{} 题干: {}",
                    q.question_number,
                    logging::truncate_text(&q.question_stem, 80)
                );
            }
        }

        // 逐模型作答
        let adapters = build_adapters(&self.config);
        let responses = evaluate(&adapters, &questions).await;

        // 评分
        let key = AnswerKey::official();
        let summaries = score(&responses, &key);

        // 控制台三张表
        logging::log_response_grid(&ids, &key, &responses, &PROVIDER_ORDER);
        logging::log_accuracy_table(&summaries, &PROVIDER_ORDER);
        logging::log_detail_results(&summaries, &PROVIDER_ORDER);

        // 写报告
        let report = EvalReport::new(responses, key, summaries);
        ReportWriter::new(&self.config).write(&report).await?;

        logging::log_finish(&self.config.output_file);
        Ok(())
    }
}

/// 按固定顺序构建三个模型适配器
fn build_adapters(config: &Config) -> Vec<Box<dyn ProviderAdapter>> {
    vec![
        Box::new(GeminiClient::new(config)),
        Box::new(OpenAiClient::new(config)),
        Box::new(ClaudeClient::new(config)),
    ]
}

/// 按固定顺序依次调用各模型适配器
///
/// 每个适配器的调用彼此隔离：适配器返回 Err（如凭证缺失）时
/// 记录错误日志并登记空的作答结果，继续评测下一个模型
pub async fn evaluate(
    adapters: &[Box<dyn ProviderAdapter>],
    questions: &[Question],
) -> BTreeMap<String, ProviderResponse> {
    let mut all_responses = BTreeMap::new();

    for adapter in adapters {
        logging::log_provider_banner(adapter.name());

        let response = match adapter.answer(questions).await {
            Ok(response) => response,
            Err(e) => {
                error!("[{}] ❌ 模型调用失败: {}", adapter.name(), e);
                ProviderResponse::new()
            }
        };

        all_responses.insert(adapter.name().to_string(), response);
    }

    all_responses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdapterError;
    use crate::models::question::Choice;
    use async_trait::async_trait;

    fn sample_questions(count: u32) -> Vec<Question> {
        (1..=count)
            .map(|n| Question {
                question_number: n,
                question_text: format!("text {}", n),
                question_stem: format!("stem {}", n),
                choices: vec![
                    Choice {
                        label: "A".to_string(),
                        text: "a".to_string(),
                    },
                    Choice {
                        label: "B".to_string(),
                        text: "b".to_string(),
                    },
                ],
            })
            .collect()
    }

    /// 固定返回 "A" 的适配器
    struct AlwaysA;

    #[async_trait]
    impl ProviderAdapter for AlwaysA {
        fn name(&self) -> &'static str {
            "always_a"
        }
        fn preflight(&self) -> Result<(), AdapterError> {
            Ok(())
        }
        async fn ask_one(&self, _prompt: &str) -> Result<String, AdapterError> {
            Ok("A".to_string())
        }
    }

    /// 预检直接失败的适配器（凭证缺失）
    struct NoCredentials;

    #[async_trait]
    impl ProviderAdapter for NoCredentials {
        fn name(&self) -> &'static str {
            "no_credentials"
        }
        fn preflight(&self) -> Result<(), AdapterError> {
            Err(AdapterError::MissingApiKey {
                provider: "no_credentials",
                var_name: "NONE",
            })
        }
        async fn ask_one(&self, _prompt: &str) -> Result<String, AdapterError> {
            unreachable!("预检失败后不应发起请求")
        }
    }

    /// 前两题正常作答、之后每题都失败的适配器
    struct FailsAfterTwo {
        answered: std::sync::atomic::AtomicU32,
    }

    #[async_trait]
    impl ProviderAdapter for FailsAfterTwo {
        fn name(&self) -> &'static str {
            "fails_after_two"
        }
        fn preflight(&self) -> Result<(), AdapterError> {
            Ok(())
        }
        async fn ask_one(&self, _prompt: &str) -> Result<String, AdapterError> {
            use std::sync::atomic::Ordering;
            let n = self.answered.fetch_add(1, Ordering::SeqCst);
            if n < 2 {
                Ok("B".to_string())
            } else {
                Err(AdapterError::malformed("fails_after_two", "连接中断"))
            }
        }
    }

    #[tokio::test]
    async fn test_failed_provider_isolated() {
        let adapters: Vec<Box<dyn ProviderAdapter>> =
            vec![Box::new(NoCredentials), Box::new(AlwaysA)];
        let questions = sample_questions(3);

        let responses = evaluate(&adapters, &questions).await;

        // 失败的模型登记为空结果，另一个模型不受影响
        assert!(responses["no_credentials"].is_empty());
        assert_eq!(responses["always_a"].len(), 3);
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_collected_answers() {
        let adapters: Vec<Box<dyn ProviderAdapter>> = vec![
            Box::new(FailsAfterTwo {
                answered: std::sync::atomic::AtomicU32::new(0),
            }),
            Box::new(AlwaysA),
        ];
        let questions = sample_questions(5);

        let responses = evaluate(&adapters, &questions).await;

        // 中途开始失败的模型保留已收集的 2 个答案
        let partial = &responses["fails_after_two"];
        assert_eq!(partial.len(), 2);
        assert_eq!(partial.get(&1).map(|s| s.as_str()), Some("B"));
        assert_eq!(partial.get(&2).map(|s| s.as_str()), Some("B"));
        assert!(!partial.contains_key(&3));

        // 其余模型正常作答全部题目
        assert_eq!(responses["always_a"].len(), 5);
    }

    #[tokio::test]
    async fn test_partial_failure_scores_as_missing() {
        use crate::models::answer_key::AnswerKey;
        use crate::services::score_provider;

        let adapters: Vec<Box<dyn ProviderAdapter>> = vec![Box::new(FailsAfterTwo {
            answered: std::sync::atomic::AtomicU32::new(0),
        })];
        let questions = sample_questions(5);
        let responses = evaluate(&adapters, &questions).await;

        let key = AnswerKey::from_entries([(1, "B"), (2, "C"), (3, "D"), (4, "A"), (5, "B")]);
        let summary = score_provider(&responses["fails_after_two"], &key);

        // 2 个已收集答案 + 3 个 MISSING
        assert_eq!(summary.correct + summary.incorrect, 2);
        assert_eq!(summary.missing, 3);
    }
}
