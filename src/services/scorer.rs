//! 评分服务 - 业务能力层
//!
//! 只负责"作答结果对照标准答案"的比较，不关心结果从哪来

use std::collections::BTreeMap;

use crate::models::answer_key::AnswerKey;
use crate::models::verdict::{ProviderResponse, ScoreSummary, Verdict, VerdictKind};

/// 对所有模型的作答结果评分
///
/// # 参数
/// - `responses`: 模型名 -> 作答结果
/// - `key`: 标准答案
///
/// # 返回
/// 模型名 -> 评分汇总
pub fn score(
    responses: &BTreeMap<String, ProviderResponse>,
    key: &AnswerKey,
) -> BTreeMap<String, ScoreSummary> {
    responses
        .iter()
        .map(|(provider, response)| (provider.clone(), score_provider(response, key)))
        .collect()
}

/// 对单个模型的作答结果评分
///
/// 遍历标准答案的每个条目（按题号升序）：
/// - 模型未作答 → MISSING
/// - 答案与标准答案逐字符相等 → CORRECT
/// - 否则 → INCORRECT
///
/// 分母恒为标准答案条目数，与模型实际作答数无关
pub fn score_provider(response: &ProviderResponse, key: &AnswerKey) -> ScoreSummary {
    let mut summary = ScoreSummary {
        correct: 0,
        incorrect: 0,
        missing: 0,
        accuracy: String::new(),
        details: BTreeMap::new(),
    };

    for (question_number, correct_answer) in key.iter() {
        let model_answer = response.get(&question_number);
        let result = match model_answer {
            None => {
                summary.missing += 1;
                VerdictKind::Missing
            }
            Some(answer) if answer == correct_answer => {
                summary.correct += 1;
                VerdictKind::Correct
            }
            Some(_) => {
                summary.incorrect += 1;
                VerdictKind::Incorrect
            }
        };

        summary.details.insert(
            question_number,
            Verdict {
                model: model_answer.cloned(),
                correct: correct_answer.to_string(),
                result,
            },
        );
    }

    summary.accuracy = format_accuracy(summary.correct, key.len());
    summary
}

/// 格式化准确率字符串，形如 "18/21 (85.7%)"
pub fn format_accuracy(correct: usize, total: usize) -> String {
    let pct = if total == 0 {
        0.0
    } else {
        100.0 * correct as f64 / total as f64
    };
    format!("{}/{} ({:.1}%)", correct, total, pct)
}
