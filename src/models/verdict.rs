//! 评分结果数据结构

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 单个模型的作答结果（题号 -> 返回的选项字母）
///
/// 某题号缺失表示该模型未能给出可用答案（网络失败、结构化输出
/// 损坏、或整个调用中止）
pub type ProviderResponse = BTreeMap<u32, String>;

/// 单题判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerdictKind {
    /// 作答正确
    Correct,
    /// 作答错误
    Incorrect,
    /// 未作答
    Missing,
}

/// 单个（模型，题目）对的判定明细
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// 模型给出的答案（未作答为 null）
    pub model: Option<String>,
    /// 正确答案
    pub correct: String,
    /// 判定结果
    pub result: VerdictKind,
}

/// 单个模型的评分汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// 正确数
    pub correct: usize,
    /// 错误数
    pub incorrect: usize,
    /// 未作答数
    pub missing: usize,
    /// 准确率，形如 "18/21 (85.7%)"
    pub accuracy: String,
    /// 按题号升序的判定明细
    pub details: BTreeMap<u32, Verdict>,
}

impl ScoreSummary {
    /// 判定总数（应恒等于标准答案条目数）
    pub fn total(&self) -> usize {
        self.correct + self.incorrect + self.missing
    }
}
