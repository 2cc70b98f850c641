//! 结果报告写入服务 - 业务能力层
//!
//! 把原始作答、标准答案和评分对照打包成单个 JSON 报告文件

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::error::ReportError;
use crate::models::answer_key::AnswerKey;
use crate::models::verdict::{ProviderResponse, ScoreSummary};

/// 评测报告（与磁盘上的 JSON 结构一一对应）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalReport {
    /// 模型名 -> 题号 -> 返回的选项字母
    pub responses: BTreeMap<String, ProviderResponse>,
    /// 题号 -> 正确选项字母
    pub correct_answers: AnswerKey,
    /// 模型名 -> 评分汇总
    pub comparison: BTreeMap<String, ScoreSummary>,
}

impl EvalReport {
    /// 打包一次评测的全部产物
    pub fn new(
        responses: BTreeMap<String, ProviderResponse>,
        correct_answers: AnswerKey,
        comparison: BTreeMap<String, ScoreSummary>,
    ) -> Self {
        Self {
            responses,
            correct_answers,
            comparison,
        }
    }
}

/// 报告写入器
pub struct ReportWriter {
    output_file: String,
}

impl ReportWriter {
    /// 创建新的报告写入器
    pub fn new(config: &Config) -> Self {
        Self {
            output_file: config.output_file.clone(),
        }
    }

    /// 把报告以缩进 JSON 写入输出文件
    pub async fn write(&self, report: &EvalReport) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| ReportError::SerializeFailed { source: e })?;

        tokio::fs::write(&self.output_file, json)
            .await
            .map_err(|e| ReportError::WriteFailed {
                path: self.output_file.clone(),
                source: e,
            })?;

        info!("结果已保存至: {}", self.output_file);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::scorer::score;

    fn sample_report() -> EvalReport {
        let key = AnswerKey::from_entries([(1, "B"), (2, "C")]);
        let mut responses: BTreeMap<String, ProviderResponse> = BTreeMap::new();
        responses.insert(
            "gemini".to_string(),
            [(1, "B".to_string())].into_iter().collect(),
        );
        responses.insert("openai".to_string(), ProviderResponse::new());

        let comparison = score(&responses, &key);
        EvalReport::new(responses, key, comparison)
    }

    #[tokio::test]
    async fn test_report_round_trip() {
        let dir = tempfile::tempdir().expect("创建临时目录失败");
        let output = dir.path().join("results.json");

        let config = Config {
            output_file: output.to_str().unwrap().to_string(),
            ..Config::default()
        };

        let report = sample_report();
        ReportWriter::new(&config).write(&report).await.unwrap();

        let content = tokio::fs::read_to_string(&output).await.unwrap();
        let restored: EvalReport = serde_json::from_str(&content).unwrap();

        // 反序列化后计数与准确率字符串必须与内存中完全一致
        assert_eq!(restored, report);
        assert_eq!(restored.comparison["gemini"].accuracy, "1/2 (50.0%)");
        assert_eq!(restored.comparison["openai"].missing, 2);
    }

    #[test]
    fn test_report_json_top_level_shape() {
        let report = sample_report();
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("responses").is_some());
        assert!(value.get("correct_answers").is_some());
        assert!(value.get("comparison").is_some());
        // 判定结果以大写字符串序列化
        assert_eq!(
            value.pointer("/comparison/gemini/details/1/result"),
            Some(&serde_json::json!("CORRECT"))
        );
        assert_eq!(
            value.pointer("/comparison/openai/details/2/model"),
            Some(&serde_json::Value::Null)
        );
    }
}
