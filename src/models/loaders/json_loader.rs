//! 题库 JSON 文件加载器

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::LoadError;
use crate::models::question::Question;

/// 题库文件的顶层结构
#[derive(Debug, Deserialize)]
struct QuestionFile {
    questions: Vec<Question>,
}

/// 从题库 JSON 文件加载指定题号的题目
///
/// # 参数
/// - `path`: 题库文件路径
/// - `ids`: 目标题号集合
///
/// # 返回
/// 只包含题号在 `ids` 中的题目，按题号升序排列。
/// 请求了但文件中不存在的题号会被静默跳过。
pub async fn load_questions(path: &str, ids: &[u32]) -> Result<Vec<Question>, LoadError> {
    if !Path::new(path).exists() {
        return Err(LoadError::NotFound {
            path: path.to_string(),
        });
    }

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| LoadError::ReadFailed {
            path: path.to_string(),
            source: e,
        })?;

    let file: QuestionFile =
        serde_json::from_str(&content).map_err(|e| LoadError::JsonParseFailed {
            path: path.to_string(),
            source: e,
        })?;

    let mut questions: Vec<Question> = file
        .questions
        .into_iter()
        .filter(|q| ids.contains(&q.question_number))
        .collect();
    questions.sort_by_key(|q| q.question_number);

    info!(
        "成功加载 {} 个题目: {:?}",
        questions.len(),
        questions.iter().map(|q| q.question_number).collect::<Vec<_>>()
    );

    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_JSON: &str = r#"{
        "questions": [
            {
                "question_number": 18,
                "question_text": "text 18",
                "question_stem": "stem 18",
                "choices": [
                    {"label": "A", "text": "a"},
                    {"label": "B", "text": "b"},
                    {"label": "C", "text": "c"},
                    {"label": "D", "text": "d"}
                ]
            },
            {
                "question_number": 7,
                "question_text": "text 7",
                "question_stem": "stem 7",
                "choices": [
                    {"label": "A", "text": "a"},
                    {"label": "B", "text": "b"}
                ]
            },
            {
                "question_number": 11,
                "question_text": "text 11",
                "question_stem": "stem 11",
                "choices": [
                    {"label": "A", "text": "a"},
                    {"label": "B", "text": "b"}
                ]
            }
        ]
    }"#;

    fn write_temp_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("创建临时文件失败");
        file.write_all(content.as_bytes()).expect("写入临时文件失败");
        file
    }

    #[tokio::test]
    async fn test_filter_and_sort_ascending() {
        let file = write_temp_file(SAMPLE_JSON);
        let path = file.path().to_str().unwrap();

        // 请求顺序乱序，结果必须按题号升序
        let questions = load_questions(path, &[18, 7, 11]).await.unwrap();
        let ids: Vec<u32> = questions.iter().map(|q| q.question_number).collect();
        assert_eq!(ids, vec![7, 11, 18]);
    }

    #[tokio::test]
    async fn test_absent_ids_silently_omitted() {
        let file = write_temp_file(SAMPLE_JSON);
        let path = file.path().to_str().unwrap();

        let questions = load_questions(path, &[7, 99, 100]).await.unwrap();
        let ids: Vec<u32> = questions.iter().map(|q| q.question_number).collect();
        assert_eq!(ids, vec![7]);
    }

    #[tokio::test]
    async fn test_missing_file_fails() {
        let result = load_questions("/nonexistent/questions.json", &[1]).await;
        assert!(matches!(result, Err(LoadError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_malformed_json_fails() {
        let file = write_temp_file("{ not valid json");
        let path = file.path().to_str().unwrap();

        let result = load_questions(path, &[1]).await;
        assert!(matches!(result, Err(LoadError::JsonParseFailed { .. })));
    }

    #[tokio::test]
    async fn test_missing_questions_collection_fails() {
        let file = write_temp_file(r#"{"items": []}"#);
        let path = file.path().to_str().unwrap();

        let result = load_questions(path, &[1]).await;
        assert!(matches!(result, Err(LoadError::JsonParseFailed { .. })));
    }
}
