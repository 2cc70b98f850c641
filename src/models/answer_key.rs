//! 标准答案
//!
//! MBE 样题官方答案，编译期静态表，运行中不可变

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// MBE 样题官方标准答案（题号 -> 正确选项字母）
static CORRECT_ANSWERS: phf::Map<u32, &'static str> = phf::phf_map! {
    1u32 => "B",
    2u32 => "C",
    3u32 => "D",
    4u32 => "A",
    5u32 => "B",
    6u32 => "A",
    7u32 => "C",
    8u32 => "D",
    9u32 => "A",
    10u32 => "B",
    11u32 => "C",
    12u32 => "A",
    13u32 => "B",
    14u32 => "B",
    15u32 => "C",
    16u32 => "A",
    17u32 => "D",
    18u32 => "D",
    19u32 => "B",
    20u32 => "C",
    21u32 => "B",
};

/// 标准答案映射（题号 -> 正确选项字母）
///
/// 内部使用 BTreeMap 保证按题号升序遍历
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey(BTreeMap<u32, String>);

impl AnswerKey {
    /// 官方标准答案
    pub fn official() -> Self {
        Self(
            CORRECT_ANSWERS
                .entries()
                .map(|(k, v)| (*k, v.to_string()))
                .collect(),
        )
    }

    /// 从给定条目构建答案映射（测试用）
    pub fn from_entries(entries: impl IntoIterator<Item = (u32, &'static str)>) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k, v.to_string()))
                .collect(),
        )
    }

    /// 查询某题的正确答案
    pub fn get(&self, question_number: u32) -> Option<&str> {
        self.0.get(&question_number).map(|s| s.as_str())
    }

    /// 按题号升序遍历
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// 答案总数（即评分分母）
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_official_key_has_21_entries() {
        let key = AnswerKey::official();
        assert_eq!(key.len(), 21);
        assert_eq!(key.get(1), Some("B"));
        assert_eq!(key.get(7), Some("C"));
        assert_eq!(key.get(21), Some("B"));
        assert_eq!(key.get(22), None);
    }

    #[test]
    fn test_iter_ascending_order() {
        let key = AnswerKey::official();
        let ids: Vec<u32> = key.iter().map(|(id, _)| id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
}
