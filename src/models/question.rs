use serde::{Deserialize, Serialize};

/// 单个选项
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// 选项字母（A/B/C/D）
    pub label: String,
    /// 选项内容
    pub text: String,
}

/// 单道选择题
///
/// 从题库 JSON 文件反序列化得到，加载后不再修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// 题号（正整数，全卷唯一）
    pub question_number: u32,
    /// 题目背景材料
    pub question_text: String,
    /// 题干（提问部分）
    pub question_stem: String,
    /// 选项列表
    pub choices: Vec<Choice>,
}

impl Question {
    /// 拼接题面文本：材料 + 题干 + 逐行选项
    ///
    /// # 返回
    /// 形如：
    /// ```text
    /// {question_text}
    ///
    /// {question_stem}
    ///
    /// (A) 选项内容
    /// (B) 选项内容
    /// ```
    pub fn prompt_text(&self) -> String {
        let mut prompt = format!("{}\n\n{}\n\n", self.question_text, self.question_stem);
        for choice in &self.choices {
            prompt.push_str(&format!("({}) {}\n", choice.label, choice.text));
        }
        prompt
    }
}
