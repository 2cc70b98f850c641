/// 日志工具模块
///
/// 提供 tracing 初始化、控制台表格输出和日志格式化的辅助函数
use std::collections::BTreeMap;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::models::answer_key::AnswerKey;
use crate::models::verdict::{ProviderResponse, ScoreSummary, VerdictKind};

/// 初始化日志
///
/// 默认 info 级别，可通过 RUST_LOG 环境变量覆盖
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

/// 记录程序启动信息
pub fn log_startup(total_questions: usize, providers: &[&str]) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - MBE 样题多模型评测");
    info!("📊 题目数: {} / 模型: {}", total_questions, providers.join(", "));
    info!("{}", "=".repeat(60));
}

/// 记录单个模型评测开始的分节横幅
pub fn log_provider_banner(provider: &str) {
    info!("{}", "=".repeat(50));
    info!("🤖 正在评测模型: {}...", provider);
    info!("{}", "=".repeat(50));
}

/// 输出作答对照表：每题一行，正确答案 + 各模型答案
///
/// # 参数
/// - `ids`: 目标题号列表（每题都会出现，缺失数据以 "-" 占位）
/// - `key`: 标准答案
/// - `responses`: 模型名 -> 作答结果
/// - `providers`: 模型列展示顺序
pub fn log_response_grid(
    ids: &[u32],
    key: &AnswerKey,
    responses: &BTreeMap<String, ProviderResponse>,
    providers: &[&str],
) {
    info!("{}", "=".repeat(60));
    info!("📋 作答对照表");
    info!("{}", "=".repeat(60));

    let mut header = format!("{:<10} {:<8}", "题号", "正确");
    for provider in providers {
        header.push_str(&format!(" {:<8}", provider));
    }
    info!("{}", header);
    info!("{}", "-".repeat(12 + 9 * providers.len()));

    for &qnum in ids {
        let correct = key.get(qnum).unwrap_or("-");
        let mut row = format!("Q{:<9} {:<8}", qnum, correct);
        for provider in providers {
            let answer = responses
                .get(*provider)
                .and_then(|r| r.get(&qnum))
                .map(|s| s.as_str())
                .unwrap_or("-");
            row.push_str(&format!(" {:<8}", answer));
        }
        info!("{}", row);
    }
}

/// 输出准确率汇总表
pub fn log_accuracy_table(summaries: &BTreeMap<String, ScoreSummary>, providers: &[&str]) {
    info!("{}", "=".repeat(60));
    info!("📊 准确率对比");
    info!("{}", "=".repeat(60));
    info!(
        "{:<10} {:<15} {:<8} {:<8} {:<8}",
        "模型", "准确率", "正确", "错误", "未答"
    );
    info!("{}", "-".repeat(55));

    for provider in providers {
        if let Some(summary) = summaries.get(*provider) {
            info!(
                "{:<10} {:<15} {:<8} {:<8} {:<8}",
                provider, summary.accuracy, summary.correct, summary.incorrect, summary.missing
            );
        }
    }
}

/// 输出每模型每题的判定明细
pub fn log_detail_results(summaries: &BTreeMap<String, ScoreSummary>, providers: &[&str]) {
    info!("{}", "=".repeat(60));
    info!("📒 详细判定结果");
    info!("{}", "=".repeat(60));

    for provider in providers {
        let Some(summary) = summaries.get(*provider) else {
            continue;
        };
        info!("{}:", provider.to_uppercase());
        for (qnum, verdict) in &summary.details {
            let mark = match verdict.result {
                VerdictKind::Correct => "✓",
                VerdictKind::Incorrect => "✗",
                VerdictKind::Missing => "?",
            };
            info!(
                "  Q{}: {} 模型={} | 正确={}",
                qnum,
                mark,
                verdict.model.as_deref().unwrap_or("-"),
                verdict.correct
            );
        }
    }
}

/// 输出最终完成信息
pub fn log_finish(output_file: &str) {
    info!("{}", "=".repeat(60));
    info!(
        "✅ 评测完成: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📄 结果已保存至: {}", output_file);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
