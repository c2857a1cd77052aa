//! Plain-text rendering of the session for the terminal front-end.
//!
//! Display strings (localized risk labels, score verdicts) live here and
//! in the model helpers, never in the serialized report.

use ytaudit_models::{AuditReport, PreviewState, RiskLevel};

use crate::state::AppState;

const RULE: &str = "────────────────────────────────────────";

/// Full audit report, in the order the web view lays it out.
pub fn render_report(report: &AuditReport) -> String {
    let mut lines = Vec::new();

    if let Some(url) = &report.video_url {
        lines.push(format!("Video: {url}"));
    }
    if let Some(thumbnail) = &report.thumbnail_url {
        lines.push(format!("Ảnh xem trước: {thumbnail}"));
    }

    lines.push(RULE.to_string());
    lines.push(format!("Điểm kiếm tiền: {}/10", format_score(report.monetization_score)));
    lines.push(format!("Giá trị sáng tạo: {}/10", format_score(report.creative_value_score)));
    lines.push(String::new());
    lines.push(format!("\"{}\"", report.summary));

    lines.push(String::new());
    lines.push(risk_line("Rủi ro Nội dung lặp lại", report.reused_content_risk));
    lines.push(risk_line("Rủi ro Giọng đọc AI", report.ai_voice_risk));
    lines.push(risk_line("Rủi ro Hình ảnh lặp lại", report.visual_repetition_risk));

    if !report.checklist.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Chi Tiết Kiểm Định ({}/{} đạt)",
            report.passed_checks(),
            report.checklist.len()
        ));
        for check in &report.checklist {
            let mark = if check.passed { "✔" } else { "✘" };
            lines.push(format!("  {mark} {}: {}", check.item, check.comment));
        }
    }

    if !report.expert_recommendations.is_empty() {
        lines.push(String::new());
        lines.push("Chiến Lược Tối Ưu".to_string());
        for (idx, rec) in report.expert_recommendations.iter().enumerate() {
            lines.push(format!("  {}. {rec}", idx + 1));
        }
    }

    lines.push(String::new());
    lines.push(report.score_band().verdict_vi().to_string());

    let sources = report.sources();
    if !sources.is_empty() {
        lines.push(String::new());
        lines.push("Nguồn:".to_string());
        for source in sources {
            lines.push(format!("  - {} <{}>", source.title, source.uri));
        }
    }

    lines.join("\n")
}

/// Preview line for raw input, without any network call.
pub fn render_preview(input: &str) -> String {
    match PreviewState::classify(input) {
        PreviewState::Thumbnail(url) => format!("Ảnh xem trước: {url}"),
        PreviewState::Unavailable => "Link không thể xem trước. \
             Hệ thống vẫn sẽ cố gắng phân tích nội dung văn bản bạn đã nhập."
            .to_string(),
        PreviewState::Hidden => "Không có ảnh xem trước cho nội dung văn bản.".to_string(),
    }
}

/// Everything the session currently holds.
pub fn render_state(state: &AppState) -> String {
    let mut sections = Vec::new();

    if let Some(report) = &state.report {
        sections.push(render_report(report));
    }
    if let Some(comment) = &state.suggested_comment {
        if !comment.is_empty() {
            sections.push(format!("Bình luận gợi ý:\n{comment}"));
        }
    }
    if let Some(error) = &state.error {
        sections.push(format!("Lỗi: {error}"));
    }

    sections.join(&format!("\n{RULE}\n"))
}

fn risk_line(label: &str, level: RiskLevel) -> String {
    format!("{label:<26} {}", level.label_vi())
}

/// Whole numbers without a trailing `.0`.
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{score:.0}")
    } else {
        format!("{score:.1}")
    }
}
