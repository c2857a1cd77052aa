//! Monetization audit call.
//!
//! The audit is a schema-constrained `generateContent` call with Google
//! Search grounding. The response text must be JSON matching
//! [`audit_response_schema`]; citations are read from the grounding
//! metadata and attached as [`GroundingSource`]s.

use serde_json::{json, Value};
use tracing::{info, warn};
use ytaudit_models::{AuditReport, GroundingSource, RiskLevel};

use crate::client::{require_input, GeminiClient};
use crate::error::{GeminiError, GeminiResult};
use crate::wire::{GenerateContentRequest, GroundingChunk};

/// Title used for citations the service did not name.
pub const FALLBACK_SOURCE_TITLE: &str = "Nguồn tham khảo";

pub const SYSTEM_INSTRUCTION: &str = r#"
Bạn là một chuyên gia cao cấp về chính sách cộng đồng và kiếm tiền (Monetization) của YouTube.
Nhiệm vụ của bạn là thực hiện một cuộc "Kiểm định kiếm tiền" (Monetization Audit) chuyên sâu.

QUY TRÌNH XỬ LÝ:
1. Nếu đầu vào là một URL: Hãy sử dụng Google Search để tìm kiếm tiêu đề, mô tả, bình luận và các bài đánh giá về video này.
2. Nếu không thể truy cập trực tiếp nội dung video (do link riêng tư hoặc lỗi kỹ thuật), hãy dựa vào các thông tin tìm thấy trên web để đưa ra dự đoán chuyên môn NHƯNG phải ghi rõ trong phần tóm tắt. KHÔNG được chỉ trả về thông báo lỗi đơn thuần trừ khi hoàn toàn không có thông tin.
3. Nếu đầu vào là văn bản mô tả: Phân tích dựa trên các tiêu chí chính sách YouTube.

TIÊU CHÍ KIỂM ĐỊNH:
- "Nội dung lặp lại" (Reused Content): Video có giá trị gia tăng đáng kể không?
- Giọng đọc AI: Đánh giá xem có vi phạm lỗi "Nội dung lặp lại một cách máy móc" không.
- Hình ảnh lặp lại: Video có dùng ảnh tĩnh hoặc cảnh quay lặp đi lặp lại gây nhàm chán không?
- Giá trị giáo dục/giải trí: Có mang tính độc bản không?

Hãy trả về kết quả dưới dạng JSON cấu trúc chặt chẽ bằng TIẾNG VIỆT. Đánh giá khách quan, khắt khe.
"#;

/// User turn for an audit of `input`.
pub fn build_audit_prompt(input: &str) -> String {
    format!(
        "Thực hiện kiểm định kiếm tiền cho nội dung/link sau: {input}. \
         Nếu là link YouTube, hãy tìm kiếm thông tin chi tiết về nó trên Google trước khi kết luận."
    )
}

/// Response schema in the Gemini OpenAPI subset.
///
/// Covers every [`AuditReport`] field except the locally derived
/// `groundingSources`, `thumbnailUrl` and `videoUrl`.
pub fn audit_response_schema() -> Value {
    let risk_levels: Vec<&str> = RiskLevel::ALL.iter().map(RiskLevel::as_str).collect();
    let risk = json!({ "type": "STRING", "enum": risk_levels });

    json!({
        "type": "OBJECT",
        "properties": {
            "monetizationScore": { "type": "NUMBER", "description": "Điểm từ 0 đến 10" },
            "summary": { "type": "STRING", "description": "Tóm tắt ngắn gọn tình trạng" },
            "reusedContentRisk": risk,
            "aiVoiceRisk": risk,
            "visualRepetitionRisk": risk,
            "creativeValueScore": { "type": "NUMBER", "description": "Điểm từ 0 đến 10" },
            "checklist": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "item": { "type": "STRING" },
                        "passed": { "type": "BOOLEAN" },
                        "comment": { "type": "STRING" }
                    },
                    "required": ["item", "passed", "comment"]
                }
            },
            "expertRecommendations": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": [
            "monetizationScore",
            "summary",
            "reusedContentRisk",
            "aiVoiceRisk",
            "visualRepetitionRisk",
            "creativeValueScore",
            "checklist",
            "expertRecommendations"
        ]
    })
}

/// Map grounding chunks to citations.
///
/// Missing or empty titles fall back to [`FALLBACK_SOURCE_TITLE`]; chunks
/// without a usable URI are dropped. Order is kept and duplicates are not
/// removed.
pub(crate) fn grounding_sources(chunks: &[GroundingChunk]) -> Vec<GroundingSource> {
    chunks
        .iter()
        .filter_map(|chunk| {
            let web = chunk.web.as_ref()?;
            let uri = web.uri.as_deref().filter(|u| !u.is_empty())?;
            let title = web
                .title
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(FALLBACK_SOURCE_TITLE);

            Some(GroundingSource {
                title: title.to_string(),
                uri: uri.to_string(),
            })
        })
        .collect()
}

impl GeminiClient {
    /// Run one monetization audit for a URL or free-text description.
    ///
    /// The returned report carries grounding sources but not the locally
    /// derived thumbnail or input echo; callers attach those.
    pub async fn perform_audit(&self, input: &str) -> GeminiResult<AuditReport> {
        let input = require_input(input)?;
        info!(model = %self.model(), "Requesting monetization audit");

        let request = GenerateContentRequest::grounded(build_audit_prompt(input))
            .with_system_instruction(SYSTEM_INSTRUCTION)
            .with_json_schema(audit_response_schema());

        let response = self.generate(&request).await?;
        let text = response.text().ok_or(GeminiError::EmptyResponse)?;

        let mut report = AuditReport::from_model_json(&text)?;
        if !report.scores_in_range() {
            warn!(
                monetization_score = report.monetization_score,
                creative_value_score = report.creative_value_score,
                "Audit scores outside 0-10"
            );
        }

        report.grounding_sources = response.grounding_chunks().map(grounding_sources);

        info!(
            score = report.monetization_score,
            sources = report.sources().len(),
            "Audit completed"
        );
        Ok(report)
    }
}
