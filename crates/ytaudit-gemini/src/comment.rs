//! Promotional comment call.

use tracing::info;
use ytaudit_models::SuggestedComment;

use crate::client::{require_input, GeminiClient};
use crate::error::GeminiResult;
use crate::wire::GenerateContentRequest;

/// Prompt for a ~100-word Vietnamese fan comment about the video at `input`.
pub fn build_comment_prompt(input: &str) -> String {
    format!(
        r#"Hãy dùng Google Search để xác định chính xác video sau: {input}
Tìm tiêu đề thật, chủ đề chính và tên kênh của video trước khi viết.

Sau đó viết MỘT bình luận bằng TIẾNG VIỆT, khoảng 100 từ, để đăng dưới video:
- Nhắc tới nội dung cụ thể của video (chi tiết, khoảnh khắc hoặc kiến thức trong video), KHÔNG khen chung chung.
- Khen ngợi công sức, khâu dựng video và chuyên môn của tác giả.
- Dùng một vài biểu tượng cảm xúc (emoji) phù hợp để nhấn mạnh, không lạm dụng.
- Giọng văn hào hứng, như một người hâm mộ lâu năm của kênh.
- Kết thúc bằng lời kêu gọi mọi người chia sẻ và ủng hộ kênh.

Chỉ trả về nội dung bình luận, không thêm tiêu đề hay giải thích."#
    )
}

impl GeminiClient {
    /// Generate a promotional comment for a video or description.
    ///
    /// An empty string is returned when the service produced no text.
    pub async fn generate_comment(&self, input: &str) -> GeminiResult<SuggestedComment> {
        let input = require_input(input)?;
        info!(model = %self.model(), "Requesting suggested comment");

        let request = GenerateContentRequest::grounded(build_comment_prompt(input));
        let response = self.generate(&request).await?;

        let comment = SuggestedComment::new(response.text().unwrap_or_default());
        info!(words = comment.word_count(), "Comment generated");
        Ok(comment)
    }
}
