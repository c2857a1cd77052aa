//! Risk levels and score bands.

use serde::{Deserialize, Serialize};

/// Likelihood of a policy violation along one audit axis.
///
/// Ordered `Low < Medium < High < Critical`. Serialized with the
/// upper-case names used by the response schema; display labels live in
/// [`RiskLevel::label_vi`] and never reach the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    /// Wire name, as listed in the response schema enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }

    /// Vietnamese display label.
    pub fn label_vi(&self) -> &'static str {
        match self {
            RiskLevel::Low => "THẤP",
            RiskLevel::Medium => "TRUNG BÌNH",
            RiskLevel::High => "CAO",
            RiskLevel::Critical => "NGHIÊM TRỌNG",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse verdict for a 0-10 monetization score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 7 and above
    Good,
    /// 4 up to 7
    Caution,
    /// below 4
    Danger,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 7.0 {
            ScoreBand::Good
        } else if score >= 4.0 {
            ScoreBand::Caution
        } else {
            ScoreBand::Danger
        }
    }

    /// Vietnamese verdict shown under the recommendations.
    pub fn verdict_vi(&self) -> &'static str {
        match self {
            ScoreBand::Good => {
                "Kênh của bạn đang ở vị thế RẤT TỐT. Tiếp tục phát huy bản sắc riêng."
            }
            ScoreBand::Caution => {
                "CẦN THẬN TRỌNG. Các chỉ số đang ở mức ranh giới của chính sách YouTube."
            }
            ScoreBand::Danger => {
                "CẢNH BÁO CAO. Nội dung có nguy cơ bị gậy hoặc tắt kiếm tiền hàng loạt."
            }
        }
    }
}
