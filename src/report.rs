//  ____  ____     __        __    __  __      _
// |  _ \|  _ \ __ \ \      / /__ |  \/  | ___| |_ ___ _ __
// | |_) | |_) / _` \ \/\ / / _ \| |\/| |/ _ \ __/ _ \ '__|
// |  _ <|  __/ (_| |\ V  V / (_) | |  | |  __/ ||  __/ |
// |_| \_\_|   \__,_| \_/\_/ \___/|_|  |_|\___|\__\___|_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2026-10-18
// Version : 0.1.0
// License : Mulan PSL v2
//
// Strength report rendering

use serde::Serialize;

use crate::strength::{StrengthAssessment, Suggestion, MAX_SCORE};

pub const BAR_WIDTH: usize = 10;

#[derive(Debug, Serialize)]
struct AssessmentReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
    score: u8,
    strength: &'static str,
    suggestions: &'a [Suggestion],
}

/// `[#####-----] 50%` for a score of 2.
pub fn progress_bar(score: u8) -> String {
    let score = score.min(MAX_SCORE) as usize;
    let filled = score * BAR_WIDTH / MAX_SCORE as usize;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        score * 100 / MAX_SCORE as usize
    )
}

pub fn render_assessment(assessment: &StrengthAssessment) -> String {
    let mut lines = vec![
        format!(
            "Password strength: {} (score: {}/{})",
            assessment.strength(),
            assessment.score,
            MAX_SCORE
        ),
        progress_bar(assessment.score),
    ];
    if !assessment.suggestions.is_empty() {
        lines.push("How to improve your password:".to_string());
        for suggestion in &assessment.suggestions {
            lines.push(format!("  • {}", suggestion));
        }
    }
    lines.join("\n")
}

/// JSON view of an assessment. The password is only included when given.
pub fn assessment_json(
    password: Option<&str>,
    assessment: &StrengthAssessment,
) -> Result<String, serde_json::Error> {
    let report = AssessmentReport {
        password,
        score: assessment.score,
        strength: assessment.strength().label(),
        suggestions: &assessment.suggestions,
    };
    serde_json::to_string_pretty(&report)
}
