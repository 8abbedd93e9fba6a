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
// Password strength evaluation

use std::fmt;
use serde::{Serialize, Serializer};

use crate::passgen::SPECIAL_CHARACTERS;

pub const MAX_SCORE: u8 = 4;
const STRONG_LENGTH: usize = 12;
const MIN_LENGTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    LongerPassword,
    IncludeLowercase,
    IncludeUppercase,
    IncludeNumbers,
    IncludeSpecial,
}

impl Suggestion {
    pub fn message(&self) -> &'static str {
        match self {
            Suggestion::LongerPassword => "Use a longer password (at least 8 characters)",
            Suggestion::IncludeLowercase => "Include lowercase letters",
            Suggestion::IncludeUppercase => "Include uppercase letters",
            Suggestion::IncludeNumbers => "Include numbers",
            Suggestion::IncludeSpecial => "Include special characters",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for Suggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// 安全评级
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    /// Kept for label compatibility. The current weights top out at 3, so
    /// no password reaches this tier.
    VeryStrong,
}

impl Strength {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => Strength::VeryWeak,
            1 => Strength::Weak,
            2 => Strength::Medium,
            3 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrengthAssessment {
    pub score: u8,
    pub suggestions: Vec<Suggestion>,
}

impl StrengthAssessment {
    pub fn strength(&self) -> Strength {
        Strength::from_score(self.score)
    }
}

pub fn is_special_char(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// Scores a password with a fixed-weight additive rubric.
///
/// Length earns 1 point at 12 characters or 0.5 at 8, and each of
/// lowercase, uppercase, digit and special character earns 0.5. The total
/// is truncated and capped at [`MAX_SCORE`]. Missing properties produce
/// suggestions in a fixed order: length, lowercase, uppercase, numbers,
/// special characters.
///
/// Lowercase, uppercase and digit checks are ASCII-only: `'é'` is not a
/// lowercase letter here and `'٣'` (Arabic-Indic three) is not a digit.
/// Length is counted in `char`s, not bytes.
///
/// An empty password is not an error: it scores 0 and receives all five
/// suggestions. Callers that want to show nothing for empty input should
/// check before calling.
pub fn evaluate_password_strength(password: &str) -> StrengthAssessment {
    let has_lowercase = password.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(is_special_char);

    // Points are tracked in halves.
    let mut half_points: u8 = 0;
    let mut suggestions = Vec::new();

    let length = password.chars().count();
    if length >= STRONG_LENGTH {
        half_points += 2;
    } else if length >= MIN_LENGTH {
        half_points += 1;
    } else {
        suggestions.push(Suggestion::LongerPassword);
    }

    let features = [
        (has_lowercase, Suggestion::IncludeLowercase),
        (has_uppercase, Suggestion::IncludeUppercase),
        (has_digit, Suggestion::IncludeNumbers),
        (has_special, Suggestion::IncludeSpecial),
    ];
    for (present, suggestion) in features {
        if present {
            half_points += 1;
        } else {
            suggestions.push(suggestion);
        }
    }

    let score = (half_points / 2).min(MAX_SCORE);
    log::debug!(
        "Evaluated password: length={}, score={}, suggestions={}",
        length,
        score,
        suggestions.len()
    );

    StrengthAssessment { score, suggestions }
}
