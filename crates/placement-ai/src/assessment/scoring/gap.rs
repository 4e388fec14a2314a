use serde::Serialize;

/// Smallest difference still treated as a minor gap.
pub const MINOR_GAP_FLOOR: i64 = -10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GapSeverity {
    None,
    Minor,
    Major,
}

impl GapSeverity {
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "Meets requirement",
            Self::Minor => "Minor development need",
            Self::Major => "Significant development need",
        }
    }
}

pub fn classify_gap(difference: i64) -> GapSeverity {
    if difference >= 0 {
        GapSeverity::None
    } else if difference >= MINOR_GAP_FLOOR {
        GapSeverity::Minor
    } else {
        GapSeverity::Major
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GapAssessment {
    /// Widened so any pair of `i32` inputs has an exact difference.
    pub difference: i64,
    pub severity: GapSeverity,
}

impl GapAssessment {
    pub fn new(candidate_score: i32, requirement_level: i32) -> Self {
        let difference = i64::from(candidate_score) - i64::from(requirement_level);
        Self {
            difference,
            severity: classify_gap(difference),
        }
    }

    /// Signed difference as shown next to a gap bar: `+5`, `-10`, `0`.
    pub fn signed_label(&self) -> String {
        if self.difference > 0 {
            format!("+{}", self.difference)
        } else {
            self.difference.to_string()
        }
    }
}
