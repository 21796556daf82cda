//! SMART quality scoring for strategic objectives.
//!
//! Two formulas coexist on purpose: [`validate`] is the five-criteria check
//! shown next to an objective on the map, [`validate_draft`] is the quicker
//! score shown while the objective form is being filled in. They weigh
//! things differently and screens rely on each, so they are not unified.

use serde::{Deserialize, Serialize};

/// Action verbs an objective title must open with to read as specific.
pub const ACTION_VERBS: [&str; 7] = [
    "Aumentar",
    "Reduzir",
    "Manter",
    "Otimizar",
    "Melhorar",
    "Implantar",
    "Garantir",
];

/// Verbs the draft score looks for anywhere in the title.
pub const DRAFT_ACTION_VERBS: [&str; 4] = ["Aumentar", "Reduzir", "Manter", "Otimizar"];

const MIN_TITLE_CHARS: usize = 10;
const MIN_DESCRIPTION_CHARS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmartCriterion {
    Specific,
    Measurable,
    Attainable,
    Relevant,
    TimeBound,
}

impl SmartCriterion {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Specific,
            Self::Measurable,
            Self::Attainable,
            Self::Relevant,
            Self::TimeBound,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Specific => "Specific",
            Self::Measurable => "Measurable",
            Self::Attainable => "Attainable",
            Self::Relevant => "Relevant",
            Self::TimeBound => "Time-bound",
        }
    }

    pub const fn tip(self) -> &'static str {
        match self {
            Self::Specific => "Start with an action verb such as Aumentar, Reduzir or Otimizar.",
            Self::Measurable => "Link at least one performance indicator.",
            Self::Attainable => "Describe in the description how it will be achieved.",
            Self::Relevant => "It must contribute to the long-term vision.",
            Self::TimeBound => "Set deadlines in the multi-year plan.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartCheck {
    pub id: SmartCriterion,
    pub label: String,
    pub valid: bool,
    pub tip: String,
}

/// Display tier for a SMART score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmartBand {
    Excellent,
    Medium,
    Weak,
}

impl SmartBand {
    pub fn for_score(score: u8) -> Self {
        if score == 100 {
            Self::Excellent
        } else if score >= 60 {
            Self::Medium
        } else {
            Self::Weak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Medium => "Medium",
            Self::Weak => "Weak",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartAssessment {
    pub checks: Vec<SmartCheck>,
    /// `0..=100`, in steps of 20.
    pub score: u8,
}

impl SmartAssessment {
    pub fn band(&self) -> SmartBand {
        SmartBand::for_score(self.score)
    }

    pub fn failing(&self) -> impl Iterator<Item = &SmartCheck> {
        self.checks.iter().filter(|check| !check.valid)
    }
}

/// Scores an objective against the five SMART criteria, 20 points each.
pub fn validate(
    title: &str,
    description: &str,
    has_indicators: bool,
    has_deadline: bool,
) -> SmartAssessment {
    let checks: Vec<SmartCheck> = SmartCriterion::ordered()
        .into_iter()
        .map(|criterion| {
            let valid = match criterion {
                SmartCriterion::Specific => {
                    char_len(title) > MIN_TITLE_CHARS && starts_with_action_verb(title)
                }
                SmartCriterion::Measurable => has_indicators,
                SmartCriterion::Attainable => char_len(description) > MIN_DESCRIPTION_CHARS,
                // Anything admitted to the map is taken as aligned.
                SmartCriterion::Relevant => true,
                SmartCriterion::TimeBound => has_deadline,
            };
            SmartCheck {
                id: criterion,
                label: criterion.label().to_string(),
                valid,
                tip: criterion.tip().to_string(),
            }
        })
        .collect();

    let passed = checks.iter().filter(|check| check.valid).count();
    let score = ((passed as f64 / checks.len() as f64) * 100.0).round() as u8;

    SmartAssessment { checks, score }
}

/// Draft-time score: title length 20, action verb 20, description length 20,
/// and a flat 40 for any description at all.
pub fn validate_draft(title: &str, description: &str) -> u8 {
    let mut score = 0;
    if char_len(title) > MIN_TITLE_CHARS {
        score += 20;
    }
    if contains_draft_verb(title) {
        score += 20;
    }
    if char_len(description) > MIN_DESCRIPTION_CHARS {
        score += 20;
    }
    if !description.is_empty() {
        score += 40;
    }
    score
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn starts_with_action_verb(title: &str) -> bool {
    ACTION_VERBS.iter().any(|verb| {
        title
            .get(..verb.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(verb))
    })
}

fn contains_draft_verb(title: &str) -> bool {
    let lowered = title.to_lowercase();
    DRAFT_ACTION_VERBS
        .iter()
        .any(|verb| lowered.contains(&verb.to_lowercase()))
}
