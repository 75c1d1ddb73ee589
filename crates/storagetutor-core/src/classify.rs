//! Performance tiers for result screens.
//!
//! The quiz and the puzzle use different cut-points and labels. Both tables
//! are kept as they are; neither is derived from the other.

use serde::Serialize;

/// Coarse performance bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl Tier {
    /// Stable lowercase name, used for styling hooks.
    pub fn name(self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Fair => "fair",
            Tier::NeedsWork => "needs-work",
        }
    }
}

/// A classified result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Performance {
    pub label: &'static str,
    pub tier: Tier,
}

/// Which threshold table to classify against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreScale {
    Quiz,
    Puzzle,
}

const QUIZ_TABLE: [(u32, Performance); 3] = [
    (
        90,
        Performance {
            label: "Excellent! You're ready for the exam.",
            tier: Tier::Excellent,
        },
    ),
    (
        80,
        Performance {
            label: "Great job! Review the questions you missed.",
            tier: Tier::Good,
        },
    ),
    (
        70,
        Performance {
            label: "Good effort. Revisit the storage lessons.",
            tier: Tier::Fair,
        },
    ),
];
const QUIZ_FLOOR: Performance = Performance {
    label: "Keep studying. Work through the lessons again.",
    tier: Tier::NeedsWork,
};

const PUZZLE_TABLE: [(u32, Performance); 3] = [
    (
        90,
        Performance {
            label: "Storage expert!",
            tier: Tier::Excellent,
        },
    ),
    (
        70,
        Performance {
            label: "Solid matching skills.",
            tier: Tier::Good,
        },
    ),
    (
        50,
        Performance {
            label: "Getting there.",
            tier: Tier::Fair,
        },
    ),
];
const PUZZLE_FLOOR: Performance = Performance {
    label: "Review the service analysis cards and try again.",
    tier: Tier::NeedsWork,
};

/// Classify a percentage (0..=100) on the given scale.
pub fn classify(scale: ScoreScale, percentage: u32) -> Performance {
    let (table, floor) = match scale {
        ScoreScale::Quiz => (&QUIZ_TABLE, QUIZ_FLOOR),
        ScoreScale::Puzzle => (&PUZZLE_TABLE, PUZZLE_FLOOR),
    };
    table
        .iter()
        .find(|(threshold, _)| percentage >= *threshold)
        .map(|(_, performance)| *performance)
        .unwrap_or(floor)
}
