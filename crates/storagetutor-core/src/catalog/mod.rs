//! Static tutorial content.
//!
//! Everything here is compile-time data. Widgets copy the slices they need
//! into their own pagers at setup.

mod formats;
mod questions;
mod scenarios;
mod sections;
mod services;

pub use formats::FORMATS;
pub use questions::QUESTIONS;
pub use scenarios::{PUZZLE_LABELS, SCENARIOS};
pub use sections::SECTIONS;
pub use services::SERVICES;

use serde::Serialize;

/// An AWS storage service shown in the service analysis carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub ml_use_cases: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub limitations: &'static [&'static str],
}

/// How a file format lays out records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StorageLayout {
    Row,
    Columnar,
}

impl StorageLayout {
    pub fn name(self) -> &'static str {
        match self {
            StorageLayout::Row => "Row-based",
            StorageLayout::Columnar => "Columnar",
        }
    }
}

/// A data file format shown in the format analysis carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FileFormat {
    pub id: &'static str,
    pub name: &'static str,
    pub layout: StorageLayout,
    pub summary: &'static str,
    pub best_for: &'static [&'static str],
    pub sagemaker: &'static str,
}

/// A multiple-choice quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub choices: &'static [&'static str],
    /// Index into `choices`.
    pub correct: usize,
    pub explanation: &'static str,
}

/// A matching-game scenario: pick the service that fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub id: &'static str,
    pub prompt: &'static str,
    pub candidates: &'static [&'static str],
    /// Must be one of `candidates`.
    pub answer: &'static str,
}

/// A lesson page: prose plus key takeaways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Lesson {
    pub paragraphs: &'static [&'static str],
    pub key_points: &'static [&'static str],
}

/// What a section of the tutorial shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SectionKind {
    Lesson(Lesson),
    ServiceAnalysis,
    FormatAnalysis,
    Quiz,
    Puzzle,
}

/// A top-level tutorial section listed in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: SectionKind,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique(ids: impl Iterator<Item = &'static str>) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id), "duplicate id {id}");
        }
    }

    #[test]
    fn test_ids_are_unique() {
        assert_unique(SERVICES.iter().map(|s| s.id));
        assert_unique(FORMATS.iter().map(|f| f.id));
        assert_unique(QUESTIONS.iter().map(|q| q.id));
        assert_unique(SCENARIOS.iter().map(|s| s.id));
        assert_unique(SECTIONS.iter().map(|s| s.id));
    }

    #[test]
    fn test_questions_are_well_formed() {
        for q in QUESTIONS {
            assert!(q.correct < q.choices.len(), "{}", q.id);
        }
    }

    #[test]
    fn test_scenarios_are_well_formed() {
        assert_eq!(SCENARIOS.len(), 10);
        for s in SCENARIOS {
            assert!(s.candidates.contains(&s.answer), "{}", s.id);
        }
    }

    #[test]
    fn test_every_widget_has_a_section() {
        let kinds: Vec<_> = SECTIONS.iter().map(|s| s.kind).collect();
        assert!(kinds.contains(&SectionKind::ServiceAnalysis));
        assert!(kinds.contains(&SectionKind::FormatAnalysis));
        assert!(kinds.contains(&SectionKind::Quiz));
        assert!(kinds.contains(&SectionKind::Puzzle));
    }
}
