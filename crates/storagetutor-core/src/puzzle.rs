//! Drag-and-drop matching game.
//!
//! A shuffled subset of scenarios is drawn from a fixed pool. Each scenario
//! accepts exactly one label; the running score counts correct placements.

use rand::Rng;

use crate::answers::{AnswerSheet, Gradable, Submission};
use crate::catalog::Scenario;
use crate::classify::{ScoreScale, classify};
use crate::error::{TutorialError, TutorialResult};
use crate::shuffle::shuffled_subset;
use crate::view::{PuzzleView, ResultView, ReviewRow, SlotView};

/// Number of scenarios in the full pool.
pub const PUZZLE_POOL_SIZE: usize = 10;
/// Number of scenarios drawn per game.
pub const PUZZLE_SUBSET_SIZE: usize = 6;

const NAME: &str = "puzzle";

impl Gradable for Scenario {
    type Answer = String;

    fn accepts(&self, answer: &String) -> bool {
        self.candidates.iter().any(|candidate| *candidate == answer.as_str())
    }

    fn is_correct(&self, answer: &String) -> bool {
        answer.as_str() == self.answer
    }
}

#[derive(Debug, Clone)]
pub struct Puzzle {
    pool: Vec<Scenario>,
    subset_size: usize,
    sheet: AnswerSheet<Scenario>,
}

impl Puzzle {
    /// Shuffle `pool`, keep `subset_size` scenarios and set up the board.
    pub fn new<R: Rng + ?Sized>(
        pool: Vec<Scenario>,
        subset_size: usize,
        rng: &mut R,
    ) -> TutorialResult<Self> {
        if let Some(bad) = pool.iter().find(|s| !s.candidates.contains(&s.answer)) {
            return Err(TutorialError::InvalidContent {
                id: bad.id,
                reason: format!("answer '{}' is not a candidate label", bad.answer),
            });
        }
        let items = shuffled_subset(&pool, subset_size, rng)?;
        Ok(Self {
            sheet: AnswerSheet::new(NAME, items)?,
            pool,
            subset_size,
        })
    }

    /// Draw a fresh subset and clear the board.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) -> TutorialResult<()> {
        let items = shuffled_subset(&self.pool, self.subset_size, rng)?;
        self.sheet.replace(NAME, items)?;
        log::debug!("puzzle restarted with {} scenarios", self.subset_size);
        Ok(())
    }

    pub fn scenarios(&self) -> &[Scenario] {
        self.sheet.pager().items()
    }

    pub fn len(&self) -> usize {
        self.sheet.pager().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheet.pager().is_empty()
    }

    /// Place `label` on scenario `index`.
    ///
    /// Only the first placement per scenario counts; later ones are refused.
    pub fn submit(&mut self, index: usize, label: &str) -> Submission {
        let submission = self.sheet.record(index, label.to_string());
        match submission {
            Submission::Recorded { correct } => {
                log::debug!("puzzle: '{}' on slot {} (correct: {})", label, index, correct);
                if self.is_complete() {
                    log::info!(
                        "puzzle completed: {}/{} ({}%)",
                        self.score(),
                        self.len(),
                        self.sheet.percentage()
                    );
                }
            }
            Submission::AlreadyAnswered => {
                log::debug!("puzzle: slot {} already has a label", index);
            }
            Submission::Rejected => {
                log::warn!("puzzle: rejected '{}' for slot {}", label, index);
            }
        }
        submission
    }

    pub fn placed(&self, index: usize) -> Option<&str> {
        self.sheet.answer(index).map(String::as_str)
    }

    /// Running score.
    pub fn score(&self) -> usize {
        self.sheet.score()
    }

    pub fn percentage(&self) -> u32 {
        self.sheet.percentage()
    }

    pub fn is_complete(&self) -> bool {
        self.sheet.is_complete()
    }

    /// Union of the candidate labels of the current scenarios, in first-seen order.
    pub fn labels(&self) -> Vec<&'static str> {
        let mut labels: Vec<&'static str> = Vec::new();
        for scenario in self.scenarios() {
            for &label in scenario.candidates {
                if !labels.contains(&label) {
                    labels.push(label);
                }
            }
        }
        labels
    }

    pub fn view(&self) -> PuzzleView {
        let slots = self
            .scenarios()
            .iter()
            .enumerate()
            .map(|(index, scenario)| SlotView {
                index,
                prompt: scenario.prompt,
                placed: self.sheet.answer(index).cloned(),
                correct: self.sheet.is_correct(index),
            })
            .collect();
        PuzzleView {
            slots,
            labels: self.labels(),
            score: self.score(),
            answered: self.sheet.answered_count(),
            total: self.len(),
            result: self.is_complete().then(|| self.result_view()),
        }
    }

    fn result_view(&self) -> ResultView {
        let percentage = self.percentage();
        let review = self
            .scenarios()
            .iter()
            .enumerate()
            .map(|(index, scenario)| {
                let chosen = self.placed(index).and_then(|placed| {
                    scenario
                        .candidates
                        .iter()
                        .copied()
                        .find(|candidate| *candidate == placed)
                });
                ReviewRow {
                    prompt: scenario.prompt,
                    chosen,
                    correct: scenario.answer,
                    is_correct: self.sheet.is_correct(index).unwrap_or(false),
                }
            })
            .collect();
        ResultView {
            score: self.score(),
            total: self.len(),
            percentage,
            performance: classify(ScoreScale::Puzzle, percentage),
            review,
        }
    }
}
