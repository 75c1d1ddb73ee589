//! Recorded answers and scoring shared by the quiz and the puzzle.

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::error::TutorialResult;
use crate::pager::Pager;

/// An item the learner can answer.
pub trait Gradable {
    /// The learner's answer for one item.
    type Answer: Clone + PartialEq + Debug;

    /// Whether `answer` is one of the choices this item offers.
    fn accepts(&self, answer: &Self::Answer) -> bool;

    /// Whether `answer` is the designated correct one.
    fn is_correct(&self, answer: &Self::Answer) -> bool;
}

/// Outcome of trying to record an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// The answer was stored.
    Recorded { correct: bool },
    /// The item already has an answer; nothing changed.
    AlreadyAnswered,
    /// The item index or answer is not valid; nothing changed.
    Rejected,
}

impl Submission {
    pub fn is_recorded(self) -> bool {
        matches!(self, Self::Recorded { .. })
    }
}

/// A pager over gradable items plus at most one answer per item.
#[derive(Debug, Clone)]
pub struct AnswerSheet<T: Gradable> {
    pager: Pager<T>,
    answers: BTreeMap<usize, T::Answer>,
}

impl<T: Gradable> AnswerSheet<T> {
    pub fn new(name: &'static str, items: Vec<T>) -> TutorialResult<Self> {
        Ok(Self {
            pager: Pager::new(name, items)?,
            answers: BTreeMap::new(),
        })
    }

    pub fn pager(&self) -> &Pager<T> {
        &self.pager
    }

    pub fn pager_mut(&mut self) -> &mut Pager<T> {
        &mut self.pager
    }

    /// Store `answer` for item `index` unless it already has one.
    pub fn record(&mut self, index: usize, answer: T::Answer) -> Submission {
        let Some(item) = self.pager.get(index) else {
            return Submission::Rejected;
        };
        if !item.accepts(&answer) {
            return Submission::Rejected;
        }
        if self.answers.contains_key(&index) {
            return Submission::AlreadyAnswered;
        }
        let correct = item.is_correct(&answer);
        self.answers.insert(index, answer);
        Submission::Recorded { correct }
    }

    pub fn answer(&self, index: usize) -> Option<&T::Answer> {
        self.answers.get(&index)
    }

    /// Whether item `index` has been answered correctly. `None` if unanswered.
    pub fn is_correct(&self, index: usize) -> Option<bool> {
        let answer = self.answers.get(&index)?;
        self.pager.get(index).map(|item| item.is_correct(answer))
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// True once every item has an answer.
    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.pager.len()
    }

    /// Number of recorded answers that match their item's correct answer.
    pub fn score(&self) -> usize {
        self.answers
            .iter()
            .filter(|&(index, answer)| {
                self.pager
                    .get(*index)
                    .is_some_and(|item| item.is_correct(answer))
            })
            .count()
    }

    /// Score as a rounded percentage of all items.
    pub fn percentage(&self) -> u32 {
        percentage(self.score(), self.pager.len())
    }

    /// Drop all answers and return to the first item.
    pub fn clear(&mut self) {
        self.answers.clear();
        self.pager.reset();
    }

    /// Replace the items, dropping all answers.
    pub fn replace(&mut self, name: &'static str, items: Vec<T>) -> TutorialResult<()> {
        self.pager.replace(name, items)?;
        self.answers.clear();
        Ok(())
    }
}

/// `score / total` as a percentage rounded half up.
pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (score as f64 * 100.0 / total as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Pick {
        options: usize,
        correct: usize,
    }

    impl Gradable for Pick {
        type Answer = usize;

        fn accepts(&self, answer: &usize) -> bool {
            *answer < self.options
        }

        fn is_correct(&self, answer: &usize) -> bool {
            *answer == self.correct
        }
    }

    fn sheet(correct: &[usize]) -> AnswerSheet<Pick> {
        let items = correct
            .iter()
            .map(|&correct| Pick { options: 4, correct })
            .collect();
        AnswerSheet::new("test", items).unwrap()
    }

    #[test]
    fn test_score_counts_matches() {
        let mut s = sheet(&[2, 1, 3]);
        assert_eq!(s.record(0, 2), Submission::Recorded { correct: true });
        assert_eq!(s.record(1, 1), Submission::Recorded { correct: true });
        assert_eq!(s.record(2, 0), Submission::Recorded { correct: false });
        assert_eq!(s.score(), 2);
        assert_eq!(s.percentage(), 67);
        assert!(s.is_complete());
    }

    #[test]
    fn test_second_answer_is_ignored() {
        let mut s = sheet(&[1]);
        s.record(0, 0);
        assert_eq!(s.record(0, 1), Submission::AlreadyAnswered);
        assert_eq!(s.answer(0), Some(&0));
        assert_eq!(s.score(), 0);
    }

    #[test]
    fn test_invalid_answers_rejected() {
        let mut s = sheet(&[1, 1]);
        assert_eq!(s.record(5, 1), Submission::Rejected);
        assert_eq!(s.record(0, 9), Submission::Rejected);
        assert_eq!(s.answered_count(), 0);
    }

    #[test]
    fn test_clear() {
        let mut s = sheet(&[0, 0]);
        s.record(0, 0);
        s.pager_mut().next();
        s.clear();
        assert_eq!(s.answered_count(), 0);
        assert_eq!(s.pager().cursor(), 0);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(5, 6), 83);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(6, 6), 100);
    }
}
