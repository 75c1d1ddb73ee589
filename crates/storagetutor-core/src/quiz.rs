//! Scored sequential quiz.
//!
//! ```text
//! InProgress(0) --answer--> InProgress(0, answered) --advance--> InProgress(1) ...
//! InProgress(last, answered) --advance--> Completed { score }
//! Completed --restart--> InProgress(0)
//! ```

use crate::answers::{AnswerSheet, Gradable, Submission};
use crate::catalog::Question;
use crate::classify::{ScoreScale, classify};
use crate::error::{TutorialError, TutorialResult};
use crate::view::{
    ChoiceState, ChoiceView, FeedbackView, QuestionView, QuizView, ResultView, ReviewRow,
};

const NAME: &str = "quiz";

impl Gradable for Question {
    type Answer = usize;

    fn accepts(&self, answer: &usize) -> bool {
        *answer < self.choices.len()
    }

    fn is_correct(&self, answer: &usize) -> bool {
        *answer == self.correct
    }
}

/// Lifecycle of one quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    InProgress,
    Completed { score: usize },
}

#[derive(Debug, Clone)]
pub struct Quiz {
    sheet: AnswerSheet<Question>,
    phase: QuizPhase,
}

impl Quiz {
    /// Build a quiz, rejecting questions whose correct index has no choice.
    pub fn new(questions: Vec<Question>) -> TutorialResult<Self> {
        if let Some(bad) = questions.iter().find(|q| q.correct >= q.choices.len()) {
            return Err(TutorialError::InvalidContent {
                id: bad.id,
                reason: format!(
                    "correct choice {} but only {} choices",
                    bad.correct,
                    bad.choices.len()
                ),
            });
        }
        Ok(Self {
            sheet: AnswerSheet::new(NAME, questions)?,
            phase: QuizPhase::InProgress,
        })
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.phase, QuizPhase::Completed { .. })
    }

    pub fn cursor(&self) -> usize {
        self.sheet.pager().cursor()
    }

    pub fn len(&self) -> usize {
        self.sheet.pager().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheet.pager().is_empty()
    }

    /// The recorded choice for the current question, if any.
    pub fn selected(&self) -> Option<usize> {
        self.sheet.answer(self.cursor()).copied()
    }

    /// Record `choice` for the current question.
    ///
    /// Answers are locked once recorded; the score is not computed until
    /// the quiz completes.
    pub fn answer(&mut self, choice: usize) -> Submission {
        if self.is_completed() {
            return Submission::Rejected;
        }
        let submission = self.sheet.record(self.cursor(), choice);
        log::debug!(
            "quiz: question {} choice {} -> {:?}",
            self.cursor(),
            choice,
            submission
        );
        submission
    }

    /// Forward navigation is enabled once the current question is answered.
    pub fn can_advance(&self) -> bool {
        !self.is_completed() && self.selected().is_some()
    }

    pub fn can_go_back(&self) -> bool {
        !self.is_completed() && !self.sheet.pager().is_first()
    }

    /// Move to the next question, or complete the quiz from the last one.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        if self.sheet.pager_mut().next() {
            return true;
        }
        self.complete();
        true
    }

    /// Step back to the previous question; its recorded choice is kept.
    pub fn previous(&mut self) -> bool {
        if self.is_completed() {
            return false;
        }
        self.sheet.pager_mut().previous()
    }

    fn complete(&mut self) {
        let score = self.sheet.score();
        self.phase = QuizPhase::Completed { score };
        log::info!(
            "quiz completed: {}/{} ({}%)",
            score,
            self.len(),
            self.sheet.percentage()
        );
    }

    /// Clear all answers and start again from the first question.
    pub fn restart(&mut self) {
        self.sheet.clear();
        self.phase = QuizPhase::InProgress;
    }

    /// Final score once completed; 0 while a session is in progress.
    pub fn score(&self) -> usize {
        match self.phase {
            QuizPhase::Completed { score } => score,
            QuizPhase::InProgress => 0,
        }
    }

    pub fn percentage(&self) -> u32 {
        crate::answers::percentage(self.score(), self.len())
    }

    pub fn view(&self) -> QuizView {
        match self.phase {
            QuizPhase::InProgress => QuizView::Question(self.question_view()),
            QuizPhase::Completed { score } => QuizView::Result(self.result_view(score)),
        }
    }

    fn question_view(&self) -> QuestionView {
        let pager = self.sheet.pager();
        let question = pager.current();
        let selected = self.selected();
        let choices = question
            .choices
            .iter()
            .enumerate()
            .map(|(index, &text)| ChoiceView {
                index,
                text,
                state: choice_state(question, selected, index),
            })
            .collect();
        // Feedback follows the recorded answer, so it reappears on revisit.
        let feedback = selected.map(|choice| FeedbackView {
            correct: question.is_correct(&choice),
            explanation: question.explanation,
        });
        QuestionView {
            position: pager.position(),
            prompt: question.prompt,
            choices,
            feedback,
            can_previous: self.can_go_back(),
            can_advance: self.can_advance(),
            finishes: pager.is_last(),
        }
    }

    fn result_view(&self, score: usize) -> ResultView {
        let total = self.len();
        let percentage = crate::answers::percentage(score, total);
        let review = self
            .sheet
            .pager()
            .items()
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let chosen = self.sheet.answer(index).copied();
                ReviewRow {
                    prompt: question.prompt,
                    chosen: chosen.and_then(|c| question.choices.get(c).copied()),
                    correct: question.choices[question.correct],
                    is_correct: chosen.is_some_and(|c| question.is_correct(&c)),
                }
            })
            .collect();
        ResultView {
            score,
            total,
            percentage,
            performance: classify(ScoreScale::Quiz, percentage),
            review,
        }
    }
}

fn choice_state(question: &Question, selected: Option<usize>, index: usize) -> ChoiceState {
    match selected {
        None => ChoiceState::Open,
        Some(choice) if choice == index => {
            if question.is_correct(&choice) {
                ChoiceState::Correct
            } else {
                ChoiceState::Incorrect
            }
        }
        Some(_) if index == question.correct => ChoiceState::Revealed,
        Some(_) => ChoiceState::Locked,
    }
}
