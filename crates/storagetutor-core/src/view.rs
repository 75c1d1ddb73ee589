//! View models: plain snapshots of widget state.
//!
//! A view model carries everything needed to draw a widget and nothing about
//! how it is drawn. The render crate turns these into markup.

use serde::Serialize;

use crate::classify::Performance;
use crate::pager::{Direction, Position};

/// Previous/next controls, position indicator and dot index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavView {
    pub position: Position,
    pub can_previous: bool,
    pub can_next: bool,
    /// Index of the active dot; one dot per item.
    pub active: usize,
}

/// A titled group of bullet points on a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactList {
    pub label: &'static str,
    pub values: Vec<&'static str>,
}

/// One card of a carousel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static str,
    pub facts: Vec<FactList>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselView {
    pub heading: &'static str,
    pub card: CardView,
    pub nav: NavView,
    /// Set while the slide animation for the last move is running.
    pub transition: Option<Direction>,
}

/// How a quiz choice should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChoiceState {
    /// Not yet answered.
    Open,
    /// The learner picked this and it is correct.
    Correct,
    /// The learner picked this and it is wrong.
    Incorrect,
    /// Not picked, but it is the correct answer.
    Revealed,
    /// Not picked and not correct, after answering.
    Locked,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoiceView {
    pub index: usize,
    pub text: &'static str,
    pub state: ChoiceState,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackView {
    pub correct: bool,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionView {
    pub position: Position,
    pub prompt: &'static str,
    pub choices: Vec<ChoiceView>,
    pub feedback: Option<FeedbackView>,
    pub can_previous: bool,
    pub can_advance: bool,
    /// True on the last question, where advancing finishes the quiz.
    pub finishes: bool,
}

/// One row of the post-quiz review.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewRow {
    pub prompt: &'static str,
    pub chosen: Option<&'static str>,
    pub correct: &'static str,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultView {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub performance: Performance,
    pub review: Vec<ReviewRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QuizView {
    Question(QuestionView),
    Result(ResultView),
}

/// A drop target in the matching game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotView {
    pub index: usize,
    pub prompt: &'static str,
    pub placed: Option<String>,
    /// `None` until a label is placed.
    pub correct: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PuzzleView {
    pub slots: Vec<SlotView>,
    pub labels: Vec<&'static str>,
    pub score: usize,
    pub answered: usize,
    pub total: usize,
    /// Present once every slot is filled.
    pub result: Option<ResultView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LessonView {
    pub title: &'static str,
    pub paragraphs: Vec<&'static str>,
    pub key_points: Vec<&'static str>,
}

/// Main content area for the active section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub id: &'static str,
    pub title: &'static str,
    /// Lesson text, or `None` for sections that host an interactive widget.
    pub lesson: Option<LessonView>,
    /// Container the hosted widget renders into, if any.
    pub widget_container: Option<&'static str>,
    pub nav: NavView,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarEntry {
    pub index: usize,
    pub title: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SidebarView {
    pub entries: Vec<SidebarEntry>,
    pub collapsed: bool,
    pub compact: bool,
}

/// Snapshot of any widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum WidgetView {
    Sidebar(SidebarView),
    Section(SectionView),
    Carousel(CarouselView),
    Quiz(QuizView),
    Puzzle(PuzzleView),
}
