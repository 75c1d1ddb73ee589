//! The whole tutorial: sections plus the four interactive widgets.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::action::{Action, WidgetId};
use crate::answers::Submission;
use crate::carousel::{Carousel, nav_view};
use crate::catalog::{
    FORMATS, FileFormat, QUESTIONS, SCENARIOS, SECTIONS, SERVICES, Section, SectionKind, Service,
};
use crate::error::{TutorialError, TutorialResult};
use crate::layout::LayoutController;
use crate::pager::Pager;
use crate::puzzle::{PUZZLE_SUBSET_SIZE, Puzzle};
use crate::quiz::Quiz;
use crate::view::{LessonView, SectionView, SidebarEntry, SidebarView, WidgetView};

/// Setup knobs for a tutorial session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TutorialOptions {
    /// Scenarios drawn for the matching game.
    pub puzzle_subset: usize,
    /// Fixed shuffle seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Section id to open first.
    pub start_section: Option<String>,
}

impl Default for TutorialOptions {
    fn default() -> Self {
        Self {
            puzzle_subset: PUZZLE_SUBSET_SIZE,
            seed: None,
            start_section: None,
        }
    }
}

/// All widget state for one page session.
#[derive(Debug)]
pub struct Tutorial {
    sections: Pager<Section>,
    services: Carousel<Service>,
    formats: Carousel<FileFormat>,
    quiz: Quiz,
    puzzle: Puzzle,
    rng: StdRng,
    loading: bool,
}

impl Tutorial {
    /// Build every widget from the static catalog.
    ///
    /// Setup errors propagate; nothing is rendered yet.
    pub fn new(options: &TutorialOptions) -> TutorialResult<Self> {
        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut sections = Pager::new("sections", SECTIONS.to_vec())?;
        if let Some(id) = &options.start_section {
            let index = SECTIONS
                .iter()
                .position(|s| s.id == id.as_str())
                .ok_or_else(|| TutorialError::UnknownSection(id.clone()))?;
            sections.go_to(index);
        }
        let tutorial = Self {
            sections,
            services: Carousel::new("Service Analysis", SERVICES.to_vec())?,
            formats: Carousel::new("Format Analysis", FORMATS.to_vec())?,
            quiz: Quiz::new(QUESTIONS.to_vec())?,
            puzzle: Puzzle::new(SCENARIOS.to_vec(), options.puzzle_subset, &mut rng)?,
            rng,
            loading: true,
        };
        log::info!(
            "tutorial ready: {} sections, {} questions, {} puzzle scenarios",
            tutorial.sections.len(),
            tutorial.quiz.len(),
            tutorial.puzzle.len()
        );
        Ok(tutorial)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// End the loading phase. Returns true if it was still loading.
    pub fn finish_loading(&mut self) -> bool {
        std::mem::replace(&mut self.loading, false)
    }

    pub fn section(&self) -> &Section {
        self.sections.current()
    }

    pub fn section_index(&self) -> usize {
        self.sections.cursor()
    }

    pub fn services(&self) -> &Carousel<Service> {
        &self.services
    }

    pub fn formats(&self) -> &Carousel<FileFormat> {
        &self.formats
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// The interactive widget hosted by the current section, if any.
    pub fn active_widget(&self) -> Option<WidgetId> {
        if self.loading {
            return None;
        }
        match self.section().kind {
            SectionKind::Lesson(_) => None,
            SectionKind::ServiceAnalysis => Some(WidgetId::Services),
            SectionKind::FormatAnalysis => Some(WidgetId::Formats),
            SectionKind::Quiz => Some(WidgetId::Quiz),
            SectionKind::Puzzle => Some(WidgetId::Puzzle),
        }
    }

    /// Widgets whose containers are on the page right now, in render order.
    pub fn visible_widgets(&self) -> Vec<WidgetId> {
        let mut widgets = vec![WidgetId::Sidebar, WidgetId::Section];
        widgets.extend(self.active_widget());
        widgets
    }

    pub fn is_visible(&self, widget: WidgetId) -> bool {
        matches!(widget, WidgetId::Sidebar | WidgetId::Section)
            || self.active_widget() == Some(widget)
    }

    /// Apply `action` to `widget`. Returns the widgets that need re-rendering;
    /// empty when the action changed nothing.
    pub fn dispatch(
        &mut self,
        widget: WidgetId,
        action: &Action,
        layout: &mut LayoutController,
    ) -> Vec<WidgetId> {
        let changed = match (widget, action) {
            (WidgetId::Sidebar, Action::ToggleSidebar) => {
                layout.toggle_sidebar();
                vec![WidgetId::Sidebar]
            }
            (WidgetId::Sidebar, Action::OpenSection(index))
            | (WidgetId::Section, Action::GoTo(index)) => self.open_section(*index, layout),
            (WidgetId::Section, Action::Next) => {
                self.open_section(self.sections.cursor() + 1, layout)
            }
            (WidgetId::Section, Action::Previous) => match self.sections.cursor().checked_sub(1) {
                Some(index) => self.open_section(index, layout),
                None => Vec::new(),
            },
            (WidgetId::Services, action) => {
                changed_if(navigate(&mut self.services, action), WidgetId::Services)
            }
            (WidgetId::Formats, action) => {
                changed_if(navigate(&mut self.formats, action), WidgetId::Formats)
            }
            (WidgetId::Quiz, action) => changed_if(self.quiz_action(action), WidgetId::Quiz),
            (WidgetId::Puzzle, action) => changed_if(self.puzzle_action(action), WidgetId::Puzzle),
            _ => Vec::new(),
        };
        if changed.is_empty() {
            log::debug!("{:?}: '{}' changed nothing", widget, action);
        }
        changed
    }

    fn open_section(&mut self, index: usize, layout: &mut LayoutController) -> Vec<WidgetId> {
        if !self.sections.go_to(index) {
            return Vec::new();
        }
        layout.collapse_if_compact();
        log::info!("section: {}", self.section().id);
        self.visible_widgets()
    }

    fn quiz_action(&mut self, action: &Action) -> bool {
        match action {
            Action::Answer(choice) => self.quiz.answer(*choice).is_recorded(),
            Action::Advance | Action::Next => self.quiz.advance(),
            Action::Previous => self.quiz.previous(),
            Action::Restart => {
                self.quiz.restart();
                true
            }
            _ => false,
        }
    }

    fn puzzle_action(&mut self, action: &Action) -> bool {
        match action {
            Action::Match { item, label } => {
                matches!(self.puzzle.submit(*item, label), Submission::Recorded { .. })
            }
            Action::Restart => match self.puzzle.restart(&mut self.rng) {
                Ok(()) => true,
                Err(e) => {
                    log::error!("puzzle restart failed: {}", e);
                    false
                }
            },
            _ => false,
        }
    }

    /// Clear finished carousel animations. Returns the widgets that changed.
    pub fn settle(&mut self) -> Vec<WidgetId> {
        let mut changed = Vec::new();
        if self.services.settle() {
            changed.push(WidgetId::Services);
        }
        if self.formats.settle() {
            changed.push(WidgetId::Formats);
        }
        changed
    }

    /// Snapshot of one widget.
    pub fn view(&self, widget: WidgetId, layout: &LayoutController) -> WidgetView {
        match widget {
            WidgetId::Sidebar => WidgetView::Sidebar(self.sidebar_view(layout)),
            WidgetId::Section => WidgetView::Section(self.section_view()),
            WidgetId::Services => WidgetView::Carousel(self.services.view()),
            WidgetId::Formats => WidgetView::Carousel(self.formats.view()),
            WidgetId::Quiz => WidgetView::Quiz(self.quiz.view()),
            WidgetId::Puzzle => WidgetView::Puzzle(self.puzzle.view()),
        }
    }

    fn sidebar_view(&self, layout: &LayoutController) -> SidebarView {
        let entries = self
            .sections
            .items()
            .iter()
            .enumerate()
            .map(|(index, section)| SidebarEntry {
                index,
                title: section.title,
                active: index == self.sections.cursor(),
            })
            .collect();
        SidebarView {
            entries,
            collapsed: layout.sidebar_collapsed(),
            compact: layout.compact(),
        }
    }

    fn section_view(&self) -> SectionView {
        let section = self.section();
        let lesson = match section.kind {
            SectionKind::Lesson(lesson) => Some(LessonView {
                title: section.title,
                paragraphs: lesson.paragraphs.to_vec(),
                key_points: lesson.key_points.to_vec(),
            }),
            _ => None,
        };
        SectionView {
            id: section.id,
            title: section.title,
            lesson,
            widget_container: self.active_widget().map(WidgetId::container),
            nav: nav_view(&self.sections),
            loading: self.loading,
        }
    }
}

fn navigate<T: crate::carousel::CardSource>(carousel: &mut Carousel<T>, action: &Action) -> bool {
    match action {
        Action::Next => carousel.next(),
        Action::Previous => carousel.previous(),
        Action::GoTo(index) => carousel.go_to(*index),
        _ => false,
    }
}

fn changed_if(changed: bool, widget: WidgetId) -> Vec<WidgetId> {
    if changed { vec![widget] } else { Vec::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::QuizView;

    fn tutorial() -> Tutorial {
        let options = TutorialOptions {
            seed: Some(11),
            ..Default::default()
        };
        let mut t = Tutorial::new(&options).unwrap();
        t.finish_loading();
        t
    }

    fn section_index(id: &str) -> usize {
        SECTIONS.iter().position(|s| s.id == id).unwrap()
    }

    #[test]
    fn test_loading_hides_widgets() {
        let options = TutorialOptions {
            seed: Some(1),
            start_section: Some("quiz".to_string()),
            ..Default::default()
        };
        let mut t = Tutorial::new(&options).unwrap();
        assert!(t.is_loading());
        assert_eq!(t.visible_widgets(), vec![WidgetId::Sidebar, WidgetId::Section]);
        assert!(t.finish_loading());
        assert!(!t.finish_loading());
        assert_eq!(t.active_widget(), Some(WidgetId::Quiz));
    }

    #[test]
    fn test_unknown_start_section() {
        let options = TutorialOptions {
            start_section: Some("nowhere".to_string()),
            ..Default::default()
        };
        let err = Tutorial::new(&options).unwrap_err();
        assert_eq!(err, TutorialError::UnknownSection("nowhere".to_string()));
    }

    #[test]
    fn test_bad_puzzle_subset_propagates() {
        let options = TutorialOptions {
            puzzle_subset: 11,
            ..Default::default()
        };
        assert!(matches!(
            Tutorial::new(&options),
            Err(TutorialError::SubsetTooLarge { .. })
        ));
    }

    #[test]
    fn test_open_section_rerenders_hosted_widget() {
        let mut t = tutorial();
        let mut layout = LayoutController::default();
        let index = section_index("services");
        let changed = t.dispatch(WidgetId::Sidebar, &Action::OpenSection(index), &mut layout);
        assert_eq!(
            changed,
            vec![WidgetId::Sidebar, WidgetId::Section, WidgetId::Services]
        );
        assert!(t.is_visible(WidgetId::Services));
        assert!(!t.is_visible(WidgetId::Quiz));

        // Same section again is a no-op.
        let again = t.dispatch(WidgetId::Sidebar, &Action::OpenSection(index), &mut layout);
        assert!(again.is_empty());
    }

    #[test]
    fn test_section_paging_is_clamped() {
        let mut t = tutorial();
        let mut layout = LayoutController::default();
        assert!(t.dispatch(WidgetId::Section, &Action::Previous, &mut layout).is_empty());
        let out_of_range = Action::GoTo(SECTIONS.len());
        assert!(t.dispatch(WidgetId::Section, &out_of_range, &mut layout).is_empty());
        assert!(!t.dispatch(WidgetId::Section, &Action::Next, &mut layout).is_empty());
        assert_eq!(t.section_index(), 1);
    }

    #[test]
    fn test_toggle_sidebar() {
        let mut t = tutorial();
        let mut layout = LayoutController::default();
        let changed = t.dispatch(WidgetId::Sidebar, &Action::ToggleSidebar, &mut layout);
        assert_eq!(changed, vec![WidgetId::Sidebar]);
        assert!(layout.sidebar_collapsed());
        match t.view(WidgetId::Sidebar, &layout) {
            WidgetView::Sidebar(view) => assert!(view.collapsed),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_compact_layout_collapses_after_navigation() {
        let mut t = tutorial();
        let mut layout = LayoutController::new(500.0);
        layout.toggle_sidebar();
        t.dispatch(WidgetId::Sidebar, &Action::OpenSection(2), &mut layout);
        assert!(layout.sidebar_collapsed());
    }

    #[test]
    fn test_carousel_dispatch_and_settle() {
        let mut t = tutorial();
        let mut layout = LayoutController::default();
        assert!(t.dispatch(WidgetId::Services, &Action::Previous, &mut layout).is_empty());
        assert_eq!(
            t.dispatch(WidgetId::Services, &Action::Next, &mut layout),
            vec![WidgetId::Services]
        );
        assert_eq!(t.services().cursor(), 1);
        assert_eq!(t.settle(), vec![WidgetId::Services]);
        assert!(t.settle().is_empty());
    }

    #[test]
    fn test_quiz_flow_through_dispatch() {
        let mut t = tutorial();
        let mut layout = LayoutController::default();
        for question in QUESTIONS {
            let answer = Action::Answer(question.correct);
            let changed = t.dispatch(WidgetId::Quiz, &answer, &mut layout);
            assert_eq!(changed, vec![WidgetId::Quiz]);
            t.dispatch(WidgetId::Quiz, &Action::Advance, &mut layout);
        }
        assert_eq!(t.quiz().score(), QUESTIONS.len());
        assert!(matches!(
            t.view(WidgetId::Quiz, &layout),
            WidgetView::Quiz(QuizView::Result(_))
        ));
        t.dispatch(WidgetId::Quiz, &Action::Restart, &mut layout);
        assert_eq!(t.quiz().score(), 0);
    }

    #[test]
    fn test_puzzle_flow_through_dispatch() {
        let mut t = tutorial();
        let mut layout = LayoutController::default();
        let answer = t.puzzle().scenarios()[0].answer.to_string();
        let action = Action::Match {
            item: 0,
            label: answer.clone(),
        };
        assert_eq!(t.dispatch(WidgetId::Puzzle, &action, &mut layout), vec![WidgetId::Puzzle]);
        assert!(t.dispatch(WidgetId::Puzzle, &action, &mut layout).is_empty());
        assert_eq!(t.puzzle().score(), 1);

        t.dispatch(WidgetId::Puzzle, &Action::Restart, &mut layout);
        assert_eq!(t.puzzle().score(), 0);
    }

    #[test]
    fn test_mismatched_actions_are_ignored() {
        let mut t = tutorial();
        let mut layout = LayoutController::default();
        assert!(t.dispatch(WidgetId::Services, &Action::Answer(1), &mut layout).is_empty());
        assert!(t.dispatch(WidgetId::Quiz, &Action::GoTo(2), &mut layout).is_empty());
        assert!(t.dispatch(WidgetId::Section, &Action::ToggleSidebar, &mut layout).is_empty());
    }

    #[test]
    fn test_section_view_for_lesson_and_widget() {
        let mut t = tutorial();
        let mut layout = LayoutController::default();
        match t.view(WidgetId::Section, &layout) {
            WidgetView::Section(view) => {
                assert!(view.lesson.is_some());
                assert!(view.widget_container.is_none());
                assert!(!view.nav.can_previous);
            }
            other => panic!("unexpected view {other:?}"),
        }
        t.dispatch(
            WidgetId::Sidebar,
            &Action::OpenSection(section_index("puzzle")),
            &mut layout,
        );
        match t.view(WidgetId::Section, &layout) {
            WidgetView::Section(view) => {
                assert!(view.lesson.is_none());
                assert_eq!(view.widget_container, Some("puzzle-container"));
            }
            other => panic!("unexpected view {other:?}"),
        }
    }
}
