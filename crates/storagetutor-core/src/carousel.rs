//! Card carousels for service and format analysis.

use crate::catalog::{FileFormat, Service};
use crate::error::TutorialResult;
use crate::pager::{Direction, Pager};
use crate::view::{CardView, CarouselView, FactList, NavView};

/// Items that can be shown as a carousel card.
pub trait CardSource {
    fn card(&self) -> CardView;
}

impl CardSource for Service {
    fn card(&self) -> CardView {
        CardView {
            id: self.id,
            title: self.name,
            subtitle: self.category,
            body: self.summary,
            facts: vec![
                FactList {
                    label: "ML use cases",
                    values: self.ml_use_cases.to_vec(),
                },
                FactList {
                    label: "Strengths",
                    values: self.strengths.to_vec(),
                },
                FactList {
                    label: "Limitations",
                    values: self.limitations.to_vec(),
                },
            ],
        }
    }
}

impl CardSource for FileFormat {
    fn card(&self) -> CardView {
        CardView {
            id: self.id,
            title: self.name,
            subtitle: self.layout.name(),
            body: self.summary,
            facts: vec![
                FactList {
                    label: "Best for",
                    values: self.best_for.to_vec(),
                },
                FactList {
                    label: "SageMaker",
                    values: vec![self.sagemaker],
                },
            ],
        }
    }
}

/// A pager over cards that remembers the direction of its last move until
/// the slide animation settles.
#[derive(Debug, Clone)]
pub struct Carousel<T> {
    heading: &'static str,
    pager: Pager<T>,
    transition: Option<Direction>,
}

impl<T: CardSource> Carousel<T> {
    pub fn new(heading: &'static str, items: Vec<T>) -> TutorialResult<Self> {
        Ok(Self {
            heading,
            pager: Pager::new(heading, items)?,
            transition: None,
        })
    }

    pub fn pager(&self) -> &Pager<T> {
        &self.pager
    }

    pub fn cursor(&self) -> usize {
        self.pager.cursor()
    }

    /// Jump to `index`. Out-of-range requests are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        let from = self.pager.cursor();
        if !self.pager.go_to(index) {
            return false;
        }
        self.transition = Some(if index > from {
            Direction::Forward
        } else {
            Direction::Backward
        });
        true
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.pager.cursor() + 1)
    }

    pub fn previous(&mut self) -> bool {
        match self.pager.cursor().checked_sub(1) {
            Some(index) => self.go_to(index),
            None => false,
        }
    }

    /// Clear the animation flag. Returns true if one was set.
    pub fn settle(&mut self) -> bool {
        self.transition.take().is_some()
    }

    pub fn transition(&self) -> Option<Direction> {
        self.transition
    }

    pub fn view(&self) -> CarouselView {
        CarouselView {
            heading: self.heading,
            card: self.pager.current().card(),
            nav: nav_view(&self.pager),
            transition: self.transition,
        }
    }
}

/// Navigation controls for any pager.
pub fn nav_view<T>(pager: &Pager<T>) -> NavView {
    NavView {
        position: pager.position(),
        can_previous: !pager.is_first(),
        can_next: !pager.is_last(),
        active: pager.cursor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FORMATS, SERVICES};

    fn services() -> Carousel<Service> {
        Carousel::new("Service Analysis", SERVICES.to_vec()).unwrap()
    }

    #[test]
    fn test_previous_at_start_keeps_control_disabled() {
        let mut c = services();
        assert_eq!(c.pager().len(), 4);
        assert!(!c.previous());
        let view = c.view();
        assert_eq!(c.cursor(), 0);
        assert!(!view.nav.can_previous);
        assert!(view.nav.can_next);
        assert_eq!(view.nav.position.to_string(), "1 of 4");
    }

    #[test]
    fn test_next_disables_at_end() {
        let mut c = services();
        while c.next() {}
        let view = c.view();
        assert_eq!(c.cursor(), 3);
        assert!(!view.nav.can_next);
        assert_eq!(view.nav.position.to_string(), "4 of 4");
        assert_eq!(view.card.id, "fsx-lustre");
    }

    #[test]
    fn test_go_to_out_of_range() {
        let mut c = services();
        c.go_to(2);
        assert!(!c.go_to(4));
        assert_eq!(c.cursor(), 2);
    }

    #[test]
    fn test_transition_tracks_direction_until_settled() {
        let mut c = services();
        assert!(c.transition().is_none());
        c.go_to(3);
        assert_eq!(c.transition(), Some(Direction::Forward));
        c.previous();
        assert_eq!(c.transition(), Some(Direction::Backward));
        assert!(c.settle());
        assert!(!c.settle());
        assert!(c.view().transition.is_none());
    }

    #[test]
    fn test_format_cards() {
        let c = Carousel::new("Format Analysis", FORMATS.to_vec()).unwrap();
        let card = c.view().card;
        assert_eq!(card.title, "CSV");
        assert_eq!(card.subtitle, "Row-based");
        assert_eq!(card.facts.len(), 2);
    }
}
