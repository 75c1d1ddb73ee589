//! User actions and the widgets they address.
//!
//! Actions have a compact string form so they can travel through markup
//! attributes and back:
//!
//! | action | string |
//! |---|---|
//! | `Next` | `next` |
//! | `Previous` | `prev` |
//! | `GoTo(3)` | `goto:3` |
//! | `Answer(2)` | `answer:2` |
//! | `Advance` | `advance` |
//! | `Restart` | `restart` |
//! | `Match { item: 4, label }` | `match:4:<label>` |
//! | `ToggleSidebar` | `toggle-sidebar` |
//! | `OpenSection(2)` | `section:2` |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TutorialError;

/// A widget that owns a container on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetId {
    Sidebar,
    Section,
    Services,
    Formats,
    Quiz,
    Puzzle,
}

impl WidgetId {
    pub const ALL: [WidgetId; 6] = [
        WidgetId::Sidebar,
        WidgetId::Section,
        WidgetId::Services,
        WidgetId::Formats,
        WidgetId::Quiz,
        WidgetId::Puzzle,
    ];

    /// Id of the container this widget renders into.
    pub fn container(self) -> &'static str {
        match self {
            WidgetId::Sidebar => "sidebar",
            WidgetId::Section => "main-content",
            WidgetId::Services => "service-carousel",
            WidgetId::Formats => "format-carousel",
            WidgetId::Quiz => "quiz-container",
            WidgetId::Puzzle => "puzzle-container",
        }
    }

    pub fn from_container(container: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.container() == container)
    }
}

/// A user intent addressed to one widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Next,
    Previous,
    GoTo(usize),
    Answer(usize),
    Advance,
    Restart,
    Match { item: usize, label: String },
    ToggleSidebar,
    OpenSection(usize),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Next => f.write_str("next"),
            Action::Previous => f.write_str("prev"),
            Action::GoTo(index) => write!(f, "goto:{}", index),
            Action::Answer(choice) => write!(f, "answer:{}", choice),
            Action::Advance => f.write_str("advance"),
            Action::Restart => f.write_str("restart"),
            Action::Match { item, label } => write!(f, "match:{}:{}", item, label),
            Action::ToggleSidebar => f.write_str("toggle-sidebar"),
            Action::OpenSection(index) => write!(f, "section:{}", index),
        }
    }
}

impl FromStr for Action {
    type Err = TutorialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TutorialError::InvalidAction(s.to_string());
        let index = |value: Option<&str>| -> Result<usize, TutorialError> {
            value
                .and_then(|v| v.trim().parse().ok())
                .ok_or_else(invalid)
        };

        let mut parts = s.trim().splitn(3, ':');
        let verb = parts.next().unwrap_or_default();
        let action = match verb {
            "next" => Action::Next,
            "prev" => Action::Previous,
            "advance" => Action::Advance,
            "restart" => Action::Restart,
            "toggle-sidebar" => Action::ToggleSidebar,
            "goto" => Action::GoTo(index(parts.next())?),
            "answer" => Action::Answer(index(parts.next())?),
            "section" => Action::OpenSection(index(parts.next())?),
            "match" => {
                let item = index(parts.next())?;
                let label = parts.next().filter(|l| !l.is_empty()).ok_or_else(invalid)?;
                Action::Match {
                    item,
                    label: label.to_string(),
                }
            }
            _ => return Err(invalid()),
        };
        // Only `match` may carry a third segment.
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_actions() {
        assert_eq!("next".parse::<Action>(), Ok(Action::Next));
        assert_eq!("prev".parse::<Action>(), Ok(Action::Previous));
        assert_eq!(" advance ".parse::<Action>(), Ok(Action::Advance));
        assert_eq!("goto:3".parse::<Action>(), Ok(Action::GoTo(3)));
        assert_eq!("section:0".parse::<Action>(), Ok(Action::OpenSection(0)));
    }

    #[test]
    fn test_match_label_keeps_spaces_and_colons() {
        let action: Action = "match:2:FSx for Lustre".parse().unwrap();
        assert_eq!(
            action,
            Action::Match {
                item: 2,
                label: "FSx for Lustre".to_string()
            }
        );
        let odd: Action = "match:0:a:b".parse().unwrap();
        assert_eq!(odd.to_string(), "match:0:a:b");
    }

    #[test]
    fn test_display_matches_parse() {
        let actions = [
            Action::Next,
            Action::Previous,
            Action::GoTo(7),
            Action::Answer(1),
            Action::Advance,
            Action::Restart,
            Action::Match {
                item: 5,
                label: "Amazon S3".to_string(),
            },
            Action::ToggleSidebar,
            Action::OpenSection(4),
        ];
        for action in actions {
            assert_eq!(action.to_string().parse::<Action>(), Ok(action));
        }
    }

    #[test]
    fn test_malformed_actions() {
        for bad in ["", "jump", "goto", "goto:x", "goto:-1", "answer:1:2", "match:1", "match:1:"] {
            assert!(
                matches!(bad.parse::<Action>(), Err(TutorialError::InvalidAction(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_container_lookup() {
        for widget in WidgetId::ALL {
            assert_eq!(WidgetId::from_container(widget.container()), Some(widget));
        }
        assert_eq!(WidgetId::from_container("nope"), None);
    }
}
