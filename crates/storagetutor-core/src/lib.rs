//! StorageTutor Core Library
//!
//! Platform-agnostic state machines and content for the StorageTutor AWS
//! storage tutorial. Nothing in this crate knows how widgets are drawn; the
//! render crate turns [`view`] snapshots into markup.

pub mod action;
pub mod answers;
pub mod carousel;
pub mod catalog;
pub mod classify;
pub mod error;
pub mod layout;
pub mod pager;
pub mod puzzle;
pub mod quiz;
pub mod shuffle;
pub mod timing;
pub mod tutorial;
pub mod view;

pub use action::{Action, WidgetId};
pub use answers::{AnswerSheet, Gradable, Submission};
pub use carousel::{CardSource, Carousel};
pub use classify::{Performance, ScoreScale, Tier, classify};
pub use error::{TutorialError, TutorialResult};
pub use layout::{COMPACT_BREAKPOINT_PX, LayoutController};
pub use pager::{Direction, Pager, Position};
pub use puzzle::{PUZZLE_POOL_SIZE, PUZZLE_SUBSET_SIZE, Puzzle};
pub use quiz::{Quiz, QuizPhase};
pub use shuffle::{fisher_yates, shuffled_subset};
pub use timing::{Debouncer, OneShot};
pub use tutorial::{Tutorial, TutorialOptions};
pub use view::WidgetView;
