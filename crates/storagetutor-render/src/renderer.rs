//! Surface trait abstraction.

use storagetutor_core::{WidgetId, WidgetView};
use thiserror::Error;

use crate::markup;

/// Renderer errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RendererError {
    #[error("Container not found: {0}")]
    MissingContainer(String),
    #[error("Failed to bind {event} on '{container}': {reason}")]
    Bind {
        container: String,
        event: &'static str,
        reason: String,
    },
    #[error("Template error: {0}")]
    Template(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Input events a container can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    DragStart,
    DragOver,
    Drop,
}

impl EventKind {
    /// DOM event name.
    pub fn name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::DragStart => "dragstart",
            EventKind::DragOver => "dragover",
            EventKind::Drop => "drop",
        }
    }
}

/// Events each widget's container listens for.
pub fn events_for(widget: WidgetId) -> &'static [EventKind] {
    match widget {
        WidgetId::Puzzle => &[
            EventKind::Click,
            EventKind::DragStart,
            EventKind::DragOver,
            EventKind::Drop,
        ],
        _ => &[EventKind::Click],
    }
}

/// Where widgets are drawn.
///
/// Implementations can target the browser DOM, an in-memory map for tests,
/// or anything else that can hold markup by container id.
pub trait Surface {
    /// Replace the markup of `container`.
    ///
    /// `children` are the ids of containers declared inside `markup`; any
    /// previous children of `container` are gone afterwards.
    fn set_content(
        &mut self,
        container: &str,
        markup: &str,
        children: &[&str],
    ) -> RenderResult<()>;

    /// Make sure `container` dispatches `events` to the application.
    ///
    /// Called after every render; implementations must not stack duplicate
    /// listeners on a container that is already bound.
    fn bind(&mut self, container: &str, events: &[EventKind]) -> RenderResult<()>;
}

/// Containers that `view` declares for other widgets.
pub fn child_containers(view: &WidgetView) -> Vec<&'static str> {
    match view {
        WidgetView::Section(section) if !section.loading => {
            section.widget_container.into_iter().collect()
        }
        _ => Vec::new(),
    }
}

/// Render `view` into the container of `widget` and bind its listeners.
///
/// A missing container is logged and the render is abandoned; it is never
/// propagated. Returns true if the widget was drawn.
pub fn render_widget<S: Surface + ?Sized>(
    surface: &mut S,
    widget: WidgetId,
    view: &WidgetView,
) -> bool {
    let container = widget.container();
    let html = match markup::render_view(view) {
        Ok(html) => html,
        Err(e) => {
            log::error!("Render of {:?} failed: {}", widget, e);
            return false;
        }
    };
    if let Err(e) = surface.set_content(container, &html, &child_containers(view)) {
        log::error!("Render of {:?} aborted: {}", widget, e);
        return false;
    }
    if let Err(e) = surface.bind(container, events_for(widget)) {
        log::error!("Listener setup for {:?} failed: {}", widget, e);
    }
    log::trace!("Rendered {:?} ({} bytes)", widget, html.len());
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemorySurface;
    use storagetutor_core::{LayoutController, Tutorial, TutorialOptions};

    #[test]
    fn test_render_widget_binds_events() {
        let tutorial = Tutorial::new(&TutorialOptions::default()).unwrap();
        let layout = LayoutController::default();
        let mut surface = MemorySurface::with_containers(&["sidebar"]);

        let view = tutorial.view(WidgetId::Sidebar, &layout);
        assert!(render_widget(&mut surface, WidgetId::Sidebar, &view));
        assert_eq!(surface.bindings("sidebar"), vec!["click"]);
        assert!(surface.content("sidebar").unwrap().contains("toggle-sidebar"));
    }

    #[test]
    fn test_missing_container_aborts_render() {
        let tutorial = Tutorial::new(&TutorialOptions::default()).unwrap();
        let layout = LayoutController::default();
        let mut surface = MemorySurface::new();

        let view = tutorial.view(WidgetId::Quiz, &layout);
        assert!(!render_widget(&mut surface, WidgetId::Quiz, &view));
        assert!(surface.bindings("quiz-container").is_empty());
    }

    #[test]
    fn test_child_containers_follow_active_section() {
        let options = TutorialOptions {
            start_section: Some("quiz".to_string()),
            ..Default::default()
        };
        let mut tutorial = Tutorial::new(&options).unwrap();
        let layout = LayoutController::default();
        let loading = tutorial.view(WidgetId::Section, &layout);
        assert!(child_containers(&loading).is_empty());

        tutorial.finish_loading();
        let ready = tutorial.view(WidgetId::Section, &layout);
        assert_eq!(child_containers(&ready), vec!["quiz-container"]);
        let sidebar = tutorial.view(WidgetId::Sidebar, &layout);
        assert!(child_containers(&sidebar).is_empty());
    }

    #[test]
    fn test_puzzle_listens_for_drag_and_drop() {
        let names: Vec<_> = events_for(WidgetId::Puzzle).iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["click", "dragstart", "dragover", "drop"]);
        assert_eq!(events_for(WidgetId::Services), &[EventKind::Click]);
    }
}
