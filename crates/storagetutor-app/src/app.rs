//! Application controller: routes input to the tutorial and redraws.

use storagetutor_core::timing::{Debouncer, Instant, OneShot};
use storagetutor_core::{Action, LayoutController, Tutorial, WidgetId};
use storagetutor_render::{Surface, render_widget};

use crate::config::AppConfig;
use crate::error::AppResult;

/// Main application struct.
///
/// Owns the tutorial state, the layout controller and the surface it draws
/// on. Everything runs on the caller's thread; the host forwards input and
/// wakes [`App::poll_timers`] when a deadline may have passed.
pub struct App<S: Surface> {
    config: AppConfig,
    tutorial: Tutorial,
    layout: LayoutController,
    surface: S,
    resize: Debouncer,
    pending_width: Option<f64>,
    loading: Option<OneShot>,
    animation: Option<OneShot>,
}

impl<S: Surface> App<S> {
    /// Build the tutorial and draw the loading state.
    ///
    /// Content errors propagate; a missing container does not.
    pub fn new(config: AppConfig, surface: S, now: Instant) -> AppResult<Self> {
        let tutorial = Tutorial::new(&config.to_options())?;
        let layout = LayoutController::new(config.initial_width);
        let mut app = Self {
            resize: Debouncer::new(config.resize_debounce()),
            loading: Some(OneShot::after(now, config.loading_delay())),
            animation: None,
            pending_width: None,
            config,
            tutorial,
            layout,
            surface,
        };
        app.render_visible();
        Ok(app)
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn tutorial(&self) -> &Tutorial {
        &self.tutorial
    }

    pub fn layout(&self) -> &LayoutController {
        &self.layout
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Handle a raw `data-action` string from `container`.
    ///
    /// Malformed input and unknown containers are logged and ignored.
    /// Returns true if anything was redrawn.
    pub fn on_action(&mut self, container: &str, raw: &str, now: Instant) -> bool {
        let Some(widget) = WidgetId::from_container(container) else {
            log::warn!("action '{}' from unknown container '{}'", raw, container);
            return false;
        };
        match raw.parse::<Action>() {
            Ok(action) => self.dispatch(widget, &action, now),
            Err(e) => {
                log::warn!("{}", e);
                false
            }
        }
    }

    /// Apply a typed action. Returns true if anything was redrawn.
    pub fn dispatch(&mut self, widget: WidgetId, action: &Action, now: Instant) -> bool {
        if !self.tutorial.is_visible(widget) {
            log::debug!("{:?} is not on the page; ignoring '{}'", widget, action);
            return false;
        }
        let changed = self.tutorial.dispatch(widget, action, &mut self.layout);
        if changed.is_empty() {
            return false;
        }
        if changed
            .iter()
            .any(|w| matches!(w, WidgetId::Services | WidgetId::Formats))
        {
            self.animation = Some(OneShot::after(now, self.config.animation()));
        }
        self.render(&changed) > 0
    }

    /// Record a viewport width; layout is re-applied once resizing settles.
    pub fn on_resize(&mut self, width: f64, now: Instant) {
        self.pending_width = Some(width);
        self.resize.trigger(now);
    }

    /// Fire every timer whose deadline has passed.
    pub fn poll_timers(&mut self, now: Instant) {
        if self.loading.is_some_and(|t| t.is_due(now)) {
            self.finish_loading();
        }
        if self.animation.is_some_and(|t| t.is_due(now)) {
            self.settle();
        }
        if self.resize.poll(now) {
            self.apply_pending_width();
        }
    }

    /// End the loading delay and draw the first real content.
    pub fn finish_loading(&mut self) {
        self.loading = None;
        if self.tutorial.finish_loading() {
            log::info!("loading finished");
            self.render_visible();
        }
    }

    /// Clear carousel slide classes.
    pub fn settle(&mut self) {
        self.animation = None;
        let changed = self.tutorial.settle();
        self.render(&changed);
    }

    /// Apply a pending resize now.
    pub fn flush_resize(&mut self) {
        if self.resize.flush() {
            self.apply_pending_width();
        }
    }

    fn apply_pending_width(&mut self) {
        let Some(width) = self.pending_width.take() else {
            return;
        };
        if self.layout.apply_width(width) {
            self.render(&[WidgetId::Sidebar]);
        }
    }

    /// Redraw every widget currently on the page.
    pub fn render_visible(&mut self) -> usize {
        let widgets = self.tutorial.visible_widgets();
        self.render(&widgets)
    }

    /// Redraw `widgets` that are on the page. Returns how many were drawn.
    fn render(&mut self, widgets: &[WidgetId]) -> usize {
        let mut drawn = 0;
        for &widget in widgets {
            if !self.tutorial.is_visible(widget) {
                continue;
            }
            let view = self.tutorial.view(widget, &self.layout);
            if render_widget(&mut self.surface, widget, &view) {
                drawn += 1;
            }
        }
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storagetutor_core::timing::Duration;
    use storagetutor_core::{QuizPhase, catalog::SECTIONS};
    use storagetutor_render::MemorySurface;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn surface() -> MemorySurface {
        MemorySurface::with_containers(&["sidebar", "main-content"])
    }

    fn app_at(section: &str, now: Instant) -> App<MemorySurface> {
        let config = AppConfig {
            seed: Some(5),
            start_section: Some(section.to_string()),
            ..Default::default()
        };
        let mut app = App::new(config, surface(), now).unwrap();
        app.poll_timers(now + ms(500));
        app
    }

    #[test]
    fn test_loading_delay_precedes_content() {
        let now = Instant::now();
        let config = AppConfig {
            start_section: Some("services".to_string()),
            ..Default::default()
        };
        let mut app = App::new(config, surface(), now).unwrap();
        let main = app.surface().content("main-content").unwrap();
        assert!(main.contains("Loading"));
        assert!(!app.surface().has_container("service-carousel"));

        app.poll_timers(now + ms(499));
        assert!(app.tutorial().is_loading());
        app.poll_timers(now + ms(500));
        assert!(!app.tutorial().is_loading());
        assert!(
            app.surface()
                .content("service-carousel")
                .unwrap()
                .contains("Amazon S3")
        );
    }

    #[test]
    fn test_carousel_navigation_animates_then_settles() {
        let now = Instant::now();
        let mut app = app_at("services", now);
        assert!(app.on_action("service-carousel", "next", now));
        let html = app.surface().content("service-carousel").unwrap();
        assert!(html.contains("slide-forward"));
        assert!(html.contains("2 of 4"));

        app.poll_timers(now + ms(300));
        let html = app.surface().content("service-carousel").unwrap();
        assert!(!html.contains("slide-forward"));
    }

    #[test]
    fn test_out_of_range_and_malformed_actions_are_ignored() {
        let now = Instant::now();
        let mut app = app_at("services", now);
        assert!(!app.on_action("service-carousel", "prev", now));
        assert!(!app.on_action("service-carousel", "goto:4", now));
        assert!(!app.on_action("service-carousel", "jump", now));
        assert!(!app.on_action("nowhere", "next", now));
        assert_eq!(app.tutorial().services().cursor(), 0);
    }

    #[test]
    fn test_quiz_flow_through_actions() {
        let now = Instant::now();
        let mut app = app_at("quiz", now);
        let total = app.tutorial().quiz().len();
        for _ in 0..total {
            assert!(app.on_action("quiz-container", "answer:0", now));
            assert!(app.on_action("quiz-container", "advance", now));
        }
        assert!(matches!(app.tutorial().quiz().phase(), QuizPhase::Completed { .. }));
        let html = app.surface().content("quiz-container").unwrap();
        assert!(html.contains("data-action=\"restart\""));
    }

    #[test]
    fn test_section_change_recreates_widget_container() {
        let now = Instant::now();
        let mut app = app_at("overview", now);
        assert!(!app.surface().has_container("puzzle-container"));

        let puzzle = SECTIONS.iter().position(|s| s.id == "puzzle").unwrap();
        assert!(app.on_action("sidebar", &format!("section:{}", puzzle), now));
        assert!(app.surface().has_container("puzzle-container"));
        assert_eq!(
            app.surface().bindings("puzzle-container"),
            vec!["click", "dragover", "dragstart", "drop"]
        );
    }

    #[test]
    fn test_missing_container_is_swallowed() {
        let now = Instant::now();
        let config = AppConfig {
            seed: Some(1),
            ..Default::default()
        };
        let mut app = App::new(config, MemorySurface::new(), now).unwrap();
        app.poll_timers(now + ms(500));
        assert!(!app.on_action("sidebar", "toggle-sidebar", now));
        assert!(app.layout().sidebar_collapsed());
    }

    #[test]
    fn test_resize_is_debounced() {
        let now = Instant::now();
        let mut app = app_at("overview", now);
        app.on_resize(900.0, now);
        app.on_resize(600.0, now + ms(100));
        app.poll_timers(now + ms(250));
        assert!(!app.layout().compact());
        app.poll_timers(now + ms(300));
        assert!(app.layout().compact());
        assert!(app.surface().content("sidebar").unwrap().contains("compact"));
    }

    #[test]
    fn test_bad_start_section_fails() {
        let config = AppConfig {
            start_section: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(App::new(config, surface(), Instant::now()).is_err());
    }
}
