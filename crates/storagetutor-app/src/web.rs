//! WebAssembly entry point and the DOM surface.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use storagetutor_core::timing::{Duration, Instant};
use storagetutor_render::{EventKind, RenderResult, RendererError, Surface};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DragEvent, Element, Event};

use crate::app::App;
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

type Shared = Rc<RefCell<Option<App<DomSurface>>>>;
type Handle = Weak<RefCell<Option<App<DomSurface>>>>;

/// MIME type used to carry a label through a drag.
const DRAG_FORMAT: &str = "text/plain";
/// Attribute marking which events a container already listens for.
const BOUND_ATTR: &str = "data-bound";

thread_local! {
    static SESSION: RefCell<Option<Shared>> = const { RefCell::new(None) };
}

/// Draws into page elements by id and routes their events back to the app.
pub struct DomSurface {
    document: Document,
    app: Handle,
}

impl DomSurface {
    fn new(document: Document, app: Handle) -> Self {
        Self { document, app }
    }

    fn element(&self, container: &str) -> RenderResult<Element> {
        self.document
            .get_element_by_id(container)
            .ok_or_else(|| RendererError::MissingContainer(container.to_string()))
    }
}

impl Surface for DomSurface {
    fn set_content(
        &mut self,
        container: &str,
        markup: &str,
        _children: &[&str],
    ) -> RenderResult<()> {
        self.element(container)?.set_inner_html(markup);
        Ok(())
    }

    fn bind(&mut self, container: &str, events: &[EventKind]) -> RenderResult<()> {
        let element = self.element(container)?;
        let mut bound = element.get_attribute(BOUND_ATTR).unwrap_or_default();
        for &kind in events {
            if bound.split_whitespace().any(|name| name == kind.name()) {
                continue;
            }
            let app = self.app.clone();
            let target = container.to_string();
            let listener = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                handle_event(&app, &target, kind, &event);
            });
            element
                .add_event_listener_with_callback(kind.name(), listener.as_ref().unchecked_ref())
                .map_err(|e| RendererError::Bind {
                    container: container.to_string(),
                    event: kind.name(),
                    reason: format!("{:?}", e),
                })?;
            // The element owns the listener from here on.
            listener.forget();
            if !bound.is_empty() {
                bound.push(' ');
            }
            bound.push_str(kind.name());
        }
        element
            .set_attribute(BOUND_ATTR, &bound)
            .map_err(|e| RendererError::Surface(format!("{:?}", e)))
    }
}

/// Closest ancestor of the event target (inclusive) matching `selector`.
fn closest(event: &Event, selector: &str) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(selector).ok().flatten()
}

fn handle_event(app: &Handle, container: &str, kind: EventKind, event: &Event) {
    match kind {
        EventKind::Click => {
            let Some(element) = closest(event, "[data-action]") else {
                return;
            };
            if element.has_attribute("disabled") {
                return;
            }
            if let Some(action) = element.get_attribute("data-action") {
                run_action(app, container, &action);
            }
        }
        EventKind::DragStart => {
            let label = closest(event, "[data-label]").and_then(|e| e.get_attribute("data-label"));
            let transfer = event.dyn_ref::<DragEvent>().and_then(DragEvent::data_transfer);
            if let (Some(label), Some(transfer)) = (label, transfer) {
                if let Err(e) = transfer.set_data(DRAG_FORMAT, &label) {
                    log::warn!("drag start failed: {:?}", e);
                }
            }
        }
        EventKind::DragOver => {
            if closest(event, "[data-drop-item]").is_some() {
                event.prevent_default();
            }
        }
        EventKind::Drop => {
            event.prevent_default();
            let item = closest(event, "[data-drop-item]")
                .and_then(|e| e.get_attribute("data-drop-item"));
            let label = event
                .dyn_ref::<DragEvent>()
                .and_then(DragEvent::data_transfer)
                .and_then(|t| t.get_data(DRAG_FORMAT).ok())
                .filter(|l| !l.is_empty());
            if let (Some(item), Some(label)) = (item, label) {
                run_action(app, container, &format!("match:{}:{}", item, label));
            }
        }
    }
}

/// Run `f` against the live app, if it exists and is not already borrowed.
fn with_app<R>(app: &Handle, f: impl FnOnce(&mut App<DomSurface>) -> R) -> Option<R> {
    let shared = app.upgrade()?;
    let Ok(mut guard) = shared.try_borrow_mut() else {
        log::warn!("event arrived during a render; dropped");
        return None;
    };
    guard.as_mut().map(f)
}

fn run_action(app: &Handle, container: &str, raw: &str) {
    let animation = with_app(app, |a| {
        a.on_action(container, raw, Instant::now())
            .then(|| a.config().animation())
    })
    .flatten();
    if let Some(delay) = animation {
        schedule(app.clone(), delay, |a| a.poll_timers(Instant::now()));
    }
}

/// Call `f` on the app after `delay`. Returns the timeout handle.
fn schedule(
    app: Handle,
    delay: Duration,
    f: impl FnOnce(&mut App<DomSurface>) + 'static,
) -> Option<i32> {
    let window = web_sys::window()?;
    let callback = Closure::once_into_js(move || {
        with_app(&app, f);
    });
    let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        .map_err(|e| log::error!("setTimeout failed: {:?}", e))
        .ok()
}

/// Re-apply layout once resizing has been quiet for the debounce period.
fn install_resize_handler(app: Handle, quiet: Duration) -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Platform("no window".into()))?;
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let listener = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default();
        with_app(&app, |a| a.on_resize(width, Instant::now()));
        // Clear, then reschedule.
        if let Some(handle) = pending.take() {
            window.clear_timeout_with_handle(handle);
        }
        pending.set(schedule(app.clone(), quiet, |a| a.flush_resize()));
    });
    window
        .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
        .map_err(|e| AppError::Platform(format!("{:?}", e)))?;
    listener.forget();
    Ok(())
}

/// Build the config from defaults, the viewport and URL parameters.
fn load_config(window: &web_sys::Window) -> AppConfig {
    let mut config = AppConfig::default();
    if let Some(width) = window.inner_width().ok().and_then(|w| w.as_f64()) {
        config.initial_width = width;
    }
    let location = window.location();
    for params in [location.search(), location.hash()].into_iter().flatten() {
        let rejected = config.apply_params(&params);
        if !rejected.is_empty() {
            log::warn!("ignored {} bad URL parameter(s)", rejected.len());
        }
    }
    config
}

fn start() -> AppResult<()> {
    let window = web_sys::window().ok_or_else(|| AppError::Platform("no window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| AppError::Platform("no document".into()))?;
    let config = load_config(&window);
    log::info!("config: {:?}", config);

    let shared: Shared = Rc::new(RefCell::new(None));
    let handle = Rc::downgrade(&shared);
    let loading = config.loading_delay();
    let quiet = config.resize_debounce();

    let app = App::new(config, DomSurface::new(document, handle.clone()), Instant::now())?;
    *shared.borrow_mut() = Some(app);
    SESSION.with(|session| *session.borrow_mut() = Some(shared));

    schedule(handle.clone(), loading, |a| a.finish_loading());
    install_resize_handler(handle, quiet)
}

/// Initialize and run the WASM application.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("logger unavailable: {}", e).into());
    }

    log::info!("Starting StorageTutor (WASM)");
    if let Err(e) = start() {
        log::error!("StorageTutor failed to start: {}", e);
    }
}
