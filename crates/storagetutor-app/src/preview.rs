//! Headless walkthrough of every section, printed as plain text.

use std::io::Write;

use storagetutor_core::timing::Instant;
use storagetutor_core::{Action, WidgetId};
use storagetutor_render::{MemorySurface, render_text};

use crate::app::App;
use crate::config::AppConfig;
use crate::error::AppResult;

/// Containers that exist before anything is rendered.
pub const ROOT_CONTAINERS: [&str; 2] = ["sidebar", "main-content"];

/// Step through the whole tutorial and write each screen to `out`.
///
/// Carousels are paged to the end, the quiz is answered with the first
/// choice throughout and the matching game is solved.
pub fn run_preview<W: Write>(config: AppConfig, out: &mut W) -> AppResult<()> {
    let now = Instant::now();
    let mut app = App::new(config, MemorySurface::with_containers(&ROOT_CONTAINERS), now)?;
    app.finish_loading();
    print_container(&app, WidgetId::Sidebar, out)?;

    app.dispatch(WidgetId::Section, &Action::GoTo(0), now);
    loop {
        print_container(&app, WidgetId::Section, out)?;
        if let Some(widget) = app.tutorial().active_widget() {
            walk_widget(&mut app, widget, now, out)?;
        }
        if !app.dispatch(WidgetId::Section, &Action::Next, now) {
            break;
        }
    }
    log::info!("preview finished");
    Ok(())
}

fn walk_widget<W: Write>(
    app: &mut App<MemorySurface>,
    widget: WidgetId,
    now: Instant,
    out: &mut W,
) -> AppResult<()> {
    match widget {
        WidgetId::Services | WidgetId::Formats => loop {
            app.settle();
            print_container(app, widget, out)?;
            if !app.dispatch(widget, &Action::Next, now) {
                break;
            }
        },
        WidgetId::Quiz => {
            while !app.tutorial().quiz().is_completed() {
                app.dispatch(widget, &Action::Answer(0), now);
                print_container(app, widget, out)?;
                if !app.dispatch(widget, &Action::Advance, now) {
                    break;
                }
            }
            print_container(app, widget, out)?;
        }
        WidgetId::Puzzle => {
            print_container(app, widget, out)?;
            let answers: Vec<_> = app
                .tutorial()
                .puzzle()
                .scenarios()
                .iter()
                .map(|s| s.answer)
                .collect();
            for (item, label) in answers.into_iter().enumerate() {
                let action = Action::Match {
                    item,
                    label: label.to_string(),
                };
                app.dispatch(widget, &action, now);
            }
            print_container(app, widget, out)?;
        }
        WidgetId::Sidebar | WidgetId::Section => {}
    }
    Ok(())
}

fn print_container<W: Write>(
    app: &App<MemorySurface>,
    widget: WidgetId,
    out: &mut W,
) -> AppResult<()> {
    let text = render_text(&app.tutorial().view(widget, app.layout()))?;
    writeln!(out, "=== {} ===", widget.container())?;
    writeln!(out, "{}\n", text)?;
    Ok(())
}
