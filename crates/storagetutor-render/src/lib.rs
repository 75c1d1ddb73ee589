//! StorageTutor Render Library
//!
//! Turns widget view models into markup through askama templates and hands
//! it to a [`Surface`]. Plain-text templates back the terminal preview.
//! The browser surface lives in the app crate; [`MemorySurface`] serves
//! headless previews and tests.

pub mod markup;
mod memory;
mod renderer;
mod text;

pub use markup::render_view;
pub use memory::MemorySurface;
pub use renderer::{
    EventKind, RenderResult, RendererError, Surface, child_containers, events_for, render_widget,
};
pub use text::render_text;
