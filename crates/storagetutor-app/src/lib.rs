//! StorageTutor Application
//!
//! The application shell: routes input to the tutorial, drives its timers
//! and draws through a render surface. Natively it previews the tutorial as
//! text; in the browser it binds to the page DOM.

mod app;
mod config;
mod error;
mod preview;

pub use app::App;
pub use config::{AppConfig, parse_params};
pub use error::{AppError, AppResult};
pub use preview::{ROOT_CONTAINERS, run_preview};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
