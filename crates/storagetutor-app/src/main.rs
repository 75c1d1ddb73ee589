//! Main application entry point (native preview).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting StorageTutor preview");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "native")]
fn run() -> storagetutor_app::AppResult<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading config from {}", path);
            storagetutor_app::AppConfig::from_json(&std::fs::read_to_string(path)?)?
        }
        None => storagetutor_app::AppConfig::default(),
    };
    let stdout = std::io::stdout();
    storagetutor_app::run_preview(config, &mut stdout.lock())
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
