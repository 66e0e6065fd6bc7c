//! Installing the global `tracing` subscriber.

use tracing::Level;

/// The environment variable that overrides the log filter on native targets.
pub const LOG_ENV: &str = "FOLIO_LOG";

/// Install a fmt subscriber writing to stderr.
///
/// `FOLIO_LOG` takes precedence; otherwise the folio crates log at `level` and everything else at
/// `warn`.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: Level) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = level.as_str().to_ascii_lowercase();
        EnvFilter::new(format!(
            "warn,folio={level},folio_router={level},folio_history={level}"
        ))
    });

    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Send every event up to `level` to the browser console.
#[cfg(target_arch = "wasm32")]
pub fn init(level: Level) {
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::default()
            .set_max_level(level)
            .build(),
    );
}

/// Map a `-v` count to a level: warn, info, debug, then trace.
pub fn level_from_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}
