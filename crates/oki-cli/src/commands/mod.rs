use std::path::Path;

use oki_engine::Engine;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
pub mod dict_ops;

/// Install the stderr subscriber, or the JSONL trace sink when a trace
/// directory is given and the `trace` feature is built in.
pub fn init_logging(verbose: bool, trace_dir: Option<&Path>) {
    if let Some(dir) = trace_dir {
        if oki_engine::trace_init::is_enabled() {
            oki_engine::trace_init::init_tracing(dir);
            return;
        }
        eprintln!("warning: built without the `trace` feature; ignoring --trace-dir");
    }

    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}

/// Build the engine, falling back to the embedded table for any path not
/// given.
pub fn load_engine(kana: Option<&str>, phonetics: Option<&str>) -> Engine {
    die!(
        Engine::open(kana.map(Path::new), phonetics.map(Path::new)),
        "Error: {}"
    )
}

/// Install custom ETL settings from a file, before first use.
pub fn load_settings(file: &str) {
    let content = die!(std::fs::read_to_string(file), "Error reading {file}: {}");
    die!(
        crate::settings::init_custom(content),
        "Error in settings {file}: {}"
    );
}
