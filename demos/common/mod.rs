//! Setup shared by the demo programs.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Send logs to the file named by `TERMANIM_LOG`.
///
/// Without it nothing is logged: stderr shares the terminal with the
/// animation and would tear it up.
pub fn init_tracing() {
    let Some(path) = std::env::var_os("TERMANIM_LOG").map(PathBuf::from) else {
        return;
    };

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: failed to open log file {}: {err}", path.display());
            return;
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_names(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}
