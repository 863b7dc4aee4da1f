//! Optional local trace logging used for debugging command routing.

use crate::config::AppConfig;
use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::fmt::time::UtcTime;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Trace log destination; override with `VOICENAV_TRACE_LOG`.
pub fn trace_log_path() -> PathBuf {
    env::var("VOICENAV_TRACE_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("voicenav_trace.jsonl"))
}

fn init_tracing_once(config: &AppConfig, once: &OnceLock<()>) {
    if !config.logging_enabled() {
        return;
    }

    let _ = once.get_or_init(|| {
        let path = trace_log_path();
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => file,
            Err(_) => return,
        };
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Install the JSON-lines subscriber once per process when logging is on.
pub fn init_tracing(config: &AppConfig) {
    init_tracing_once(config, &TRACING_INIT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::sync::Mutex;

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    #[test]
    fn trace_log_path_honors_the_env_override() {
        let _guard = env_lock()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        env::set_var("VOICENAV_TRACE_LOG", "/tmp/voicenav_test_trace.jsonl");
        assert_eq!(
            trace_log_path(),
            PathBuf::from("/tmp/voicenav_test_trace.jsonl")
        );
        env::remove_var("VOICENAV_TRACE_LOG");
        assert!(trace_log_path().ends_with("voicenav_trace.jsonl"));
    }

    #[test]
    fn disabled_logging_never_installs_a_subscriber() {
        let _guard = env_lock()
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let config = AppConfig::parse_from(["voicenav", "--no-logs"]);
        let once = OnceLock::new();
        init_tracing_once(&config, &once);
        assert!(once.get().is_none());
    }
}
