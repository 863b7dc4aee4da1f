//! Shared runtime flags so binaries stay aligned on common behavior.

use clap::Parser;

/// App-level configuration flattened into each binary's CLI.
#[derive(Debug, Clone, Parser)]
pub struct AppConfig {
    /// BCP-47 language tag requested from the platform recognizer
    #[arg(long = "lang", env = "VOICENAV_LANG", default_value = "en-US")]
    pub lang: String,

    /// Write debug events to the trace log file
    #[arg(long = "logs", default_value_t = false)]
    pub logs: bool,

    /// Disable all logging even when --logs is set
    #[arg(long = "no-logs", default_value_t = false)]
    pub no_logs: bool,

    /// Speak each confirmation aloud (requires the `speak` build feature)
    #[arg(long = "speak", default_value_t = false)]
    pub speak: bool,
}

impl AppConfig {
    pub fn logging_enabled(&self) -> bool {
        self.logs && !self.no_logs
    }
}
