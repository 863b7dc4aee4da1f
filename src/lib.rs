//! Voice-command navigation and accessibility support for a donation
//! marketplace shell.
//!
//! The pipeline is deliberately small: the speech capture adapter turns one
//! utterance into one transcript, the interpreter maps that transcript to
//! exactly one action, and the dispatcher hands the action to the host
//! shell's router, notification surface, and optional speech synthesizer.

pub mod accessibility;
pub mod capture;
pub mod config;
pub mod dispatch;
pub mod help;
pub mod interpreter;
pub mod route;
#[cfg(feature = "speak")]
pub mod speech;
pub mod telemetry;

pub use capture::{CaptureError, CaptureEvent, ListeningState, RecognitionBackend, SpeechCapture};
pub use config::AppConfig;
pub use dispatch::{
    dispatch_action, report_capture_error, Navigator, Notifier, Severity, SpeechSynth,
};
pub use interpreter::{interpret, CommandAction};
pub use route::{Category, FeedTab, Route};
