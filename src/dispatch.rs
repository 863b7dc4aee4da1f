//! Collaborator seams and action execution so the interpreter stays pure.
//!
//! Navigation, transient notifications, and spoken readback are owned by the
//! host shell; the traits here are the handoff points. `dispatch_action`
//! performs exactly the side effects an action describes and nothing else.

use crate::capture::CaptureError;
use crate::interpreter::CommandAction;
use crate::route::Route;
use serde::{Deserialize, Serialize};

/// Severity of a transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// Severity label for terminal display.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "OK",
            Severity::Error => "ERR",
            Severity::Info => "INFO",
        }
    }
}

/// Client-side router seam: accepts a target, performs the jump.
pub trait Navigator {
    fn navigate(&mut self, route: &Route) -> anyhow::Result<()>;
}

/// Transient notification surface (toast or status line).
pub trait Notifier {
    fn notify(&mut self, severity: Severity, message: &str);
}

/// Fire-and-forget spoken readback; no return value is consumed.
pub trait SpeechSynth {
    fn speak(&mut self, text: &str);
}

/// Execute one action against the collaborators.
///
/// Speaking is optional (extended variant); when a speaker is supplied it
/// reads back the same confirmation the notifier shows.
pub fn dispatch_action(
    action: &CommandAction,
    navigator: &mut dyn Navigator,
    notifier: &mut dyn Notifier,
    speaker: Option<&mut (dyn SpeechSynth + '_)>,
) {
    let severity = match action {
        CommandAction::Navigate { route, .. } => match navigator.navigate(route) {
            Ok(()) => Severity::Success,
            Err(err) => {
                tracing::debug!(href = %route.href(), "navigation failed: {err:#}");
                notifier.notify(Severity::Error, "Navigation failed");
                return;
            }
        },
        CommandAction::Help | CommandAction::Unrecognized { .. } => Severity::Info,
    };
    let confirmation = action.confirmation();
    notifier.notify(severity, confirmation);
    if let Some(speaker) = speaker {
        speaker.speak(confirmation);
    }
}

/// Surface a capture failure with its fixed user-facing message.
///
/// No automatic retry follows any of these; the adapter is already back in
/// the idle state and the user retries via the toggle control.
pub fn report_capture_error(error: &CaptureError, notifier: &mut dyn Notifier) {
    let message = match error {
        CaptureError::Unsupported => "Voice commands are not supported on this device.",
        CaptureError::PermissionDenied => "Microphone access denied.",
        CaptureError::NotUnderstood(_) => "Could not understand.",
    };
    tracing::debug!("capture error surfaced: {error}");
    notifier.notify(Severity::Error, message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::interpret;

    #[derive(Default)]
    struct StubNavigator {
        visited: Vec<String>,
        fail: bool,
    }

    impl Navigator for StubNavigator {
        fn navigate(&mut self, route: &Route) -> anyhow::Result<()> {
            if self.fail {
                anyhow::bail!("router offline");
            }
            self.visited.push(route.href());
            Ok(())
        }
    }

    #[derive(Default)]
    struct StubNotifier {
        shown: Vec<(Severity, String)>,
    }

    impl Notifier for StubNotifier {
        fn notify(&mut self, severity: Severity, message: &str) {
            self.shown.push((severity, message.to_string()));
        }
    }

    #[derive(Default)]
    struct StubSpeaker {
        spoken: Vec<String>,
    }

    impl SpeechSynth for StubSpeaker {
        fn speak(&mut self, text: &str) {
            self.spoken.push(text.to_string());
        }
    }

    #[test]
    fn navigate_action_routes_then_confirms() {
        let mut navigator = StubNavigator::default();
        let mut notifier = StubNotifier::default();
        let mut speaker = StubSpeaker::default();

        let action = interpret("go home");
        dispatch_action(&action, &mut navigator, &mut notifier, Some(&mut speaker));

        assert_eq!(navigator.visited, vec!["/".to_string()]);
        assert_eq!(
            notifier.shown,
            vec![(Severity::Success, "Navigating home".to_string())]
        );
        assert_eq!(speaker.spoken, vec!["Navigating home".to_string()]);
    }

    #[test]
    fn failed_navigation_reports_an_error_and_skips_readback() {
        let mut navigator = StubNavigator {
            fail: true,
            ..Default::default()
        };
        let mut notifier = StubNotifier::default();
        let mut speaker = StubSpeaker::default();

        let action = interpret("go to my listings");
        dispatch_action(&action, &mut navigator, &mut notifier, Some(&mut speaker));

        assert!(navigator.visited.is_empty());
        assert_eq!(notifier.shown.len(), 1);
        assert_eq!(notifier.shown[0].0, Severity::Error);
        assert!(speaker.spoken.is_empty());
    }

    #[test]
    fn unrecognized_action_notifies_without_navigating() {
        let mut navigator = StubNavigator::default();
        let mut notifier = StubNotifier::default();

        let action = interpret("make me a sandwich");
        dispatch_action(&action, &mut navigator, &mut notifier, None);

        assert!(navigator.visited.is_empty());
        assert_eq!(notifier.shown.len(), 1);
        assert_eq!(notifier.shown[0].0, Severity::Info);
        assert!(notifier.shown[0].1.contains("help"));
    }

    #[test]
    fn capture_errors_map_to_fixed_messages() {
        let mut notifier = StubNotifier::default();
        report_capture_error(&CaptureError::PermissionDenied, &mut notifier);
        report_capture_error(
            &CaptureError::NotUnderstood("no-speech".to_string()),
            &mut notifier,
        );

        assert_eq!(
            notifier.shown,
            vec![
                (Severity::Error, "Microphone access denied.".to_string()),
                (Severity::Error, "Could not understand.".to_string()),
            ]
        );
    }
}
