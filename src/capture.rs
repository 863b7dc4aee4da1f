//! Single-utterance speech capture adapter over a platform recognition seam.
//!
//! The host platform's recognizer sits behind [`RecognitionBackend`] so the
//! adapter works the same whether speech comes from a system recognizer, a
//! typed-transcript stand-in, or a scripted test double. Capability detection
//! happens once at construction: a missing backend is a permanent Unsupported
//! status, never a per-call failure.
//!
//! Events flow through a bounded channel and are consumed by the same
//! cooperative loop that started the capture; the adapter owns the listening
//! state and updates it as terminal events are drained.

use anyhow::Result;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};

const CAPTURE_EVENT_CHANNEL_CAPACITY: usize = 8;

/// Adapter-owned listening state; read-only to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListeningState {
    #[default]
    Idle,
    Listening,
}

/// Terminal failure kinds surfaced to the user. A transcript that matches no
/// rule is not one of these; the interpreter handles that branch itself.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureError {
    /// The platform exposes no speech recognition capability.
    #[error("speech recognition is not supported on this device")]
    Unsupported,
    /// The platform reported that microphone access was refused.
    #[error("microphone access denied")]
    PermissionDenied,
    /// Any other platform-reported recognition failure (no speech detected,
    /// network error, audio device trouble). Carries the platform's code.
    #[error("could not understand: {0}")]
    NotUnderstood(String),
}

/// Events a capture session delivers, in order: `Started`, then at most one
/// `Transcript` or `Failed`, then `Ended`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureEvent {
    Started,
    /// Top transcript candidate for the finished utterance.
    Transcript(String),
    Failed(CaptureError),
    Ended,
}

/// Platform recognition capability seam.
///
/// `begin_utterance` must return immediately; results arrive later on the
/// provided sender. Implementations deliver at most one `Transcript` or one
/// `Failed` per utterance, followed by `Ended`. `abort` is best-effort: the
/// platform may still deliver a result or error after it is called.
pub trait RecognitionBackend {
    fn begin_utterance(&mut self, lang: &str, events: Sender<CaptureEvent>) -> Result<()>;
    fn abort(&mut self);
}

/// Start/stop wrapper that owns the listening state for one microphone.
///
/// Construct with `None` when the capability probe found no recognizer; the
/// adapter then reports [`CaptureError::Unsupported`] through the event path
/// instead of failing construction.
pub struct SpeechCapture<B> {
    backend: Option<B>,
    lang: String,
    state: ListeningState,
    event_tx: Sender<CaptureEvent>,
    event_rx: Receiver<CaptureEvent>,
}

impl<B: RecognitionBackend> SpeechCapture<B> {
    pub fn new(backend: Option<B>, lang: impl Into<String>) -> Self {
        let (event_tx, event_rx) = bounded(CAPTURE_EVENT_CHANNEL_CAPACITY);
        Self {
            backend,
            lang: lang.into(),
            state: ListeningState::Idle,
            event_tx,
            event_rx,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.backend.is_some()
    }

    pub fn state(&self) -> ListeningState {
        self.state
    }

    /// Begin a single-utterance capture.
    ///
    /// From Idle this transitions to Listening and asks the backend for the
    /// microphone. A second start while Listening is ignored; starting is
    /// only meaningful from Idle. Without a backend this is a no-op that
    /// reports Unsupported through the event path.
    pub fn start(&mut self) {
        if self.state == ListeningState::Listening {
            tracing::debug!("capture start ignored: already listening");
            return;
        }
        if self.backend.is_none() {
            self.push_event(CaptureEvent::Failed(CaptureError::Unsupported));
            self.push_event(CaptureEvent::Ended);
            return;
        }
        self.state = ListeningState::Listening;
        self.push_event(CaptureEvent::Started);
        let events = self.event_tx.clone();
        let begun = match self.backend.as_mut() {
            Some(backend) => backend.begin_utterance(&self.lang, events),
            None => Ok(()),
        };
        if let Err(err) = begun {
            tracing::debug!("recognition backend failed to start: {err:#}");
            self.state = ListeningState::Idle;
            self.push_event(CaptureEvent::Failed(CaptureError::NotUnderstood(format!(
                "{err:#}"
            ))));
            self.push_event(CaptureEvent::Ended);
        }
    }

    /// Force an early end. Best-effort: the platform may still deliver a
    /// result or error event that was already in flight.
    pub fn stop(&mut self) {
        if self.state != ListeningState::Listening {
            return;
        }
        if let Some(backend) = self.backend.as_mut() {
            backend.abort();
        }
        self.state = ListeningState::Idle;
    }

    /// Drain the next pending capture event, updating the listening state.
    ///
    /// Terminal events (`Transcript`, `Failed`, `Ended`) return the adapter
    /// to Idle so the next `start()` is meaningful again.
    pub fn try_event(&mut self) -> Option<CaptureEvent> {
        let event = self.event_rx.try_recv().ok()?;
        match &event {
            // Listening was already entered synchronously in start().
            CaptureEvent::Started => {}
            CaptureEvent::Transcript(_) | CaptureEvent::Failed(_) | CaptureEvent::Ended => {
                self.state = ListeningState::Idle;
            }
        }
        Some(event)
    }

    fn push_event(&self, event: CaptureEvent) {
        match self.event_tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                tracing::debug!("capture event dropped: queue full ({event:?})");
            }
            Err(TrySendError::Disconnected(_)) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend double that resolves an utterance the moment it begins.
    struct ScriptedBackend {
        outcome: Option<Result<String, CaptureError>>,
        aborted: bool,
    }

    impl ScriptedBackend {
        fn transcript(text: &str) -> Self {
            Self {
                outcome: Some(Ok(text.to_string())),
                aborted: false,
            }
        }

        fn failure(error: CaptureError) -> Self {
            Self {
                outcome: Some(Err(error)),
                aborted: false,
            }
        }
    }

    impl RecognitionBackend for ScriptedBackend {
        fn begin_utterance(&mut self, _lang: &str, events: Sender<CaptureEvent>) -> Result<()> {
            match self.outcome.take() {
                Some(Ok(text)) => events.send(CaptureEvent::Transcript(text))?,
                Some(Err(error)) => events.send(CaptureEvent::Failed(error))?,
                None => {}
            }
            events.send(CaptureEvent::Ended)?;
            Ok(())
        }

        fn abort(&mut self) {
            self.aborted = true;
        }
    }

    fn drain(capture: &mut SpeechCapture<ScriptedBackend>) -> Vec<CaptureEvent> {
        let mut events = Vec::new();
        while let Some(event) = capture.try_event() {
            events.push(event);
        }
        events
    }

    #[test]
    fn successful_utterance_delivers_one_transcript_and_returns_to_idle() {
        let mut capture =
            SpeechCapture::new(Some(ScriptedBackend::transcript("go home")), "en-US");
        assert_eq!(capture.state(), ListeningState::Idle);

        capture.start();
        assert_eq!(capture.state(), ListeningState::Listening);

        let events = drain(&mut capture);
        assert_eq!(
            events,
            vec![
                CaptureEvent::Started,
                CaptureEvent::Transcript("go home".to_string()),
                CaptureEvent::Ended,
            ]
        );
        assert_eq!(capture.state(), ListeningState::Idle);
    }

    #[test]
    fn missing_backend_reports_unsupported_and_stays_idle() {
        let mut capture = SpeechCapture::<ScriptedBackend>::new(None, "en-US");
        assert!(!capture.is_supported());

        capture.start();
        assert_eq!(capture.state(), ListeningState::Idle);

        let events = drain(&mut capture);
        assert_eq!(
            events,
            vec![
                CaptureEvent::Failed(CaptureError::Unsupported),
                CaptureEvent::Ended,
            ]
        );
        assert_eq!(capture.state(), ListeningState::Idle);
    }

    #[test]
    fn second_start_while_listening_is_ignored() {
        let mut capture = SpeechCapture::new(Some(ScriptedBackend::transcript("hi")), "en-US");
        capture.start();
        capture.start();

        let events = drain(&mut capture);
        let started = events
            .iter()
            .filter(|event| matches!(event, CaptureEvent::Started))
            .count();
        assert_eq!(started, 1);
    }

    #[test]
    fn platform_error_resets_to_idle_without_retry() {
        let mut capture = SpeechCapture::new(
            Some(ScriptedBackend::failure(CaptureError::PermissionDenied)),
            "en-US",
        );
        capture.start();

        let events = drain(&mut capture);
        assert!(events.contains(&CaptureEvent::Failed(CaptureError::PermissionDenied)));
        assert_eq!(capture.state(), ListeningState::Idle);
    }

    #[test]
    fn stop_aborts_the_backend_and_goes_idle() {
        let mut capture = SpeechCapture::new(Some(ScriptedBackend::transcript("hi")), "en-US");
        capture.start();
        capture.stop();
        assert_eq!(capture.state(), ListeningState::Idle);
        assert!(capture.backend.as_ref().is_some_and(|b| b.aborted));
    }

    #[test]
    fn stop_while_idle_is_a_no_op() {
        let mut capture = SpeechCapture::new(Some(ScriptedBackend::transcript("hi")), "en-US");
        capture.stop();
        assert_eq!(capture.state(), ListeningState::Idle);
        assert!(capture.backend.as_ref().is_some_and(|b| !b.aborted));
    }
}
