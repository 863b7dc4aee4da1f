//! Typed-transcript recognition backend so the shell runs without hardware.
//!
//! Each line the user types plays the role of one finished utterance: the
//! backend pops it from the shared feed and delivers it the way a platform
//! recognizer would deliver its top transcript candidate. A blank line models
//! an utterance in which no speech was detected.

use anyhow::Result;
use crossbeam_channel::Sender;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use voicenav::{CaptureError, CaptureEvent, RecognitionBackend};

/// Shared handle the shell pushes typed lines into.
#[derive(Clone, Default)]
pub(crate) struct TypedFeed {
    queue: Arc<Mutex<VecDeque<String>>>,
}

impl TypedFeed {
    pub(crate) fn push(&self, line: impl Into<String>) {
        self.queue
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(line.into());
    }
}

pub(crate) struct TypedBackend {
    feed: TypedFeed,
}

impl TypedBackend {
    pub(crate) fn new() -> (Self, TypedFeed) {
        let feed = TypedFeed::default();
        (Self { feed: feed.clone() }, feed)
    }
}

impl RecognitionBackend for TypedBackend {
    fn begin_utterance(&mut self, _lang: &str, events: Sender<CaptureEvent>) -> Result<()> {
        let next = self
            .feed
            .queue
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front();
        match next {
            Some(line) if !line.trim().is_empty() => {
                events.send(CaptureEvent::Transcript(line))?;
            }
            _ => {
                events.send(CaptureEvent::Failed(CaptureError::NotUnderstood(
                    "no-speech".to_string(),
                )))?;
            }
        }
        events.send(CaptureEvent::Ended)?;
        Ok(())
    }

    fn abort(&mut self) {}
}
