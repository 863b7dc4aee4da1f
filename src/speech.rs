//! Spoken confirmation readback through the system text-to-speech engine.

use crate::dispatch::SpeechSynth;
use anyhow::{Context, Result};

/// System TTS wrapper; construct once and reuse across confirmations.
pub struct SystemSpeaker {
    engine: tts::Tts,
}

impl SystemSpeaker {
    pub fn new() -> Result<Self> {
        let engine = tts::Tts::default().context("failed to initialize system speech engine")?;
        Ok(Self { engine })
    }
}

impl SpeechSynth for SystemSpeaker {
    /// Fire-and-forget: interrupts any previous readback, and a synthesis
    /// failure only logs because spoken output is a courtesy surface.
    fn speak(&mut self, text: &str) {
        if let Err(err) = self.engine.speak(text, true) {
            tracing::debug!("speech synthesis failed: {err}");
        }
    }
}
