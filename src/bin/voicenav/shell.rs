//! Interactive loop wiring typed transcripts through the whole pipeline.
//!
//! Every non-directive line goes through the same path a spoken utterance
//! would: pushed into the capture adapter, drained as events, interpreted,
//! and dispatched against stdout-backed collaborators.

use crate::typed::{TypedBackend, TypedFeed};
use anyhow::Result;
use serde::Serialize;
use std::io::{self, BufRead};
use voicenav::{
    dispatch_action, help, interpret, report_capture_error, AppConfig, CaptureEvent,
    CommandAction, Navigator, Notifier, Route, Severity, SpeechCapture, SpeechSynth,
};

const PROMPT_HINT: &str =
    "Type a command as you would speak it (\":help\" for the reference, \":quit\" to leave).";

/// Router stand-in: prints the target the host shell would jump to.
struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn navigate(&mut self, route: &Route) -> Result<()> {
        println!("-> {}", route.href());
        Ok(())
    }
}

/// Toast stand-in: prints severity-tagged transient messages.
struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        println!("[{}] {message}", severity.label());
    }
}

/// One JSON line per handled transcript for machine consumers.
#[derive(Serialize)]
struct ActionRecord<'a> {
    transcript: &'a str,
    kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
    message: &'a str,
}

impl<'a> ActionRecord<'a> {
    fn new(transcript: &'a str, action: &'a CommandAction) -> Self {
        let (kind, href) = match action {
            CommandAction::Navigate { route, .. } => ("navigate", Some(route.href())),
            CommandAction::Help => ("help", None),
            CommandAction::Unrecognized { .. } => ("unrecognized", None),
        };
        Self {
            transcript,
            kind,
            href,
            message: action.confirmation(),
        }
    }
}

struct Session {
    feed: TypedFeed,
    json: bool,
    navigator: StdoutNavigator,
    notifier: StdoutNotifier,
    speaker: Option<Box<dyn SpeechSynth>>,
}

impl Session {
    fn handle_utterance(
        &mut self,
        capture: &mut SpeechCapture<TypedBackend>,
        text: &str,
    ) -> Result<()> {
        self.feed.push(text);
        capture.start();
        while let Some(event) = capture.try_event() {
            match event {
                CaptureEvent::Started | CaptureEvent::Ended => {}
                CaptureEvent::Transcript(transcript) => {
                    let action = interpret(&transcript);
                    if self.json {
                        let record = ActionRecord::new(&transcript, &action);
                        println!("{}", serde_json::to_string(&record)?);
                    } else {
                        dispatch_action(
                            &action,
                            &mut self.navigator,
                            &mut self.notifier,
                            self.speaker.as_deref_mut(),
                        );
                    }
                }
                CaptureEvent::Failed(error) => {
                    if self.json {
                        println!(
                            "{}",
                            serde_json::to_string(&serde_json::json!({ "error": error }))?
                        );
                    } else {
                        report_capture_error(&error, &mut self.notifier);
                    }
                }
            }
        }
        Ok(())
    }
}

pub(crate) fn run(config: &AppConfig, json: bool, once: Option<&str>) -> Result<()> {
    let (backend, feed) = TypedBackend::new();
    let mut capture = SpeechCapture::new(Some(backend), config.lang.clone());
    let mut session = Session {
        feed,
        json,
        navigator: StdoutNavigator,
        notifier: StdoutNotifier,
        speaker: make_speaker(config),
    };

    if let Some(transcript) = once {
        return session.handle_utterance(&mut capture, transcript);
    }

    println!("{PROMPT_HINT}");
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            ":quit" | ":exit" => break,
            ":help" => print!("{}", help::command_reference()),
            _ => session.handle_utterance(&mut capture, &line)?,
        }
    }
    Ok(())
}

#[cfg(feature = "speak")]
fn make_speaker(config: &AppConfig) -> Option<Box<dyn SpeechSynth>> {
    if !config.speak {
        return None;
    }
    match voicenav::speech::SystemSpeaker::new() {
        Ok(speaker) => Some(Box::new(speaker)),
        Err(err) => {
            eprintln!("spoken confirmations unavailable: {err:#}");
            None
        }
    }
}

#[cfg(not(feature = "speak"))]
fn make_speaker(config: &AppConfig) -> Option<Box<dyn SpeechSynth>> {
    if config.speak {
        eprintln!("built without the `speak` feature; confirmations stay silent");
    }
    None
}
