//! Transcript-to-action rule chain so spoken phrases map onto app routes.
//!
//! The interpreter is a pure mapping: one lowercased transcript in, exactly
//! one action out. Rules live in an explicit ordered table because priority
//! between them is load-bearing (the help rule must outrank navigation, and
//! creation intents must reject browsing phrasings before the feed rules get
//! a chance to claim them). First match wins and short-circuits the rest.

use crate::help;
use crate::route::{Category, FeedTab, Route};
use serde::{Deserialize, Serialize};

const HELP_KEYWORDS: &[&str] = &["help", "what can i say", "commands"];

/// Markers that turn a bare "donate"/"request" mention into a creation intent.
/// Kept exactly as shipped; broader inference here misroutes browse phrasings.
const CREATE_DONATION_MARKERS: &[&str] = &["want to", "i", "create"];
const CREATE_REQUEST_MARKERS: &[&str] = &["want to", "create", "make", "need"];

/// Browsing markers that veto the creation rules so "find donations near me"
/// never opens the donation form.
const BROWSE_MARKERS: &[&str] = &["find", "search", "show", "see"];

const SEARCH_PREFIX: &str = "search for";

/// Fixed navigation phrases checked in priority order.
const NAV_TARGETS: &[(&[&str], Route, &str)] = &[
    (&["home", "go to start"], Route::Home, "Navigating home"),
    (&["profile"], Route::Profile, "Navigating to profile"),
    (
        &["messages", "inbox"],
        Route::Messages,
        "Navigating to messages",
    ),
    (
        &["my listings"],
        Route::MyListings,
        "Navigating to my listings",
    ),
];

/// Single outcome of interpreting one transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandAction {
    /// Jump to a route, confirming the destination to the user.
    Navigate { route: Route, confirmation: String },
    /// Read back the fixed command reference.
    Help,
    /// Nothing matched; carries the transcript verbatim plus a hint.
    Unrecognized { transcript: String, feedback: String },
}

impl CommandAction {
    fn navigate(route: Route, confirmation: impl Into<String>) -> CommandAction {
        CommandAction::Navigate {
            route,
            confirmation: confirmation.into(),
        }
    }

    fn unrecognized(raw: &str) -> CommandAction {
        CommandAction::Unrecognized {
            transcript: raw.to_string(),
            feedback: format!(
                "Command received: \"{raw}\" (no action taken). Say \"help\" to hear available commands."
            ),
        }
    }

    /// Message shown as a transient notification and, in the extended
    /// variant, spoken back to the user.
    pub fn confirmation(&self) -> &str {
        match self {
            CommandAction::Navigate { confirmation, .. } => confirmation,
            CommandAction::Help => help::HELP_MESSAGE,
            CommandAction::Unrecognized { feedback, .. } => feedback,
        }
    }
}

/// Lowercased view of one utterance with the substring checks the rules use.
struct Transcript {
    lowered: String,
}

impl Transcript {
    fn new(raw: &str) -> Self {
        Self {
            lowered: raw.to_lowercase(),
        }
    }

    fn contains(&self, needle: &str) -> bool {
        self.lowered.contains(needle)
    }

    fn contains_any(&self, needles: &[&str]) -> bool {
        needles.iter().any(|needle| self.lowered.contains(needle))
    }

    /// Remainder after the first occurrence of `phrase`, if present.
    fn tail_after(&self, phrase: &str) -> Option<&str> {
        let start = self.lowered.find(phrase)?;
        Some(&self.lowered[start + phrase.len()..])
    }

    fn category(&self) -> Option<Category> {
        Category::scan(&self.lowered)
    }
}

struct Rule {
    name: &'static str,
    apply: fn(&Transcript) -> Option<CommandAction>,
}

/// Priority order is the contract; reordering entries changes routing.
const RULES: &[Rule] = &[
    Rule {
        name: "help",
        apply: rule_help,
    },
    Rule {
        name: "fixed-navigation",
        apply: rule_fixed_navigation,
    },
    Rule {
        name: "create-donation",
        apply: rule_create_donation,
    },
    Rule {
        name: "create-request",
        apply: rule_create_request,
    },
    Rule {
        name: "category-requests",
        apply: rule_category_requests,
    },
    Rule {
        name: "category-donations",
        apply: rule_category_donations,
    },
    Rule {
        name: "feed-tab",
        apply: rule_feed_tab,
    },
    Rule {
        name: "free-search",
        apply: rule_free_search,
    },
];

/// Map one transcript to exactly one action. Total and pure: never panics,
/// holds no state, and returns the same action for the same input.
pub fn interpret(raw: &str) -> CommandAction {
    let transcript = Transcript::new(raw);
    for rule in RULES {
        if let Some(action) = (rule.apply)(&transcript) {
            tracing::debug!(rule = rule.name, "voice command matched");
            return action;
        }
    }
    tracing::debug!("voice command unrecognized");
    CommandAction::unrecognized(raw)
}

fn rule_help(transcript: &Transcript) -> Option<CommandAction> {
    transcript
        .contains_any(HELP_KEYWORDS)
        .then_some(CommandAction::Help)
}

fn rule_fixed_navigation(transcript: &Transcript) -> Option<CommandAction> {
    NAV_TARGETS
        .iter()
        .find(|(keywords, _, _)| transcript.contains_any(keywords))
        .map(|(_, route, confirmation)| CommandAction::navigate(route.clone(), *confirmation))
}

fn rule_create_donation(transcript: &Transcript) -> Option<CommandAction> {
    let create_intent = transcript.contains("donate")
        && transcript.contains_any(CREATE_DONATION_MARKERS)
        && !transcript.contains_any(BROWSE_MARKERS);
    create_intent
        .then(|| CommandAction::navigate(Route::CreateListing, "Opening donation form"))
}

fn rule_create_request(transcript: &Transcript) -> Option<CommandAction> {
    let create_intent = transcript.contains("request")
        && transcript.contains_any(CREATE_REQUEST_MARKERS)
        && !transcript.contains_any(BROWSE_MARKERS);
    create_intent.then(|| CommandAction::navigate(Route::CreateRequest, "Opening request form"))
}

/// "Show me what people can donate in furniture" surfaces the outstanding
/// requests for that category rather than browsing donations.
fn rule_category_requests(transcript: &Transcript) -> Option<CommandAction> {
    if !(transcript.contains("can donate") || transcript.contains("requests")) {
        return None;
    }
    let category = transcript.category()?;
    Some(CommandAction::navigate(
        Route::feed(FeedTab::Requests, Some(category)),
        format!("Showing requests for {category}"),
    ))
}

fn rule_category_donations(transcript: &Transcript) -> Option<CommandAction> {
    if !transcript.contains_any(&["donations", "find", "show"]) {
        return None;
    }
    let category = transcript.category()?;
    Some(CommandAction::navigate(
        Route::feed(FeedTab::Donations, Some(category)),
        format!("Showing donations for {category}"),
    ))
}

fn rule_feed_tab(transcript: &Transcript) -> Option<CommandAction> {
    if transcript.contains_any(&["show requests", "see requests"]) {
        return Some(CommandAction::navigate(
            Route::feed(FeedTab::Requests, None),
            "Showing all requests",
        ));
    }
    if transcript.contains_any(&["show donations", "see donations"]) {
        return Some(CommandAction::navigate(
            Route::feed(FeedTab::Donations, None),
            "Showing all donations",
        ));
    }
    None
}

fn rule_free_search(transcript: &Transcript) -> Option<CommandAction> {
    let term = transcript.tail_after(SEARCH_PREFIX)?.trim();
    if term.is_empty() {
        // "search for" followed by nothing falls through to the default.
        return None;
    }
    Some(CommandAction::navigate(
        Route::search(term),
        format!("Searching for {term}"),
    ))
}
