//! Fixed command reference backing the help action and the demo shell.

/// Instructional message carried by the help action. Read aloud in the
/// extended variant, so it stays short and speakable.
pub const HELP_MESSAGE: &str = "You can say things like \"go home\", \"go to profile\", \
\"show donations\", \"I want to donate\", or \"search for winter coats\". \
Say \"help\" at any time to hear this again.";

/// One titled group of example phrases.
pub struct CommandGroup {
    pub title: &'static str,
    pub phrases: &'static [&'static str],
}

/// Grouped example phrases, mirroring the in-app voice command reference.
pub const COMMAND_GROUPS: &[CommandGroup] = &[
    CommandGroup {
        title: "Navigation",
        phrases: &[
            "Go home / Go to start",
            "Go to profile",
            "Go to messages / inbox",
            "Go to my listings",
        ],
    },
    CommandGroup {
        title: "Actions",
        phrases: &[
            "I want to donate",
            "Create a listing to donate",
            "I want to request",
            "Make a request",
        ],
    },
    CommandGroup {
        title: "Search & Feed",
        phrases: &[
            "Show requests",
            "Show donations",
            "Find [category] (e.g., furniture, food)",
            "Search for [item]",
        ],
    },
];

/// Plain-text rendering of the grouped reference for terminal display.
pub fn command_reference() -> String {
    let mut out = String::from("Voice commands\n");
    for group in COMMAND_GROUPS {
        out.push('\n');
        out.push_str(group.title);
        out.push('\n');
        for phrase in group.phrases {
            out.push_str("  \"");
            out.push_str(phrase);
            out.push_str("\"\n");
        }
    }
    out
}
