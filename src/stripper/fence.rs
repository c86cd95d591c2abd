use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Opening fence at the very start of the content: three backticks, an
/// optional language tag, optional blanks, then the line break.
const OPENING_FENCE: &str = r"\A```[\w+#.-]*[ \t]*\r?\n";

/// Closing fence at the very end: line break, three backticks, then only
/// whitespace until the end of the content.
const CLOSING_FENCE: &str = r"\r?\n```\s*\z";

/// Result of stripping one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StripOutcome {
    pub content: String,
    pub opening_removed: bool,
    pub closing_removed: bool,
}

impl StripOutcome {
    pub fn changed(&self) -> bool {
        self.opening_removed || self.closing_removed
    }
}

/// Compiled fence patterns.
///
/// Both rules are applied unconditionally, opening first, each anchored to
/// its end of the content. A rule that does not match leaves the text as
/// it is; that is not an error.
#[derive(Debug, Clone)]
pub struct FencePatterns {
    opening: Regex,
    closing: Regex,
}

impl Default for FencePatterns {
    fn default() -> Self {
        Self::new()
    }
}

impl FencePatterns {
    pub fn new() -> Self {
        Self {
            opening: Regex::new(OPENING_FENCE).expect("opening fence pattern is valid"),
            closing: Regex::new(CLOSING_FENCE).expect("closing fence pattern is valid"),
        }
    }

    pub fn strip(&self, content: &str) -> StripOutcome {
        let mut text = content;

        let opening_removed = match self.opening.find(text) {
            Some(m) => {
                text = &text[m.end()..];
                true
            }
            None => false,
        };

        let closing_removed = match self.closing.find(text) {
            Some(m) => {
                text = &text[..m.start()];
                true
            }
            None => false,
        };

        StripOutcome {
            content: text.to_string(),
            opening_removed,
            closing_removed,
        }
    }
}

fn shared_patterns() -> &'static FencePatterns {
    static PATTERNS: OnceLock<FencePatterns> = OnceLock::new();
    PATTERNS.get_or_init(FencePatterns::new)
}

/// Strips a leading and a trailing code fence from `content`.
pub fn strip_fences(content: &str) -> String {
    shared_patterns().strip(content).content
}

/// Like [`strip_fences`], but also reports which markers were found.
pub fn strip_fences_with_outcome(content: &str) -> StripOutcome {
    shared_patterns().strip(content)
}
