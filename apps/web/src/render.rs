//! Interprets a `SuggestionResponse` into a pure render plan: fallback
//! hints, suggestion cards parsed out of the numbered-list text, and the
//! candidate sections worth drawing.

use crate::domain::{Candidate, Card, SuggestionResponse};

/// Cards displayed per response.
pub const MAX_CARDS: usize = 3;

const TITLE_MAX_CHARS: usize = 60;
const BODY_MAX_CHARS: usize = 500;

const HINT_GENERIC: &str = "AI generation unavailable — basic suggestions shown";
const HINT_TIMEOUT: &str = "time-limit reached — basic suggestions shown";

/// Everything one renderer invocation draws. Deriving the plan is pure;
/// presenting it clears the card area first, so repeated calls with the
/// same response end in the same DOM.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Inline hint drawn above the cards for fallback/degraded responses.
    pub banner: Option<String>,
    /// Non-error notification for the same condition, with the raw weather
    /// error appended verbatim. Intentionally more detailed than the banner.
    pub notice: Option<String>,
    pub cards: Vec<Card>,
    /// Candidates that have at least one place; the rest are skipped.
    pub candidates: Vec<Candidate>,
}

impl RenderPlan {
    pub fn from_response(response: &SuggestionResponse) -> Self {
        let (banner, notice) = match fallback_hint(response) {
            Some(hint) => (Some(hint.banner), Some(hint.notice)),
            None => (None, None),
        };
        Self {
            banner,
            notice,
            cards: parse_cards(&response.suggestions),
            candidates: placed_candidates(response),
        }
    }
}

struct FallbackHint {
    banner: String,
    notice: String,
}

/// A fallback/degraded response is still a success; the hint tells the user
/// the simplified path was taken. The timeout reason gets its own wording.
fn fallback_hint(response: &SuggestionResponse) -> Option<FallbackHint> {
    if !(response.fallback || response.degraded) {
        return None;
    }
    let base = if response.fallback_reason.as_deref() == Some("timeout") {
        HINT_TIMEOUT
    } else {
        HINT_GENERIC
    };
    let hint = match &response.weather_error {
        Some(weather_error) => FallbackHint {
            banner: format!("{base} (weather data unavailable)"),
            notice: format!("{base} (weather data unavailable: {weather_error})"),
        },
        None => FallbackHint {
            banner: base.to_string(),
            notice: base.to_string(),
        },
    };
    Some(hint)
}

/// Splits loosely numbered suggestion text into at most [`MAX_CARDS`] cards.
///
/// A trimmed line starting with `<digits>.` opens a new block with the
/// marker stripped; other non-blank lines accumulate into the current
/// block; blank lines are dropped. Text without any marker is one block.
pub fn parse_cards(text: &str) -> Vec<Card> {
    split_blocks(text)
        .into_iter()
        .take(MAX_CARDS)
        .enumerate()
        .map(|(i, block)| card_from_block(i + 1, &block))
        .collect()
}

fn split_blocks(text: &str) -> Vec<Vec<String>> {
    let mut blocks: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        if let Some(rest) = strip_list_marker(line) {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
            // The marker line always opens the block, even when nothing
            // follows the marker; an empty first line gets a synthesized
            // title later.
            current.push(rest.trim().to_string());
        } else if !line.is_empty() {
            current.push(line.to_string());
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

/// `"12. go hiking"` -> `Some(" go hiking")`, anything else -> `None`.
fn strip_list_marker(line: &str) -> Option<&str> {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix('.')
}

fn card_from_block(index: usize, lines: &[String]) -> Card {
    let first = lines.first().map(String::as_str).unwrap_or_default();
    let title = if first.is_empty() {
        format!("Plan {index}")
    } else {
        truncate_chars(first, TITLE_MAX_CHARS)
    };
    let body = truncate_chars(&lines[1..].join("\n"), BODY_MAX_CHARS);
    let body = if body.is_empty() {
        "no details".to_string()
    } else {
        body
    };
    Card { index, title, body }
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

fn placed_candidates(response: &SuggestionResponse) -> Vec<Candidate> {
    response
        .candidates
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter(|candidate| !candidate.places().is_empty())
        .cloned()
        .collect()
}
