//! Message classification.
//!
//! A well-formed message looks like `"something that was said" - name`.
//! The parse is a deliberate delimiter heuristic: the quote is whatever
//! sits strictly between the first and last double quote, and the speaker
//! is whatever follows the *last* hyphen. No escaping is supported, so a
//! message with stray hyphens after the real separator misattributes the
//! speaker. That is accepted behavior, not something to fix here.

use thiserror::Error;

/// A successfully parsed quotation, speaker already capitalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuote {
    pub quote: String,
    pub speaker: String,
}

/// Why a message failed to classify. All variants route the message to the
/// plain store; only the reason differs for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Unclassifiable {
    #[error("no quote delimiter present")]
    NoQuote,

    #[error("degenerate quote span")]
    InvalidQuoteSpan,

    #[error("no speaker separator")]
    NoSeparator,

    #[error("empty speaker after separator")]
    EmptySpeaker,
}

/// Classify one raw message.
///
/// The quote span is validated before the speaker is even looked for, so a
/// message with no quote reports `NoQuote` regardless of any hyphens, and a
/// valid quote with no hyphen anywhere still fails with `NoSeparator`.
pub fn classify(text: &str) -> Result<ParsedQuote, Unclassifiable> {
    let first_mark = text.find('"').ok_or(Unclassifiable::NoQuote)?;
    let last_mark = text.rfind('"').ok_or(Unclassifiable::NoQuote)?;
    if first_mark >= last_mark {
        return Err(Unclassifiable::InvalidQuoteSpan);
    }
    let quote = &text[first_mark + 1..last_mark];

    // Last hyphen wins, wherever it sits in the message.
    let separator = text.rfind('-').ok_or(Unclassifiable::NoSeparator)?;
    let mut speaker_start = separator + 1;
    if text[speaker_start..].starts_with(' ') {
        // Skip a single space after the hyphen, no more.
        speaker_start += 1;
    }

    let speaker_raw = &text[speaker_start..];
    let mut chars = speaker_raw.chars();
    let first_char = chars.next().ok_or(Unclassifiable::EmptySpeaker)?;
    let speaker: String = first_char.to_uppercase().chain(chars).collect();

    Ok(ParsedQuote {
        quote: quote.to_string(),
        speaker,
    })
}
