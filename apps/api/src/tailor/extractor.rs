//! Reply extraction: locate the JSON payload in free-text model output and parse it.
//!
//! Lookup order: first ```` ```json ```` block (any case), else first unlabeled ```` ``` ```` block,
//! else the whole reply. No repair is attempted beyond removing the fence.

use serde_json::Value;

const FENCE: &str = "```";
const JSON_LABEL: &str = "json";

/// Result of scanning a reply for a fenced block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FencedBlock<'a> {
    /// Trimmed text between the opening fence (and its label) and the next fence.
    Extracted(&'a str),
    NotFound,
}

/// Finds the first fence opening, optionally requiring `label` (ASCII
/// case-insensitive) right after the backticks, and returns the text up to the
/// next fence.
///
/// An opening fence without a matching close yields everything after the opener.
pub fn find_fenced_block<'a>(text: &'a str, label: Option<&str>) -> FencedBlock<'a> {
    let label = label.unwrap_or("").as_bytes();

    let opened = text
        .match_indices(FENCE)
        .map(|(at, _)| at + FENCE.len())
        .find(|&after| {
            text.as_bytes()[after..]
                .get(..label.len())
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(label))
        });

    let Some(after) = opened else {
        return FencedBlock::NotFound;
    };

    // the matched label bytes are ASCII, so this stays on a char boundary
    let body = &text[after + label.len()..];
    let inner = match body.find(FENCE) {
        Some(close_at) => &body[..close_at],
        None => body,
    };

    FencedBlock::Extracted(inner.trim())
}

/// Picks the candidate JSON text out of a raw reply.
pub fn extract_json_payload(reply: &str) -> &str {
    if let FencedBlock::Extracted(inner) = find_fenced_block(reply, Some(JSON_LABEL)) {
        return inner;
    }
    match find_fenced_block(reply, None) {
        FencedBlock::Extracted(inner) => inner,
        FencedBlock::NotFound => reply.trim(),
    }
}

/// Parses a reply into JSON. Fields are not validated.
pub fn parse_reply(reply: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(extract_json_payload(reply))
}
