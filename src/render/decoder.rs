//! Request decoding: raw delimited input → ordered equation fragments.

use crate::render::error::{RenderError, RenderResult};

/// Two-character marker separating equations in the raw input string.
pub const FRAGMENT_DELIMITER: &str = "**";

/// Split a raw delimited string into trimmed, non-empty equation fragments.
///
/// Each piece is stripped of surrounding whitespace and stray `*`
/// characters; pieces that are empty after trimming are discarded.
/// Fragment order follows first occurrence in the input and drives the
/// 1-based numbering used in the assembled document.
pub fn split_fragments(raw: &str) -> RenderResult<Vec<String>> {
    if raw.trim().is_empty() {
        return Err(RenderError::invalid_input(
            "'equations_raw' must not be empty",
        ));
    }

    let fragments: Vec<String> = raw
        .split(FRAGMENT_DELIMITER)
        .map(|piece| piece.trim_matches(|c: char| c == '*' || c.is_whitespace()))
        .filter(|piece| !piece.is_empty())
        .map(str::to_owned)
        .collect();

    if fragments.is_empty() {
        return Err(RenderError::invalid_input(format!(
            "no equations found around the '{FRAGMENT_DELIMITER}' delimiter",
        )));
    }

    Ok(fragments)
}
