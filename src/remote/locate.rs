//! Error line extraction from service error messages.
//!
//! The service embeds the failing line in prose rather than a structured
//! field, so this stays an isolated unit: if the service ever grows a
//! `{ message, line }` pair, only this module goes away.

use std::sync::OnceLock;

use regex::Regex;

/// Pattern v1 — the service prefixes parse errors with
/// `Erro na linha <N>:`. The only structural assumption made about the
/// message text.
const LINE_PATTERN: &str = r"Erro na linha (\d+):";

/// Extract the 1-based source line from an error message.
///
/// Returns `None` when the pattern is absent anywhere in the message —
/// a valid "unlocated error", not a failure. Only the first match counts.
pub fn locate(message: &str) -> Option<u32> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(LINE_PATTERN).expect("LINE_PATTERN is valid"));
    re.captures(message)?.get(1)?.as_str().parse().ok()
}
