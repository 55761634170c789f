//! Parsing of raw catalog/diagnosis strings of the shape
//! `"<CODE> <name>[<alias>]"`.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalize::{extract_bracket_content, main_name};

/// Leading classification code: an uppercase letter, digits, an optional
/// `.digits` part, and an optional lowercase-letter-plus-digits suffix
/// (`I48.000`, `I48.900x003`, `E11.9`). Only a code anchored at the start of
/// the string is recognized; a code appearing mid-string is not extracted.
/// That asymmetry is a documented limitation of the reference behavior, not
/// a bug.
const CODE_PATTERN: &str = r"^([A-Z]\d+(?:\.\d+)?(?:[a-z]\d+)?)\s*(.*)$";

static CODE_REGEX: OnceLock<Regex> = OnceLock::new();

fn code_regex() -> &'static Regex {
    CODE_REGEX.get_or_init(|| Regex::new(CODE_PATTERN).expect("code pattern compiles"))
}

/// The structured pieces of a raw catalog string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEntry {
    /// Leading classification code, empty if absent.
    pub code: String,
    /// Remainder after the code, alias brackets retained.
    pub name: String,
    /// Name with bracket content removed.
    pub main_name: String,
    /// Bracketed alias text, empty if none.
    pub alias: String,
}

/// Parse a raw string into code, name, main name and alias. Empty input
/// yields all-empty fields; nothing here ever fails.
pub fn parse_entry(raw: &str) -> ParsedEntry {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedEntry::default();
    }

    let (code, name) = match code_regex().captures(trimmed) {
        Some(caps) => (
            caps.get(1).map_or("", |m| m.as_str()).to_string(),
            caps.get(2).map_or("", |m| m.as_str()).trim().to_string(),
        ),
        None => (String::new(), trimmed.to_string()),
    };

    let alias = extract_bracket_content(&name);
    let main = main_name(&name);

    ParsedEntry {
        code,
        name,
        main_name: main,
        alias,
    }
}
