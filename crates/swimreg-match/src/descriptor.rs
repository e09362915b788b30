//! Class descriptor parsing and composition.
//!
//! Two grammars are accepted for backward compatibility: the composed form
//! `"<program> (<day>, <time>)"` and the legacy space-joined form
//! `"<program> <day> <time>"`. Parsing is total: a string that fits neither
//! grammar becomes a descriptor with the whole string as the program and
//! empty day/time.

use std::sync::LazyLock;

use regex::Regex;

use swimreg_model::ClassDescriptor;

use crate::variations::is_weekday_token;

static COMPOSED_FORM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<program>.+?)\s*\((?P<day>[^,()]+),\s*(?P<time>[^()]+)\)\s*$")
        .expect("composed descriptor pattern")
});

/// Parses a class selection string into a [`ClassDescriptor`]. Never fails.
pub fn parse_descriptor(raw: &str) -> ClassDescriptor {
    let trimmed = raw.trim();
    if let Some(captures) = COMPOSED_FORM.captures(trimmed) {
        return ClassDescriptor::new(
            raw.to_string(),
            captures["program"].trim().to_string(),
            captures["day"].trim().to_string(),
            captures["time"].trim().to_string(),
        );
    }

    // Legacy space-joined form: find a weekday token and split around it.
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if let Some(position) = tokens.iter().position(|token| is_weekday_token(token)) {
        let program = tokens[..position].join(" ");
        let day = tokens[position].trim_end_matches(',').to_string();
        let time = tokens[position + 1..].join(" ");
        return ClassDescriptor::new(raw.to_string(), program, day, time);
    }

    ClassDescriptor::new(raw.to_string(), trimmed.to_string(), String::new(), String::new())
}

/// Composes the selection string for a class, the inverse of
/// [`parse_descriptor`]'s primary grammar.
pub fn compose_descriptor(program: &str, day: &str, time: &str) -> String {
    let program = program.trim();
    let day = day.trim();
    let time = time.trim();
    match (day.is_empty(), time.is_empty()) {
        (true, true) => program.to_string(),
        (false, true) => format!("{program} ({day})"),
        (true, false) => format!("{program} ({time})"),
        (false, false) => format!("{program} ({day}, {time})"),
    }
}
