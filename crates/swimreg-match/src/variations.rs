//! Day and time variation generation.
//!
//! Enrollment exports write schedules every way imaginable: `Monday`, `Mon`,
//! `Mon.`, `9:00 AM`, `9:00AM`, `9:00-9:45 AM`, `900`. These functions expand
//! a day or time value into the set of textual representations the matcher
//! should also accept. All of them are pure and deterministic; the output set
//! always contains at least the original input.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use swimreg_model::CaseInsensitiveSet;

/// Full name and abbreviation for the seven weekdays.
pub const WEEKDAYS: [(&str, &str); 7] = [
    ("Monday", "Mon"),
    ("Tuesday", "Tue"),
    ("Wednesday", "Wed"),
    ("Thursday", "Thu"),
    ("Friday", "Fri"),
    ("Saturday", "Sat"),
    ("Sunday", "Sun"),
];

/// Alternate abbreviations seen in exports, mapped to the full day name.
const DAY_SYNONYMS: [(&str, &str); 4] = [
    ("Tues", "Tuesday"),
    ("Thur", "Thursday"),
    ("Thurs", "Thursday"),
    ("Weds", "Wednesday"),
];

/// Equivalent time spellings observed in exports.
const TIME_SYNONYMS: [(&str, &str); 2] = [("12:00 PM", "Noon"), ("12:00 AM", "Midnight")];

static WEEKDAY_LOOKUP: LazyLock<CaseInsensitiveSet> = LazyLock::new(|| {
    let mut names = Vec::new();
    for (full, abbr) in WEEKDAYS {
        names.push(full.to_string());
        names.push(abbr.to_string());
    }
    for (alt, _) in DAY_SYNONYMS {
        names.push(alt.to_string());
    }
    CaseInsensitiveSet::new(names)
});

/// True when `token` spells a weekday, ignoring case and trailing `.`/`,`.
pub fn is_weekday_token(token: &str) -> bool {
    WEEKDAY_LOOKUP.contains(token.trim_end_matches(['.', ',']))
}

/// Resolves a day string to its canonical `(full, abbreviation)` pair.
pub fn canonical_day(day: &str) -> Option<(&'static str, &'static str)> {
    let cleaned = day.trim().trim_end_matches(['.', ',']);
    for (full, abbr) in WEEKDAYS {
        if cleaned.eq_ignore_ascii_case(full) || cleaned.eq_ignore_ascii_case(abbr) {
            return Some((full, abbr));
        }
    }
    for (alt, full_name) in DAY_SYNONYMS {
        if cleaned.eq_ignore_ascii_case(alt) {
            return WEEKDAYS
                .iter()
                .find(|(full, _)| *full == full_name)
                .map(|(full, abbr)| (*full, *abbr));
        }
    }
    None
}

/// Expands a day string into the set of spellings the matcher accepts for it.
pub fn day_variations(day: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    out.insert(day.to_string());
    let trimmed = day.trim();
    if trimmed.is_empty() {
        return out;
    }
    out.insert(trimmed.to_string());
    out.insert(trimmed.to_lowercase());

    if let Some((full, abbr)) = canonical_day(trimmed) {
        for base in [full, abbr] {
            out.insert(base.to_string());
            out.insert(base.to_lowercase());
            out.insert(format!("{base}."));
            out.insert(format!("{base},"));
            out.insert(format!("{}.", base.to_lowercase()));
        }
    }
    out
}

/// Expands a time string into accepted spellings.
///
/// Ranges are decomposed into start-only and end-only forms across the
/// separators `-`, `–`, and ` to `; a bare start inherits the end's meridiem
/// (`9:00-9:45 AM` contributes `9:00 AM`).
pub fn time_variations(time: &str) -> BTreeSet<String> {
    let mut out = BTreeSet::new();
    out.insert(time.to_string());
    let trimmed = time.trim();
    if trimmed.is_empty() {
        return out;
    }
    out.insert(trimmed.to_string());

    let mut parts = vec![trimmed.to_string()];
    if let Some((start, end)) = split_range(trimmed) {
        parts.push(start.clone());
        parts.push(end.clone());
        if meridiem(&start).is_none()
            && let Some(mer) = meridiem(&end)
        {
            parts.push(format!("{start} {mer}"));
        }
        out.insert(format!("{start}-{end}"));
        out.insert(format!("{start} - {end}"));
        out.insert(format!("{start} to {end}"));
    }
    for part in parts {
        expand_time_forms(&part, &mut out);
    }
    out
}

/// The start-of-range token used for token-overlap search terms:
/// `"9:00-9:45 AM"` yields `"9:00"`.
pub fn time_start_token(time: &str) -> String {
    let trimmed = time.trim();
    let start = match split_range(trimmed) {
        Some((start, _)) => start,
        None => trimmed.to_string(),
    };
    strip_meridiem(&start).trim().to_string()
}

fn split_range(value: &str) -> Option<(String, String)> {
    for sep in [" to ", "–", "-"] {
        if let Some((start, end)) = value.split_once(sep) {
            let start = start.trim();
            let end = end.trim();
            if !start.is_empty() && !end.is_empty() {
                return Some((start.to_string(), end.to_string()));
            }
        }
    }
    None
}

fn meridiem(value: &str) -> Option<&'static str> {
    let compact = value.trim().to_lowercase().replace(['.', ' '], "");
    if compact.ends_with("am") {
        Some("AM")
    } else if compact.ends_with("pm") {
        Some("PM")
    } else {
        None
    }
}

fn strip_meridiem(value: &str) -> String {
    let trimmed = value.trim();
    let lower = trimmed.to_lowercase();
    if lower.len() == trimmed.len() {
        for suffix in ["a.m.", "p.m.", "am", "pm"] {
            if let Some(stripped) = lower.strip_suffix(suffix) {
                return trimmed[..stripped.len()].trim().to_string();
            }
        }
    }
    trimmed.to_string()
}

fn expand_time_forms(value: &str, out: &mut BTreeSet<String>) {
    out.insert(value.to_string());
    out.insert(value.to_lowercase());

    let numeric = strip_meridiem(value);
    if numeric.is_empty() {
        return;
    }
    let mut numeric_forms = vec![numeric.clone()];
    if numeric.contains(':') {
        numeric_forms.push(numeric.replace(':', ""));
        if let Some(hour) = numeric.strip_suffix(":00") {
            numeric_forms.push(hour.to_string());
        }
    }

    match meridiem(value) {
        Some(mer) => {
            let dotted = if mer == "AM" { "A.M." } else { "P.M." };
            for numeric_form in &numeric_forms {
                out.insert(numeric_form.clone());
                for rendered in [
                    format!("{numeric_form} {mer}"),
                    format!("{numeric_form}{mer}"),
                    format!("{numeric_form} {dotted}"),
                ] {
                    out.insert(rendered.to_lowercase());
                    out.insert(rendered);
                }
            }
        }
        None => {
            for numeric_form in &numeric_forms {
                out.insert(numeric_form.clone());
            }
        }
    }

    for (a, b) in TIME_SYNONYMS {
        if value.trim().eq_ignore_ascii_case(a) {
            out.insert(b.to_string());
            out.insert(b.to_lowercase());
        } else if value.trim().eq_ignore_ascii_case(b) {
            out.insert(a.to_string());
            out.insert(a.to_lowercase());
        }
    }
}
