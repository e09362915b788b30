//! Stage extraction from free text.
//!
//! Applies three ordered rules to a program name or skill-column header.
//! Explicit `stage <code>` phrases are unambiguous and checked first; compact
//! `S<code>` tokens next; a bare code token is the riskiest rule and is gated
//! behind a domain keyword so unrelated numbers ("Lane 4") never read as a
//! stage. First matching rule wins.

use std::sync::LazyLock;

use regex::Regex;

use swimreg_model::Stage;

static STAGE_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bstage\s+([0-9a-f])\b").expect("stage phrase pattern"));

static COMPACT_STAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bs([1-6a-f])\b").expect("compact stage pattern"));

// Bare letters are uppercase-only: a lowercase bare "a" is almost always the
// article, not stage A.
static BARE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([1-6A-F])\b").expect("bare code pattern"));

/// Keywords that must accompany a bare code token for it to count as a stage.
const STAGE_KEYWORDS: [&str; 5] = ["swim", "lesson", "level", "class", "stage"];

/// Derives the stage code from a program name or skill-column header.
pub fn extract_stage(text: &str) -> Option<Stage> {
    if let Some(captures) = STAGE_PHRASE.captures(text) {
        if let Some(stage) = Stage::from_token(&captures[1]) {
            return Some(stage);
        }
    }
    if let Some(captures) = COMPACT_STAGE.captures(text) {
        if let Some(stage) = Stage::from_token(&captures[1]) {
            return Some(stage);
        }
    }
    let lower = text.to_lowercase();
    if STAGE_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
        && let Some(captures) = BARE_CODE.captures(text)
    {
        return Stage::from_token(&captures[1]);
    }
    None
}
