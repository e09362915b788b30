//! Skill catalog filtering by stage.

use tracing::debug;

use swimreg_model::{SkillCatalog, Stage};

use crate::stage::extract_stage;

/// Returns the subset of the catalog relevant to `stage`.
///
/// Numeric stages include the immediately preceding stage so worksheets show
/// review skills; letter stages match exactly (the curriculum defines no
/// "previous" letter stage). The safety partition always passes through
/// unchanged. When no stage skill survives the filter, the original catalog
/// is returned whole: a worksheet with too many skills beats one with none.
pub fn filter_catalog(catalog: &SkillCatalog, stage: Option<&Stage>) -> SkillCatalog {
    let Some(target) = stage else {
        return catalog.clone();
    };
    let previous = target.previous();

    let filtered: Vec<_> = catalog
        .stage
        .iter()
        .filter(|skill| {
            let header_stage = extract_stage(&skill.header);
            header_stage == Some(*target) || (previous.is_some() && header_stage == previous)
        })
        .cloned()
        .collect();

    if filtered.is_empty() {
        debug!(stage = %target, "no stage skills for target, returning full catalog");
        return catalog.clone();
    }
    SkillCatalog {
        stage: filtered,
        safety: catalog.safety.clone(),
    }
}
