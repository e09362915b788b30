use serde::{Deserialize, Serialize};

/// Header prefix identifying safety-around-water skill columns.
pub const SAFETY_PREFIX: &str = "SAW";

/// One skill column of the assessment sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDescriptor {
    /// Column position in the source table.
    pub index: usize,
    pub header: String,
}

/// The skill curriculum, partitioned into stage skills and safety skills.
///
/// The two partitions are disjoint: stage-skill headers begin with `S<code>`
/// (`S2 Front Float`), safety-skill headers with the fixed [`SAFETY_PREFIX`].
/// Safety skills are never filtered by stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCatalog {
    pub stage: Vec<SkillDescriptor>,
    pub safety: Vec<SkillDescriptor>,
}

impl SkillCatalog {
    pub fn is_empty(&self) -> bool {
        self.stage.is_empty() && self.safety.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stage.len() + self.safety.len()
    }

    /// All skill headers in partition order, stage skills first.
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.stage
            .iter()
            .chain(&self.safety)
            .map(|skill| skill.header.as_str())
    }
}
