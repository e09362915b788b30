use swimreg_match::extract_stage;
use swimreg_model::{SAFETY_PREFIX, SkillCatalog, SkillDescriptor};

/// Partitions a header row into stage skills and safety skills.
///
/// A safety skill's first token is the fixed `SAW` prefix; a stage skill's
/// first token is a compact `S<code>` carrying a recognizable stage.
/// Everything else (names, schedule columns, notes) is not a skill column.
/// The partitions are disjoint by construction: the `SAW` check runs first.
pub fn partition_skills(headers: &[String]) -> SkillCatalog {
    let mut catalog = SkillCatalog::default();
    for (index, header) in headers.iter().enumerate() {
        let Some(first_token) = header.split_whitespace().next() else {
            continue;
        };
        let descriptor = SkillDescriptor {
            index,
            header: header.clone(),
        };
        if first_token.eq_ignore_ascii_case(SAFETY_PREFIX) {
            catalog.safety.push(descriptor);
        } else if is_stage_token(first_token) && extract_stage(header).is_some() {
            catalog.stage.push(descriptor);
        }
    }
    catalog
}

fn is_stage_token(token: &str) -> bool {
    let mut chars = token.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some('S' | 's'), Some('1'..='6' | 'a'..='f' | 'A'..='F'), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|h| (*h).to_string()).collect()
    }

    #[test]
    fn partitions_stage_and_safety_columns() {
        let catalog = partition_skills(&headers(&[
            "First Name",
            "Last Name",
            "S1 Front Float",
            "S2 Front Glide",
            "SA Water Acclimation",
            "SAW Submerge",
            "SAW Jump Push Turn Grab",
            "Notes",
        ]));
        let stage: Vec<_> = catalog.stage.iter().map(|s| s.header.as_str()).collect();
        let safety: Vec<_> = catalog.safety.iter().map(|s| s.header.as_str()).collect();
        assert_eq!(stage, vec!["S1 Front Float", "S2 Front Glide", "SA Water Acclimation"]);
        assert_eq!(safety, vec!["SAW Submerge", "SAW Jump Push Turn Grab"]);
        assert_eq!(catalog.stage[0].index, 2);
    }

    #[test]
    fn no_header_lands_in_both_partitions() {
        let catalog = partition_skills(&headers(&["SAW Submerge", "S3 Back Glide", "S7 Bogus"]));
        for safety in &catalog.safety {
            assert!(catalog.stage.iter().all(|s| s.header != safety.header));
        }
        // S7 is not a recognizable stage.
        assert_eq!(catalog.stage.len(), 1);
    }
}
