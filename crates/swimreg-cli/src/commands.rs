use anyhow::{Context, Result};
use tracing::warn;

use swimreg_ingest::{CsvRosterSource, build_roster, partition_skills, read_csv_table};
use swimreg_match::matcher::MatchConfig;
use swimreg_match::{Reconciler, distinct_classes};
use swimreg_model::{Reconciliation, RosterSchema, SkillCatalog};

use crate::cli::{ClassesArgs, ReconcileArgs};

/// Runs one reconciliation. The roster is a collaborator: if it cannot be
/// read, the run degrades to the synthetic fallback path instead of failing.
/// An explicitly-passed `--skills` file that cannot be read is a hard error
/// (almost certainly a typo worth surfacing).
pub fn run_reconcile(args: &ReconcileArgs) -> Result<Reconciliation> {
    let source = CsvRosterSource::new(&args.roster);

    let catalog = if let Some(path) = &args.skills {
        let table = read_csv_table(path).context("read skills csv")?;
        partition_skills(&table.headers)
    } else {
        match source.load_with_catalog() {
            Ok((_, catalog)) => catalog,
            Err(error) => {
                warn!(%error, "skill catalog unavailable, continuing without skills");
                SkillCatalog::default()
            }
        }
    };

    let config = MatchConfig {
        aggressive: args.aggressive,
        fallback_enabled: !args.no_fallback,
        ..MatchConfig::default()
    };
    let reconciler = Reconciler::new(config);
    Ok(reconciler.reconcile(&args.class, &source, &catalog))
}

/// Lists the distinct class selection values in a roster export.
pub fn run_classes(args: &ClassesArgs) -> Result<Vec<(String, usize)>> {
    let table = read_csv_table(&args.roster).context("read roster csv")?;
    let columns = RosterSchema::default()
        .resolve(&table.headers)
        .context("resolve roster columns")?;
    let roster = build_roster(&table, &columns);
    Ok(distinct_classes(&roster))
}
