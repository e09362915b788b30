pub mod descriptor;
pub mod error;
pub mod lookup;
pub mod result;
pub mod roster;
pub mod schema;
pub mod skills;
pub mod stage;

pub use descriptor::ClassDescriptor;
pub use error::{Result, RosterError};
pub use lookup::CaseInsensitiveSet;
pub use result::{
    ClassRoster, MatchOutcome, MatchReason, MatchedRecord, MatchedStudent, Provenance,
    Reconciliation,
};
pub use roster::{EnrollmentRecord, RosterTable};
pub use schema::{ResolvedColumns, RosterField, RosterSchema};
pub use skills::{SAFETY_PREFIX, SkillCatalog, SkillDescriptor};
pub use stage::Stage;
