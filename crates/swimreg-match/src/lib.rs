//! Class/roster reconciliation core.
//!
//! Matches a user-selected class descriptor string against loosely-structured
//! enrollment export rows and derives the skill-curriculum subset for the
//! class's stage. Matching escalates through progressively looser passes
//! (exact, normalized, token-overlap) and falls back to a labeled synthetic
//! set so the calling workflow always receives a renderable result.

pub mod descriptor;
pub mod filter;
pub mod matcher;
pub mod reconcile;
pub mod stage;
pub mod variations;

pub use descriptor::{compose_descriptor, parse_descriptor};
pub use filter::filter_catalog;
pub use matcher::{MatchConfig, RecordMatcher};
pub use reconcile::{Reconciler, RosterSource, distinct_classes};
pub use stage::extract_stage;
pub use variations::{day_variations, time_start_token, time_variations};
