//! Name normalization and fuzzy matching.
//!
//! This module canonicalizes inconsistently formatted employee names and
//! scores a timecard name against the set of break-sheet names with an
//! order-independent token similarity.

mod matcher;
mod normalize;

pub use matcher::{NameMatch, match_one, similarity};
pub use normalize::normalize_name;
