//! Bundled controlled-vocabulary lookups.
//!
//! Two reference tables ship inside the crate: a header-to-term mapping
//! (`terms.csv`) and a filename-pattern rule table (`files.csv`). Both are
//! plain values so tests can construct their own, with [`TermTable::bundled`]
//! and [`FileRuleTable::bundled`] providing the shared process-wide copies.

mod rules;
mod terms;

pub use rules::{FileRule, FileRuleTable};
pub use terms::TermTable;
