//! Text extraction passes over normalized law text.
//!
//! Three independent scanners: citations to other sections, defined
//! terms with inferred scope, and amendment-history atoms. None of them
//! validate against the stored code; that is a downstream concern.

pub mod definitions;
pub mod history;
pub mod references;

pub use definitions::{DefinitionScanner, DefinitionSet, Scope};
pub use history::{extract_history, HistoryEntry};
pub use references::extract_references;
