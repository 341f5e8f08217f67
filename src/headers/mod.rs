pub mod audit;
pub mod checks;
pub mod report;

pub use checks::{evaluate, FindingKind, HeaderSet};
