pub mod filter;
pub mod rdap;

pub use filter::{parse_targets, ScopeTarget};
