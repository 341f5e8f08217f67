use std::collections::BTreeMap;

use crate::output::log_out;

use super::checks::FindingKind;

/// Findings grouped by category, accumulated across all targets and printed
/// once at the end of the run. Categories print in `FindingKind` order and
/// entries in insertion order, so identical inputs produce identical output.
#[derive(Debug, Default)]
pub struct ScanReport {
    groups: BTreeMap<FindingKind, Vec<String>>,
}

impl ScanReport {
    pub fn record(&mut self, kind: FindingKind, entry: String) {
        self.groups.entry(kind).or_default().push(entry);
    }

    pub fn extend(&mut self, findings: impl IntoIterator<Item = (FindingKind, String)>) {
        for (kind, entry) in findings {
            self.record(kind, entry);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The report body as ordered lines, without the output prefix.
    pub fn lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        for (kind, entries) in &self.groups {
            out.push(kind.label().to_string());
            for entry in entries {
                out.push(format!("---> {entry}"));
            }
        }
        out
    }

    pub fn print(&self) {
        for line in self.lines() {
            log_out(&line);
        }
    }
}
