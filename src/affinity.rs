use std::fmt;

use tracing::{debug, info, warn};

use crate::cpu_set::CpuSet;
use crate::error::AffinityError;
use crate::processes::{find_by_name, ProcessTable};

#[derive(Debug)]
pub enum AffinityOutcome {
    Set { name: String, pid: u32 },
    Failed {
        name: String,
        pid: u32,
        error: AffinityError,
    },
    NotFound { name: String },
}

impl AffinityOutcome {
    pub fn is_set(&self) -> bool {
        matches!(self, AffinityOutcome::Set { .. })
    }
}

impl fmt::Display for AffinityOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AffinityOutcome::Set { name, .. } => write!(f, "Affinity set for {}.", name),
            AffinityOutcome::Failed { error, .. } => write!(f, "Error: {}.", error),
            AffinityOutcome::NotFound { name } => write!(f, "Process {} not found.", name),
        }
    }
}

/// OS errors never escape; they become [`AffinityOutcome::Failed`].
pub fn set_affinity(table: &impl ProcessTable, name: &str, cpus: &CpuSet) -> AffinityOutcome {
    let processes = table.processes();

    let Some(process) = find_by_name(&processes, name) else {
        debug!(name, "process not running");
        return AffinityOutcome::NotFound {
            name: name.to_string(),
        };
    };

    match table.set_affinity(process.pid, cpus) {
        Ok(()) => {
            info!(name, pid = process.pid, cpus = %cpus, "affinity set");
            AffinityOutcome::Set {
                name: name.to_string(),
                pid: process.pid,
            }
        }
        Err(error) => {
            warn!(name, pid = process.pid, %error, "failed to set affinity");
            AffinityOutcome::Failed {
                name: name.to_string(),
                pid: process.pid,
                error,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AffinityResult;
    use crate::processes::ProcessRecord;
    use std::cell::RefCell;

    struct StubTable {
        processes: Vec<ProcessRecord>,
        failure: Option<fn(u32) -> AffinityError>,
        calls: RefCell<Vec<(u32, CpuSet)>>,
    }

    impl StubTable {
        fn new(processes: &[(u32, &str)]) -> Self {
            Self {
                processes: processes
                    .iter()
                    .map(|&(pid, name)| ProcessRecord {
                        pid,
                        name: name.to_string(),
                    })
                    .collect(),
                failure: None,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ProcessTable for StubTable {
        fn processes(&self) -> Vec<ProcessRecord> {
            self.processes.clone()
        }

        fn set_affinity(&self, pid: u32, cpus: &CpuSet) -> AffinityResult<()> {
            self.calls.borrow_mut().push((pid, cpus.clone()));
            match self.failure {
                Some(failure) => Err(failure(pid)),
                None => Ok(()),
            }
        }

        fn logical_cpu_count(&self) -> usize {
            4
        }
    }

    #[test]
    fn not_found_names_the_process() {
        let table = StubTable::new(&[(7, "explorer.exe")]);
        let outcome = set_affinity(&table, "App.exe", &CpuSet::all(4));
        assert_eq!(outcome.to_string(), "Process App.exe not found.");
        assert!(table.calls.borrow().is_empty());
    }

    #[test]
    fn match_sets_full_mask() {
        let table = StubTable::new(&[(100, "App.exe")]);
        let outcome = set_affinity(&table, "App.exe", &CpuSet::all(4));
        assert!(outcome.is_set());
        assert_eq!(outcome.to_string(), "Affinity set for App.exe.");
        assert_eq!(*table.calls.borrow(), vec![(100, CpuSet::all(4))]);
    }

    #[test]
    fn vanished_process_becomes_error_text() {
        let mut table = StubTable::new(&[(100, "App.exe")]);
        table.failure = Some(|pid: u32| AffinityError::NoSuchProcess { pid });
        let outcome = set_affinity(&table, "App.exe", &CpuSet::all(4));
        assert!(!outcome.is_set());
        assert!(matches!(outcome, AffinityOutcome::Failed { pid: 100, .. }));
        assert!(outcome.to_string().starts_with("Error: "));
    }

    #[test]
    fn permission_denied_becomes_error_text() {
        let mut table = StubTable::new(&[(100, "App.exe")]);
        table.failure = Some(|pid: u32| AffinityError::Os {
            pid,
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        });
        let outcome = set_affinity(&table, "App.exe", &CpuSet::all(4));
        assert!(matches!(
            outcome,
            AffinityOutcome::Failed { pid: 100, error: AffinityError::Os { .. }, .. }
        ));
        assert!(outcome.to_string().starts_with("Error: "));
    }

    #[test]
    fn rejected_mask_becomes_error_text() {
        let mut table = StubTable::new(&[(100, "App.exe")]);
        table.failure = Some(|_: u32| AffinityError::UnsupportedCpu { index: 64 });
        let outcome = set_affinity(&table, "App.exe", &CpuSet::all(4));
        assert!(!outcome.is_set());
        assert_eq!(
            outcome.to_string(),
            "Error: CPU index 64 cannot be expressed in an affinity mask on this platform."
        );
    }
}
