use tracing::{error, info};

use crate::affinity::{set_affinity, AffinityOutcome};
use crate::constants::dialog_title;
use crate::cpu_set::CpuSet;
use crate::dialogs::DialogPresenter;
use crate::error::AffinityError;
use crate::processes::ProcessTable;

#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<AffinityOutcome>,
}

impl RunReport {
    pub fn successes(&self) -> impl Iterator<Item = &AffinityOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.is_set())
    }

    pub fn any_success(&self) -> bool {
        self.outcomes.iter().any(AffinityOutcome::is_set)
    }
}

pub fn failure_message(application: &str, names: &[String]) -> String {
    format!(
        "{} affinity not set.\nNone of the specified processes found.\n\nProcess names checked:\n{}",
        application,
        names.join("\n")
    )
}

/// Tries every name in `names`, showing one info dialog per success or a
/// single error dialog if nothing was set.
pub fn run(
    application: &str,
    names: &[String],
    table: &impl ProcessTable,
    dialogs: &impl DialogPresenter,
) -> RunReport {
    let title = dialog_title(application);
    let cpu_count = table.logical_cpu_count();
    let mut report = RunReport::default();

    if cpu_count == 0 {
        error!("could not determine the logical CPU count");
        report.outcomes = names
            .iter()
            .map(|name| AffinityOutcome::Failed {
                name: name.clone(),
                pid: 0,
                error: AffinityError::EmptyMask,
            })
            .collect();
    } else {
        let cpus = CpuSet::all(cpu_count);
        info!(cpu_count, targets = names.len(), "searching for processes");

        for name in names {
            let outcome = set_affinity(table, name, &cpus);
            if outcome.is_set() {
                dialogs.info(&title, &outcome.to_string());
            }
            report.outcomes.push(outcome);
        }
    }

    if !report.any_success() {
        info!("no target process had its affinity set");
        dialogs.error(&title, &failure_message(application, names));
    }

    report
}
