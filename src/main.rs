#![windows_subsystem = "windows"]

use tracing::info;

use hauptwerk_affinity::{
    constants::{default_process_names, APPLICATION, LOG_LEVEL},
    dialogs::native_presenter,
    logging, orchestrator, SystemProcessTable,
};

fn main() {
    logging::init(LOG_LEVEL);

    let names = default_process_names();
    let report = orchestrator::run(
        APPLICATION,
        &names,
        &SystemProcessTable::new(),
        &native_presenter(),
    );
    info!(set = report.successes().count(), checked = names.len(), "done");
}
