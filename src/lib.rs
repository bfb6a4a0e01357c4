pub mod affinity;
pub mod constants;
pub mod cpu_set;
pub mod dialogs;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod platform;
pub mod processes;

pub use affinity::{set_affinity, AffinityOutcome};
pub use cpu_set::CpuSet;
pub use dialogs::DialogPresenter;
pub use error::{AffinityError, AffinityResult};
pub use orchestrator::{run, RunReport};
pub use processes::{ProcessRecord, ProcessTable, SystemProcessTable};
