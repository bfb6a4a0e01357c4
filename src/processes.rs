use sysinfo::{CpuRefreshKind, PidExt, ProcessExt, ProcessRefreshKind, RefreshKind, System, SystemExt};

use crate::cpu_set::CpuSet;
use crate::error::AffinityResult;
use crate::platform::set_process_affinity;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
}

pub trait ProcessTable {
    fn processes(&self) -> Vec<ProcessRecord>;
    /// Fails with `NoSuchProcess` if `pid` exited after enumeration.
    fn set_affinity(&self, pid: u32, cpus: &CpuSet) -> AffinityResult<()>;
    fn logical_cpu_count(&self) -> usize;
}

#[derive(Debug, Default)]
pub struct SystemProcessTable;

impl SystemProcessTable {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessTable for SystemProcessTable {
    fn processes(&self) -> Vec<ProcessRecord> {
        let mut sys = System::new_with_specifics(
            RefreshKind::new().with_processes(ProcessRefreshKind::new()),
        );
        sys.refresh_processes_specifics(ProcessRefreshKind::new());

        sys.processes()
            .iter()
            .map(|(pid, proc_)| ProcessRecord {
                pid: pid.as_u32(),
                name: proc_.name().to_string(),
            })
            .collect()
    }

    fn set_affinity(&self, pid: u32, cpus: &CpuSet) -> AffinityResult<()> {
        set_process_affinity(pid, cpus)
    }

    fn logical_cpu_count(&self) -> usize {
        let mut sys = System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::new()));
        sys.refresh_cpu_specifics(CpuRefreshKind::new());
        sys.cpus().len()
    }
}

// Lowest pid wins among same-named processes
pub fn find_by_name<'a>(processes: &'a [ProcessRecord], name: &str) -> Option<&'a ProcessRecord> {
    processes
        .iter()
        .filter(|proc_| proc_.name == name)
        .min_by_key(|proc_| proc_.pid)
}
