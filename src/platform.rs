//! OS primitive for restricting another process to a set of CPUs.

use crate::cpu_set::CpuSet;
use crate::error::{AffinityError, AffinityResult};

#[cfg(windows)]
pub fn set_process_affinity(pid: u32, cpus: &CpuSet) -> AffinityResult<()> {
    use std::io;
    use winapi::shared::winerror::ERROR_INVALID_PARAMETER;
    use winapi::um::{
        handleapi::CloseHandle,
        processthreadsapi::OpenProcess,
        winbase::SetProcessAffinityMask,
        winnt::{PROCESS_QUERY_INFORMATION, PROCESS_SET_INFORMATION},
    };

    if cpus.is_empty() {
        return Err(AffinityError::EmptyMask);
    }
    let mask = cpus
        .to_word_mask()
        .map_err(|index| AffinityError::UnsupportedCpu { index })?;

    unsafe {
        let h_process = OpenProcess(PROCESS_SET_INFORMATION | PROCESS_QUERY_INFORMATION, 0, pid);

        if h_process.is_null() {
            let err = io::Error::last_os_error();
            // OpenProcess reports an unknown pid as an invalid parameter
            if err.raw_os_error() == Some(ERROR_INVALID_PARAMETER as i32) {
                return Err(AffinityError::NoSuchProcess { pid });
            }
            return Err(AffinityError::Os { pid, source: err });
        }

        let success = SetProcessAffinityMask(h_process, mask);
        let result = if success != 0 {
            Ok(())
        } else {
            Err(AffinityError::Os {
                pid,
                source: io::Error::last_os_error(),
            })
        };
        CloseHandle(h_process);

        result
    }
}

#[cfg(target_os = "linux")]
pub fn set_process_affinity(pid: u32, cpus: &CpuSet) -> AffinityResult<()> {
    use std::{io, mem};

    if cpus.is_empty() {
        return Err(AffinityError::EmptyMask);
    }
    if let Some(index) = cpus.iter().find(|&i| i >= libc::CPU_SETSIZE as usize) {
        return Err(AffinityError::UnsupportedCpu { index });
    }
    let raw_pid = libc::pid_t::try_from(pid).map_err(|_| AffinityError::NoSuchProcess { pid })?;
    // pid 0 would target ourselves
    if raw_pid == 0 {
        return Err(AffinityError::NoSuchProcess { pid });
    }

    unsafe {
        let mut set: libc::cpu_set_t = mem::zeroed();
        libc::CPU_ZERO(&mut set);
        for index in cpus.iter() {
            libc::CPU_SET(index, &mut set);
        }
        if libc::sched_setaffinity(raw_pid, mem::size_of::<libc::cpu_set_t>(), &set) != 0 {
            let err = io::Error::last_os_error();
            if err.raw_os_error() == Some(libc::ESRCH) {
                return Err(AffinityError::NoSuchProcess { pid });
            }
            return Err(AffinityError::Os { pid, source: err });
        }
    }

    Ok(())
}

#[cfg(not(any(windows, target_os = "linux")))]
pub fn set_process_affinity(pid: u32, cpus: &CpuSet) -> AffinityResult<()> {
    tracing::debug!(pid, cpus = %cpus, "process affinity not supported on this platform");
    Err(AffinityError::Unsupported)
}
