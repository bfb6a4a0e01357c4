use thiserror::Error;

#[derive(Error, Debug)]
pub enum AffinityError {
    #[error("process no longer exists (pid={pid})")]
    NoSuchProcess { pid: u32 },

    #[error("{source} (pid={pid})")]
    Os {
        pid: u32,
        #[source]
        source: std::io::Error,
    },

    #[error("CPU index {index} cannot be expressed in an affinity mask on this platform")]
    UnsupportedCpu { index: usize },

    #[error("affinity mask contains no CPUs")]
    EmptyMask,

    #[error("setting process affinity is not supported on this platform")]
    Unsupported,
}

pub type AffinityResult<T> = Result<T, AffinityError>;
