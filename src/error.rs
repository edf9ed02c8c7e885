use thiserror::Error;

#[derive(Debug, Error)]
pub enum PowBenchError {
    #[error("invalid operand range [{low}, {high})")]
    InvalidRange { low: f64, high: f64 },
    #[error("invalid POWBENCH_SEED value: {0}")]
    InvalidSeed(String),
    #[error("invalid POWBENCH_SINK value: {0}")]
    InvalidSink(String),
    #[error("invalid POWBENCH_PROFILE value: {0}")]
    InvalidProfile(String),
    #[error("sink write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PowBenchError>;
