use freq_core::FreqError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] FreqError),

    #[error("time step must be positive and finite, got {0}")]
    InvalidStep(f32),

    #[error("run duration must be finite, got {0}")]
    InvalidDuration(f32),

    #[error("simulation still in phase {phase} after {ticks} ticks")]
    Incomplete {
        ticks: u64,
        phase: freq_core::Phase,
    },
}

pub type SimResult<T> = Result<T, SimError>;
