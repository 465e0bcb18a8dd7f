use mow_core::MowerId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("mower {0} appears more than once in the fleet")]
    DuplicateMower(MowerId),
}

pub type SimResult<T> = Result<T, SimError>;
