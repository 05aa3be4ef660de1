use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("solver returned unknown for profile {profile} with alternative {alternative}")]
    SolverUnknown { profile: usize, alternative: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
