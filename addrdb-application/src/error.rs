use thiserror::Error;

use addrdb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        Self::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> Self {
        // Repository errors stay distinguishable from invalid
        // parameters, e.g. to report missing records as not found.
        match err {
            ParameterError::Repo(err) => Self::Business(BError::Repo(err)),
            err => Self::Business(BError::Parameter(err)),
        }
    }
}
