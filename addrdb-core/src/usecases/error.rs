use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Invalid distance")]
    InvalidDistance,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
