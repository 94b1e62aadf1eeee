// Storage access traits. A repository owns the persistence of one
// entity and hands out records by id, without pulling in any other
// entity.

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait AddressRepo {
    fn create_address(&self, address: &Address) -> Result<AddressRecord>;
    fn update_address(&self, record: &AddressRecord) -> Result<()>;
    fn delete_address(&self, id: Id) -> Result<()>;

    fn get_address(&self, id: Id) -> Result<AddressRecord>;
    fn all_addresses(&self) -> Result<Vec<AddressRecord>>;
    fn count_addresses(&self) -> Result<usize>;
}
