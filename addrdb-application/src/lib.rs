#[macro_use]
extern crate log;

mod create_address;
mod delete_address;
mod update_address;

pub mod prelude {
    pub use super::{create_address::*, delete_address::*, update_address::*};
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use addrdb_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod sqlite {
    pub use addrdb_db_sqlite::Connections;
}
