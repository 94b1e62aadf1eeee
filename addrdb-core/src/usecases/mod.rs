mod addresses_within_distance;
mod count_addresses;
mod create_address;
mod delete_address;
mod error;
mod get_address;
mod update_address;

#[cfg(test)]
pub mod tests;

pub use self::{
    addresses_within_distance::*, count_addresses::*, create_address::*, delete_address::*,
    error::Error, get_address::*, update_address::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
