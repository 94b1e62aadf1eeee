pub use addrdb_boundary::*;

use crate::core::usecases;

pub mod from_json {
    //! Conversions from JSON structs into use case input.

    use super::*;

    // Free functions instead of From impls: both sides of the
    // conversion are foreign types here.

    pub fn new_address(from: NewAddress) -> usecases::NewAddress {
        let NewAddress {
            street,
            city,
            state,
            country,
            lat,
            lng,
        } = from;
        usecases::NewAddress {
            street,
            city,
            state,
            country,
            lat,
            lng,
        }
    }

    pub fn address_update(from: UpdateAddress) -> usecases::AddressUpdate {
        let UpdateAddress {
            street,
            city,
            state,
            country,
            lat,
            lng,
        } = from;
        usecases::AddressUpdate {
            street,
            city,
            state,
            country,
            lat,
            lng,
        }
    }
}
