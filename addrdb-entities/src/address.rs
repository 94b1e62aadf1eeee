use crate::{geo::MapPoint, id::Id};

/// A postal address together with its geographical position.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street  : String,
    pub city    : String,
    pub state   : String,
    pub country : String,
    pub pos     : MapPoint,
}

/// An address as stored, i.e. with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressRecord {
    pub id: Id,
    pub address: Address,
}
