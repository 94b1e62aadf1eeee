use super::*;
use addrdb_entities as e;

impl From<e::address::AddressRecord> for Address {
    fn from(from: e::address::AddressRecord) -> Self {
        let e::address::AddressRecord { id, address } = from;
        let e::address::Address {
            street,
            city,
            state,
            country,
            pos,
        } = address;
        let (lat, lng) = pos.to_lat_lng_deg();
        Self {
            id: id.into(),
            street,
            city,
            state,
            country,
            lat,
            lng,
        }
    }
}
