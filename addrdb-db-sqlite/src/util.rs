use addrdb_core::entities::*;

use super::models;

impl<'a> From<&'a Address> for models::NewAddress<'a> {
    fn from(from: &'a Address) -> Self {
        let Address {
            street,
            city,
            state,
            country,
            pos,
        } = from;
        Self {
            street,
            city,
            state,
            country,
            lat: pos.lat().to_deg(),
            lng: pos.lng().to_deg(),
        }
    }
}

impl From<models::AddressEntity> for AddressRecord {
    fn from(from: models::AddressEntity) -> Self {
        let models::AddressEntity {
            id,
            street,
            city,
            state,
            country,
            lat,
            lng,
        } = from;
        // Records with corrupt coordinates are loaded with an
        // invalid position instead of failing the whole query.
        let pos = MapPoint::try_from_lat_lng_deg(lat, lng).unwrap_or_default();
        Self {
            id: Id::from(id),
            address: Address {
                street,
                city,
                state,
                country,
                pos,
            },
        }
    }
}
