use super::prelude::*;

/// A partial update of an address record.
///
/// Fields that are `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct AddressUpdate {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

pub fn update_address<R: AddressRepo>(
    repo: &R,
    id: Id,
    update: AddressUpdate,
) -> Result<AddressRecord> {
    let AddressUpdate {
        street,
        city,
        state,
        country,
        lat,
        lng,
    } = update;
    let mut record = repo.get_address(id)?;
    if let Some(street) = street {
        record.address.street = street;
    }
    if let Some(city) = city {
        record.address.city = city;
    }
    if let Some(state) = state {
        record.address.state = state;
    }
    if let Some(country) = country {
        record.address.country = country;
    }
    if lat.is_some() || lng.is_some() {
        // A new position is merged with the stored coordinates
        // and validated as a whole.
        let (stored_lat, stored_lng) = record.address.pos.to_lat_lng_deg();
        record.address.pos =
            MapPoint::try_from_lat_lng_deg(lat.unwrap_or(stored_lat), lng.unwrap_or(stored_lng))
                .ok_or(Error::InvalidPosition)?;
    }
    log::debug!("Updating address {id}");
    repo.update_address(&record)?;
    Ok(record)
}
