use super::prelude::*;

/// Finds all addresses within the given distance around a center.
///
/// The distance to the center is compared inclusively, i.e. an
/// address at exactly `max_distance` is part of the result. Results
/// are returned in storage order and are not sorted by distance.
pub fn addresses_within_distance<R: AddressRepo>(
    repo: &R,
    center: MapPoint,
    max_distance: Distance,
) -> Result<Vec<AddressRecord>> {
    if !max_distance.is_valid() {
        return Err(Error::InvalidDistance);
    }
    debug_assert!(center.is_valid());
    let records = repo.all_addresses()?;
    Ok(records
        .into_iter()
        .filter(|record| {
            MapPoint::distance(center, record.address.pos)
                .map(|distance| distance <= max_distance)
                .unwrap_or(false)
        })
        .collect())
}
