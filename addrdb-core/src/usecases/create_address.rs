use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub lat: f64,
    pub lng: f64,
}

pub fn create_address<R: AddressRepo>(repo: &R, new_address: NewAddress) -> Result<AddressRecord> {
    let NewAddress {
        street,
        city,
        state,
        country,
        lat,
        lng,
    } = new_address;
    let pos = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)?;
    let address = Address {
        street,
        city,
        state,
        country,
        pos,
    };
    log::debug!("Creating new address at {pos}");
    Ok(repo.create_address(&address)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};

    fn new_address(lat: f64, lng: f64) -> NewAddress {
        NewAddress {
            street: "Friedrichstr. 12".into(),
            city: "Berlin".into(),
            state: "Berlin".into(),
            country: "Germany".into(),
            lat,
            lng,
        }
    }

    #[test]
    fn create_with_valid_position() {
        let db = MockDb::default();
        let record = create_address(&db, new_address(52.5163, 13.3875)).unwrap();
        assert_eq!(Id::from(1), record.id);
        assert_eq!("Berlin", record.address.city);
        assert_eq!(
            MapPoint::from_lat_lng_deg(52.5163, 13.3875),
            record.address.pos
        );
        assert_eq!(record, db.get_address(record.id).unwrap());
    }

    #[test]
    fn create_with_out_of_range_position() {
        let db = MockDb::default();
        for (lat, lng) in [
            (90.000_001, 0.0),
            (-91.0, 0.0),
            (0.0, 180.000_001),
            (0.0, -181.0),
            (f64::NAN, 0.0),
            (0.0, f64::NAN),
        ] {
            match create_address(&db, new_address(lat, lng)) {
                Err(Error::InvalidPosition) => {}
                res => panic!("Unexpected result: {res:?}"),
            }
        }
        assert_eq!(0, db.count_addresses().unwrap());
    }

    #[test]
    fn create_at_position_limits() {
        let db = MockDb::default();
        for (lat, lng) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0)] {
            let record = create_address(&db, new_address(lat, lng)).unwrap();
            assert_eq!(
                MapPoint::from_lat_lng_deg(lat, lng),
                db.get_address(record.id).unwrap().address.pos
            );
        }
    }

    #[test]
    fn create_assigns_consecutive_ids() {
        let db = MockDb::default();
        let first = create_address(&db, new_address(48.0, 9.0)).unwrap();
        let second = create_address(&db, new_address(49.0, 10.0)).unwrap();
        assert_eq!(Id::from(1), first.id);
        assert_eq!(Id::from(2), second.id);
    }
}
