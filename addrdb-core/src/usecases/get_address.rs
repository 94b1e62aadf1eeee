use super::prelude::*;

pub fn get_address<R: AddressRepo>(repo: &R, id: Id) -> Result<AddressRecord> {
    Ok(repo.get_address(id)?)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::MockDb, *};
    use crate::repositories::Error as RepoError;
    use addrdb_entities::builders::*;

    #[test]
    fn get_existing_address() {
        let db = MockDb::default();
        let record = AddressRecord::build()
            .id(5)
            .city("Stuttgart")
            .pos(MapPoint::from_lat_lng_deg(48.7755, 9.1827))
            .finish();
        db.addresses.borrow_mut().push(record.clone());
        assert_eq!(record, get_address(&db, Id::from(5)).unwrap());
    }

    #[test]
    fn get_missing_address() {
        let db = MockDb::default();
        match get_address(&db, Id::from(99)) {
            Err(Error::Repo(RepoError::NotFound)) => {}
            res => panic!("Unexpected result: {res:?}"),
        }
    }
}
