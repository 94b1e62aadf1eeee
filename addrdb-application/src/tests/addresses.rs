use super::prelude::*;
use crate::error::BError;

#[test]
fn create_address_and_read_it_back() {
    let fixture = BackendFixture::new();
    let record = flows::create_address(
        &fixture.db_connections,
        new_address("Marienstr. 12", "Stuttgart", 48.7755, 9.1827),
    )
    .unwrap();
    let stored = fixture
        .db_connections
        .shared()
        .unwrap()
        .get_address(record.id)
        .unwrap();
    assert_eq!(record, stored);
    assert_eq!("Stuttgart", stored.address.city);
    assert_eq!(
        MapPoint::from_lat_lng_deg(48.7755, 9.1827),
        stored.address.pos
    );
}

#[test]
fn create_address_with_invalid_position() {
    let fixture = BackendFixture::new();
    let res = flows::create_address(
        &fixture.db_connections,
        new_address("Nullweg 1", "Nirgendwo", 91.0, 200.0),
    );
    match res {
        Err(AppError::Business(BError::Parameter(usecases::Error::InvalidPosition))) => {}
        res => panic!("Unexpected result: {res:?}"),
    }
    assert_eq!(
        0,
        fixture
            .db_connections
            .shared()
            .unwrap()
            .count_addresses()
            .unwrap()
    );
}

#[test]
fn update_address_partially() {
    let fixture = BackendFixture::new();
    let created = flows::create_address(
        &fixture.db_connections,
        new_address("Marienstr. 12", "Stuttgart", 48.7755, 9.1827),
    )
    .unwrap();
    let update = usecases::AddressUpdate {
        city: Some("Esslingen".into()),
        ..Default::default()
    };
    let updated = flows::update_address(&fixture.db_connections, created.id, update).unwrap();
    assert_eq!("Esslingen", updated.address.city);
    assert_eq!(created.address.street, updated.address.street);
    assert_eq!(created.address.pos, updated.address.pos);
    let stored = fixture
        .db_connections
        .shared()
        .unwrap()
        .get_address(created.id)
        .unwrap();
    assert_eq!(updated, stored);
}

#[test]
fn update_address_position() {
    let fixture = BackendFixture::new();
    let created = flows::create_address(
        &fixture.db_connections,
        new_address("Marienstr. 12", "Stuttgart", 48.7755, 9.1827),
    )
    .unwrap();
    let update = usecases::AddressUpdate {
        lat: Some(49.4874),
        lng: Some(8.4661),
        ..Default::default()
    };
    let updated = flows::update_address(&fixture.db_connections, created.id, update).unwrap();
    assert_eq!(
        MapPoint::from_lat_lng_deg(49.4874, 8.4661),
        updated.address.pos
    );
    let stored = fixture
        .db_connections
        .shared()
        .unwrap()
        .get_address(created.id)
        .unwrap();
    assert_eq!(updated, stored);
}

#[test]
fn delete_address_and_fail_to_read_it_back() {
    let fixture = BackendFixture::new();
    let created = flows::create_address(
        &fixture.db_connections,
        new_address("Marienstr. 12", "Stuttgart", 48.7755, 9.1827),
    )
    .unwrap();
    flows::delete_address(&fixture.db_connections, created.id).unwrap();
    match fixture
        .db_connections
        .shared()
        .unwrap()
        .get_address(created.id)
    {
        Err(RepoError::NotFound) => {}
        res => panic!("Unexpected result: {res:?}"),
    };
}

#[test]
fn delete_missing_address() {
    let fixture = BackendFixture::new();
    match flows::delete_address(&fixture.db_connections, Id::from(4711)) {
        Err(AppError::Business(BError::Repo(RepoError::NotFound))) => {}
        res => panic!("Unexpected result: {res:?}"),
    }
}

#[test]
fn search_addresses_within_distance() {
    let fixture = BackendFixture::new();
    for (street, city, lat, lng) in [
        ("Königstr. 1", "Stuttgart", 48.7784, 9.1800),
        ("Planken 2", "Mannheim", 49.4874, 8.4661),
        ("Marienplatz 8", "München", 48.1374, 11.5755),
    ] {
        flows::create_address(&fixture.db_connections, new_address(street, city, lat, lng))
            .unwrap();
    }
    let center = MapPoint::from_lat_lng_deg(48.7755, 9.1827);
    let results = usecases::addresses_within_distance(
        &fixture.db_connections.shared().unwrap(),
        center,
        Distance::from_kilometers(100.0),
    )
    .unwrap();
    let cities: Vec<_> = results.iter().map(|r| r.address.city.as_str()).collect();
    assert_eq!(vec!["Stuttgart", "Mannheim"], cities);
}
