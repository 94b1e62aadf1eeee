pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::address_builder::*;

pub mod address_builder {

    use super::*;
    use crate::{address::*, geo::*, id::*};

    #[derive(Debug)]
    pub struct AddressRecordBuild {
        record: AddressRecord,
    }

    impl AddressRecordBuild {
        pub fn id(mut self, id: IdValue) -> Self {
            self.record.id = id.into();
            self
        }
        pub fn street(mut self, x: &str) -> Self {
            self.record.address.street = x.into();
            self
        }
        pub fn city(mut self, x: &str) -> Self {
            self.record.address.city = x.into();
            self
        }
        pub fn state(mut self, x: &str) -> Self {
            self.record.address.state = x.into();
            self
        }
        pub fn country(mut self, x: &str) -> Self {
            self.record.address.country = x.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.record.address.pos = pos;
            self
        }
        pub fn finish(self) -> AddressRecord {
            self.record
        }
    }

    impl Builder for AddressRecord {
        type Build = AddressRecordBuild;
        fn build() -> Self::Build {
            AddressRecordBuild {
                record: AddressRecord {
                    id: Id::from(0),
                    address: Address {
                        pos: MapPoint::from_lat_lng_deg(0.0, 0.0),
                        ..Default::default()
                    },
                },
            }
        }
    }

    #[test]
    fn build_address_record() {
        let record = AddressRecord::build()
            .id(7)
            .street("Marienstr. 12")
            .city("Stuttgart")
            .state("BW")
            .country("Germany")
            .pos(MapPoint::from_lat_lng_deg(48.7755, 9.1827))
            .finish();
        assert_eq!(record.id, Id::from(7));
        assert_eq!(record.address.city, "Stuttgart");
        assert!(record.address.pos.is_valid());
    }
}
