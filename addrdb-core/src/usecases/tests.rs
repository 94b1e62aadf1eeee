use std::cell::RefCell;

use crate::{
    entities::*,
    repositories::{AddressRepo, Error as RepoError},
};

type Result<T> = std::result::Result<T, RepoError>;

#[derive(Debug, Default)]
pub struct MockDb {
    pub addresses: RefCell<Vec<AddressRecord>>,
}

// Mimics the rowid assignment of the real store.
fn next_id(records: &[AddressRecord]) -> Id {
    let max = records.iter().map(|r| r.id.to_inner()).max().unwrap_or(0);
    Id::from(max + 1)
}

impl AddressRepo for MockDb {
    fn create_address(&self, address: &Address) -> Result<AddressRecord> {
        let mut records = self.addresses.borrow_mut();
        let record = AddressRecord {
            id: next_id(&records),
            address: address.clone(),
        };
        records.push(record.clone());
        Ok(record)
    }

    fn update_address(&self, record: &AddressRecord) -> Result<()> {
        let mut records = self.addresses.borrow_mut();
        if let Some(idx) = records.iter().position(|r| r.id == record.id) {
            records[idx] = record.clone();
            Ok(())
        } else {
            Err(RepoError::NotFound)
        }
    }

    fn delete_address(&self, id: Id) -> Result<()> {
        let mut records = self.addresses.borrow_mut();
        if let Some(idx) = records.iter().position(|r| r.id == id) {
            records.remove(idx);
            Ok(())
        } else {
            Err(RepoError::NotFound)
        }
    }

    fn get_address(&self, id: Id) -> Result<AddressRecord> {
        self.addresses
            .borrow()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn all_addresses(&self) -> Result<Vec<AddressRecord>> {
        Ok(self.addresses.borrow().clone())
    }

    fn count_addresses(&self) -> Result<usize> {
        self.all_addresses().map(|records| records.len())
    }
}
