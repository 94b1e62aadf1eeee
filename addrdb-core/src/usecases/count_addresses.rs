use super::prelude::*;

pub fn count_addresses<R: AddressRepo>(repo: &R) -> Result<usize> {
    Ok(repo.count_addresses()?)
}
