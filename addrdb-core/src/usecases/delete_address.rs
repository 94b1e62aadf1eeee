use super::prelude::*;

pub fn delete_address<R: AddressRepo>(repo: &R, id: Id) -> Result<()> {
    log::debug!("Deleting address {id}");
    Ok(repo.delete_address(id)?)
}
