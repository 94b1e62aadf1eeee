use super::*;

pub fn update_address(
    connections: &sqlite::Connections,
    id: Id,
    update: usecases::AddressUpdate,
) -> Result<AddressRecord> {
    let record = connections
        .exclusive()?
        .transaction(|conn| usecases::update_address(conn, id, update))?;
    info!("Updated address {}", record.id);
    Ok(record)
}
