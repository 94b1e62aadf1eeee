use super::*;

pub fn create_address(
    connections: &sqlite::Connections,
    new_address: usecases::NewAddress,
) -> Result<AddressRecord> {
    let record = connections
        .exclusive()?
        .transaction(|conn| usecases::create_address(conn, new_address))?;
    info!("Created address {}", record.id);
    Ok(record)
}
