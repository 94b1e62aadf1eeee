use super::*;

pub fn delete_address(connections: &sqlite::Connections, id: Id) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_address(conn, id))?;
    info!("Deleted address {id}");
    Ok(())
}
