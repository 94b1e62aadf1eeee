use super::*;

impl<'a> AddressRepo for DbReadOnly<'a> {
    fn create_address(&self, _address: &Address) -> Result<AddressRecord> {
        unreachable!();
    }
    fn update_address(&self, _record: &AddressRecord) -> Result<()> {
        unreachable!();
    }
    fn delete_address(&self, _id: Id) -> Result<()> {
        unreachable!();
    }

    fn get_address(&self, id: Id) -> Result<AddressRecord> {
        get_address(&mut self.conn.borrow_mut(), id)
    }
    fn all_addresses(&self) -> Result<Vec<AddressRecord>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<usize> {
        count_addresses(&mut self.conn.borrow_mut())
    }
}

impl<'a> AddressRepo for DbReadWrite<'a> {
    fn create_address(&self, address: &Address) -> Result<AddressRecord> {
        create_address(&mut self.conn.borrow_mut(), address)
    }
    fn update_address(&self, record: &AddressRecord) -> Result<()> {
        update_address(&mut self.conn.borrow_mut(), record)
    }
    fn delete_address(&self, id: Id) -> Result<()> {
        delete_address(&mut self.conn.borrow_mut(), id)
    }

    fn get_address(&self, id: Id) -> Result<AddressRecord> {
        get_address(&mut self.conn.borrow_mut(), id)
    }
    fn all_addresses(&self) -> Result<Vec<AddressRecord>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<usize> {
        count_addresses(&mut self.conn.borrow_mut())
    }
}

impl<'a> AddressRepo for DbConnection<'a> {
    fn create_address(&self, address: &Address) -> Result<AddressRecord> {
        create_address(&mut self.conn.borrow_mut(), address)
    }
    fn update_address(&self, record: &AddressRecord) -> Result<()> {
        update_address(&mut self.conn.borrow_mut(), record)
    }
    fn delete_address(&self, id: Id) -> Result<()> {
        delete_address(&mut self.conn.borrow_mut(), id)
    }

    fn get_address(&self, id: Id) -> Result<AddressRecord> {
        get_address(&mut self.conn.borrow_mut(), id)
    }
    fn all_addresses(&self) -> Result<Vec<AddressRecord>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<usize> {
        count_addresses(&mut self.conn.borrow_mut())
    }
}

fn create_address(conn: &mut SqliteConnection, address: &Address) -> Result<AddressRecord> {
    let new_address = models::NewAddress::from(address);
    diesel::insert_into(schema::addresses::table)
        .values(&new_address)
        .execute(conn)
        .map_err(from_diesel_err)?;
    let rowid = diesel::select(last_insert_rowid())
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    Ok(AddressRecord {
        id: Id::from(rowid),
        address: address.clone(),
    })
}

fn update_address(conn: &mut SqliteConnection, record: &AddressRecord) -> Result<()> {
    use schema::addresses::dsl;
    let new_address = models::NewAddress::from(&record.address);
    if diesel::update(dsl::addresses.filter(dsl::id.eq(record.id.to_inner())))
        .set(&new_address)
        .execute(conn)
        .map_err(from_diesel_err)?
        == 0
    {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_address(conn: &mut SqliteConnection, id: Id) -> Result<()> {
    use schema::addresses::dsl;
    if diesel::delete(dsl::addresses.filter(dsl::id.eq(id.to_inner())))
        .execute(conn)
        .map_err(from_diesel_err)?
        == 0
    {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn get_address(conn: &mut SqliteConnection, id: Id) -> Result<AddressRecord> {
    use schema::addresses::dsl;
    Ok(dsl::addresses
        .filter(dsl::id.eq(id.to_inner()))
        .first::<models::AddressEntity>(conn)
        .map_err(from_diesel_err)?
        .into())
}

fn all_addresses(conn: &mut SqliteConnection) -> Result<Vec<AddressRecord>> {
    use schema::addresses::dsl;
    Ok(dsl::addresses
        .order_by(dsl::id)
        .load::<models::AddressEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn count_addresses(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::addresses::dsl;
    Ok(dsl::addresses
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}
