use super::*;
use rocket::put;

#[post("/addresses", data = "<new_address>")]
pub fn post_address(
    db: sqlite::Connections,
    new_address: JsonResult<json::NewAddress>,
) -> Result<json::Address> {
    let new_address = from_json::new_address(new_address?.into_inner());
    let record = flows::create_address(&db, new_address)?;
    Ok(Json(record.into()))
}

#[get("/addresses/<id>")]
pub fn get_address(db: sqlite::Connections, id: i64) -> Result<json::Address> {
    let record = {
        let db = db.shared()?;
        usecases::get_address(&db, Id::from(id))?
    };
    Ok(Json(record.into()))
}

#[put("/addresses/<id>", data = "<update>")]
pub fn put_address(
    db: sqlite::Connections,
    id: i64,
    update: JsonResult<json::UpdateAddress>,
) -> Result<json::Address> {
    let update = from_json::address_update(update?.into_inner());
    let record = flows::update_address(&db, Id::from(id), update)?;
    Ok(Json(record.into()))
}

#[delete("/addresses/<id>")]
pub fn delete_address(db: sqlite::Connections, id: i64) -> Result<()> {
    flows::delete_address(&db, Id::from(id))?;
    Ok(Json(()))
}

#[get("/addresses?<lat>&<lng>&<radius_km>")]
pub fn get_addresses_within_distance(
    db: sqlite::Connections,
    lat: f64,
    lng: f64,
    radius_km: f64,
) -> Result<Vec<json::Address>> {
    let center = MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(ParameterError::InvalidPosition)?;
    let max_distance = Distance::from_kilometers(radius_km);
    let records = {
        let db = db.shared()?;
        usecases::addresses_within_distance(&db, center, max_distance)?
    };
    Ok(Json(records.into_iter().map(Into::into).collect()))
}
