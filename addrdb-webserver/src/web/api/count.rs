use super::*;

#[get("/count/addresses")]
pub fn get_count_addresses(db: sqlite::Connections) -> Result<json::ResultCount> {
    let count = {
        let db = db.shared()?;
        usecases::count_addresses(&db)?
    };
    Ok(Json(json::ResultCount {
        count: count as u64,
    }))
}
