use super::*;

#[get("/server/version")]
pub fn get_version(state: &State<Version>) -> &'static str {
    state.0
}
