pub use addrdb_core::{entities, repositories, usecases};

pub mod prelude {

    pub use addrdb_application::error::*;

    pub use super::{entities::*, repositories::*};
}
