//! The business logic of the address directory.
//!
//! All use cases are implemented against the abstract
//! [`repositories`], so they can be tested without a
//! real database.

pub mod repositories;
pub mod usecases;

pub mod entities {
    pub use addrdb_entities::{address::*, geo::*, id::*};
}
