#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # addrdb-entities
//!
//! Domain entities of the address directory.
//!
//! Plain data types and the functionality that belongs to them, free
//! of any storage or transport concerns.

pub mod address;
pub mod geo;
pub mod id;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
