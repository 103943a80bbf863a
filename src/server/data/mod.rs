//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models so the service layer never sees raw rows or unparsed role/status strings.
//!
//! The class, cart, and enrollment repositories are generic over `ConnectionTrait` so the
//! enrollment service can run them against either the connection pool or an open
//! transaction.

pub mod account;
pub mod cart;
pub mod class;
pub mod enrollment;

#[cfg(test)]
mod test;
