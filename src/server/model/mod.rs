//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Role and status strings stored in
//! the database are parsed into closed enums here, so the service layer never handles
//! raw strings.

pub mod account;
pub mod auth;
pub mod cart;
pub mod class;
pub mod enrollment;
