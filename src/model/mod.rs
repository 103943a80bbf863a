//! Data transfer objects exchanged over the HTTP API.
//!
//! Every type here is a plain serde struct describing a JSON request or response
//! body. Server-side domain models convert into these at the controller boundary.

pub mod account;
pub mod api;
pub mod cart;
pub mod class;
pub mod enrollment;
pub mod payment;
