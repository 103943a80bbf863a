//! HTTP request handlers.
//!
//! Controllers authenticate the request through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert DTOs to parameter models, call one service, and convert the result back to a DTO.

pub mod account;
pub mod auth;
pub mod cart;
pub mod class;
pub mod enrollment;
pub mod payment;
