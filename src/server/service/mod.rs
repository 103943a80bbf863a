//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, ownership checks, and the enrollment ledger rules
//! - **Orchestration**: Coordinating multiple repository calls and the payment processor
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running the enrollment transition as one transaction

pub mod account;
pub mod cart;
pub mod class;
pub mod enrollment;
pub mod payment;
pub mod token;
