//! Account service for business logic.
//!
//! This module provides the `AccountService` for first sign-in registration, account
//! listings, the self-only role check, and admin role changes.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::account::AccountRepository,
    error::AppError,
    model::account::{Account, CreateAccountOutcome, CreateAccountParam, Role},
};

/// Service providing business logic for account management.
pub struct AccountService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    /// Creates a new AccountService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccountService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers an account on first sign-in.
    ///
    /// Idempotent by email: registering an existing email returns
    /// `CreateAccountOutcome::AlreadyExists` and changes nothing.
    ///
    /// # Returns
    /// - `Ok(CreateAccountOutcome)` - Created or already existing account
    /// - `Err(AppError::BadRequest)` - Email or name is blank
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn register(&self, param: CreateAccountParam) -> Result<CreateAccountOutcome, AppError> {
        if param.email.trim().is_empty() {
            return Err(AppError::BadRequest("Email is required".to_string()));
        }
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        let outcome = AccountRepository::new(self.db).create(param).await?;

        if let CreateAccountOutcome::Created(account) = &outcome {
            tracing::info!("Registered account {}", account.email);
        }

        Ok(outcome)
    }

    /// Gets every registered account.
    pub async fn get_all(&self) -> Result<Vec<Account>, AppError> {
        AccountRepository::new(self.db).get_all().await
    }

    /// Gets instructor accounts, optionally capped at `limit`.
    pub async fn get_instructors(&self, limit: Option<u64>) -> Result<Vec<Account>, AppError> {
        AccountRepository::new(self.db)
            .get_by_role(Role::Instructor, limit)
            .await
    }

    /// Checks whether `email` holds `role`, answering only for the caller's own email.
    ///
    /// Asking about any other email yields `false` without touching the store, as does
    /// an email with no account.
    ///
    /// # Arguments
    /// - `caller_email` - Email of the authenticated identity
    /// - `email` - Email being asked about
    /// - `role` - Role to test for
    pub async fn has_role(&self, caller_email: &str, email: &str, role: Role) -> Result<bool, AppError> {
        if caller_email != email {
            return Ok(false);
        }

        let account = AccountRepository::new(self.db).find_by_email(email).await?;

        Ok(account.is_some_and(|account| account.role == role))
    }

    /// Sets the role of an existing account and returns the updated account.
    ///
    /// # Returns
    /// - `Ok(Account)` - Account with its new role
    /// - `Err(AppError::NotFound)` - No account registered under this email
    pub async fn set_role(&self, email: &str, role: Role) -> Result<Account, AppError> {
        let repo = AccountRepository::new(self.db);

        if !repo.set_role(email, role).await? {
            return Err(AppError::NotFound(format!("Account {} not found", email)));
        }

        tracing::info!("Set role of {} to {}", email, role);

        repo.find_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Account {} not found", email)))
    }
}
