//! Account data repository for database operations.
//!
//! This module provides the `AccountRepository` for managing account records. Accounts
//! are keyed by email, created on first sign-in, and only ever mutated by role changes.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, SqlErr,
};

use crate::server::{
    error::AppError,
    model::account::{Account, CreateAccountOutcome, CreateAccountParam, Role},
};

/// Repository providing database operations for account management.
pub struct AccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountRepository<'a> {
    /// Creates a new AccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccountRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an account with the default role unless one already exists for the email.
    ///
    /// An existing account is returned untouched. A unique-key violation raised by a
    /// concurrent insert of the same email is reported the same way.
    ///
    /// # Arguments
    /// - `param` - Email, display name, and optional photo of the new account
    ///
    /// # Returns
    /// - `Ok(CreateAccountOutcome::Created)` - A new account was inserted
    /// - `Ok(CreateAccountOutcome::AlreadyExists)` - The email was already registered
    /// - `Err(AppError)` - Database error during lookup or insert
    pub async fn create(&self, param: CreateAccountParam) -> Result<CreateAccountOutcome, AppError> {
        if let Some(existing) = self.find_by_email(&param.email).await? {
            return Ok(CreateAccountOutcome::AlreadyExists(existing));
        }

        let result = entity::prelude::Account::insert(entity::account::ActiveModel {
            email: ActiveValue::Set(param.email.clone()),
            name: ActiveValue::Set(param.name),
            photo_url: ActiveValue::Set(param.photo_url),
            role: ActiveValue::Set(Role::default().as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .exec_with_returning(self.db)
        .await;

        match result {
            Ok(entity) => Ok(CreateAccountOutcome::Created(Account::from_entity(entity)?)),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                let existing = self.find_by_email(&param.email).await?.ok_or_else(|| {
                    AppError::NotFound(format!("Account {} not found", param.email))
                })?;
                Ok(CreateAccountOutcome::AlreadyExists(existing))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Finds an account by email.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account registered under this email
    /// - `Err(AppError)` - Database error or unparsable stored role
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        entity::prelude::Account::find_by_id(email.to_string())
            .one(self.db)
            .await?
            .map(Account::from_entity)
            .transpose()
    }

    /// Gets every account, oldest first.
    pub async fn get_all(&self) -> Result<Vec<Account>, AppError> {
        entity::prelude::Account::find()
            .order_by_asc(entity::account::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Account::from_entity)
            .collect()
    }

    /// Gets accounts holding `role`, oldest first, optionally capped at `limit` rows.
    pub async fn get_by_role(&self, role: Role, limit: Option<u64>) -> Result<Vec<Account>, AppError> {
        entity::prelude::Account::find()
            .filter(entity::account::Column::Role.eq(role.as_str()))
            .order_by_asc(entity::account::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Account::from_entity)
            .collect()
    }

    /// Sets the role of an account.
    ///
    /// # Returns
    /// - `Ok(true)` - Role updated
    /// - `Ok(false)` - No account registered under this email
    /// - `Err(AppError)` - Database error during update
    pub async fn set_role(&self, email: &str, role: Role) -> Result<bool, AppError> {
        let result = entity::prelude::Account::update_many()
            .filter(entity::account::Column::Email.eq(email))
            .col_expr(
                entity::account::Column::Role,
                sea_orm::sea_query::Expr::value(role.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
