//! Account domain models and parameters.
//!
//! An account is keyed by email and carries exactly one role from the closed set
//! `student`, `instructor`, `admin`. Accounts are created on first sign-in with the
//! `student` role and only change through role assignment.

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

use crate::{
    model::account::{AccountDto, CreateAccountDto},
    server::error::{internal::InternalError, AppError},
};

/// Role held by an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Role {
    #[default]
    Student,
    Instructor,
    Admin,
}

impl Role {
    /// Stored and serialized representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AppError;

    /// Parses a role name as it appears in request paths and query strings.
    ///
    /// # Returns
    /// - `Ok(Role)` - Known role name
    /// - `Err(AppError::BadRequest)` - Name outside the closed role set
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "student" => Ok(Self::Student),
            "instructor" => Ok(Self::Instructor),
            "admin" => Ok(Self::Admin),
            other => Err(AppError::BadRequest(format!("Unknown role '{}'", other))),
        }
    }
}

/// Registered user of the application.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Converts the account domain model to a DTO for API responses.
    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            email: self.email,
            name: self.name,
            photo_url: self.photo_url,
            role: self.role.to_string(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to an account domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Account)` - The converted account
    /// - `Err(AppError::InternalErr(InvalidStoredValue))` - Stored role is not a known role
    pub fn from_entity(entity: entity::account::Model) -> Result<Self, AppError> {
        let role = entity
            .role
            .parse::<Role>()
            .map_err(|_| InternalError::InvalidStoredValue {
                column: "account.role",
                value: entity.role.clone(),
            })?;

        Ok(Self {
            email: entity.email,
            name: entity.name,
            photo_url: entity.photo_url,
            role,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for registering an account on first sign-in.
#[derive(Debug, Clone)]
pub struct CreateAccountParam {
    pub email: String,
    pub name: String,
    pub photo_url: Option<String>,
}

impl CreateAccountParam {
    pub fn from_dto(dto: CreateAccountDto) -> Self {
        Self {
            email: dto.email.trim().to_string(),
            name: dto.name,
            photo_url: dto.photo_url,
        }
    }
}

/// Outcome of an idempotent account creation.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateAccountOutcome {
    /// A new account was inserted with the default role.
    Created(Account),
    /// An account with this email already existed and was left untouched.
    AlreadyExists(Account),
}
