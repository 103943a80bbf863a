//! Request authentication and role authorization.
//!
//! Controllers build an [`AuthGuard`] from the request headers and either call
//! [`AuthGuard::authenticate`] for routes that only need a verified identity, or
//! [`AuthGuard::require`] with the roles the route demands.

use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::account::AccountRepository,
    error::{auth::AuthError, AppError},
    model::{
        account::{Account, Role},
        auth::Identity,
    },
    service::token::TokenService,
};

pub enum Permission {
    Admin,
    Instructor,
}

impl Permission {
    fn role(&self) -> Role {
        match self {
            Self::Admin => Role::Admin,
            Self::Instructor => Role::Instructor,
        }
    }
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Verifies the request's `Authorization: Bearer <token>` header.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Email and claims carried by a valid, unexpired credential
    /// - `Err(AuthError::MissingCredential)` - No `Authorization` header
    /// - `Err(AuthError::MalformedCredential)` - Header is not a bearer credential
    /// - `Err(AuthError::InvalidCredential)` - Bad signature, encoding, or expired token
    pub fn authenticate(&self) -> Result<Identity, AuthError> {
        let Some(header) = self.headers.get(AUTHORIZATION) else {
            return Err(AuthError::MissingCredential);
        };

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MalformedCredential)?;

        self.tokens.authenticate(token)
    }

    /// Authenticates the request and checks the caller holds every listed role.
    ///
    /// With no permissions listed, the caller only needs a registered account.
    ///
    /// # Returns
    /// - `Ok(Account)` - The caller's account
    /// - `Err(AppError::AuthErr(..))` - Authentication failed, or the caller's account is
    ///   missing or lacks a required role
    pub async fn require(&self, permissions: &[Permission]) -> Result<Account, AppError> {
        let identity = self.authenticate()?;

        let mut account = None;
        for permission in permissions {
            account = Some(authorize_role(self.db, &identity, permission.role()).await?);
        }

        match account {
            Some(account) => Ok(account),
            None => AccountRepository::new(self.db)
                .find_by_email(&identity.email)
                .await?
                .ok_or_else(|| {
                    AuthError::AccessDenied {
                        email: identity.email,
                        required: Role::default(),
                    }
                    .into()
                }),
        }
    }
}

/// Checks that the identity's account holds `role`.
///
/// A missing account and a different role both produce the same `AccessDenied` error.
///
/// # Returns
/// - `Ok(Account)` - The caller's account, holding `role`
/// - `Err(AppError::AuthErr(AccessDenied))` - No account, or a different role
/// - `Err(AppError)` - Database error during lookup
pub async fn authorize_role(
    db: &DatabaseConnection,
    identity: &Identity,
    role: Role,
) -> Result<Account, AppError> {
    let account = AccountRepository::new(db).find_by_email(&identity.email).await?;

    match account {
        Some(account) if account.role == role => Ok(account),
        _ => Err(AuthError::AccessDenied {
            email: identity.email.clone(),
            required: role,
        }
        .into()),
    }
}
