use super::*;

use crate::server::model::auth::Identity;

fn identity(email: &str) -> Identity {
    Identity {
        email: email.to_string(),
        claims: Map::new(),
    }
}

/// Tests authorizing an account that holds the required role.
///
/// Expected: Ok(Account)
#[tokio::test]
async fn grants_matching_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;

    let account = authorize_role(db, &identity(&admin.email), Role::Admin).await?;

    assert_eq!(account.email, admin.email);

    Ok(())
}

/// Tests that a missing account and a role mismatch are indistinguishable.
///
/// Verifies that both cases produce `AccessDenied` and render the same 403 response
/// body, so callers cannot probe which emails are registered.
///
/// Expected: Err(AccessDenied) with identical responses
#[tokio::test]
async fn denies_missing_account_and_wrong_role_identically() -> Result<(), AppError> {
    use axum::response::IntoResponse;

    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::create_account(db).await?;

    let wrong_role = authorize_role(db, &identity(&student.email), Role::Admin).await;
    let missing = authorize_role(db, &identity("ghost@example.com"), Role::Admin).await;

    let (Err(wrong_role), Err(missing)) = (wrong_role, missing) else {
        panic!("both lookups should be denied");
    };
    assert!(matches!(
        wrong_role,
        AppError::AuthErr(AuthError::AccessDenied { .. })
    ));
    assert!(matches!(
        missing,
        AppError::AuthErr(AuthError::AccessDenied { .. })
    ));

    let wrong_role = wrong_role.into_response();
    let missing = missing.into_response();
    assert_eq!(wrong_role.status(), missing.status());

    let wrong_role_body = axum::body::to_bytes(wrong_role.into_body(), usize::MAX)
        .await
        .unwrap();
    let missing_body = axum::body::to_bytes(missing.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(wrong_role_body, missing_body);

    Ok(())
}
