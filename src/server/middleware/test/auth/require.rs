use super::*;

/// Tests an admin passing the admin permission check.
///
/// Expected: Ok(Account) with role Admin
#[tokio::test]
async fn grants_access_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let admin = factory::create_admin(db).await?;
    let headers = bearer_headers(&tokens, &admin.email);

    let account = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(account.email, admin.email);
    assert_eq!(account.role, Role::Admin);

    Ok(())
}

/// Tests an instructor requesting an admin-only operation.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_instructor_admin_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let instructor = factory::create_instructor(db).await?;
    let headers = bearer_headers(&tokens, &instructor.email);

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}

/// Tests an unauthenticated request to a role-guarded operation.
///
/// Verifies that authentication is checked before any role lookup.
///
/// Expected: Err(MissingCredential)
#[tokio::test]
async fn authenticates_before_checking_roles() {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Instructor])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingCredential))
    ));
}

/// Tests requiring only a registered account.
///
/// Expected: Ok for a registered student, Err(AccessDenied) for an unknown email
#[tokio::test]
async fn empty_permissions_require_registered_account() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Account)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();

    let student = factory::create_account(db).await?;
    let registered = bearer_headers(&tokens, &student.email);
    let unknown = bearer_headers(&tokens, "stranger@example.com");

    let account = AuthGuard::new(db, &tokens, &registered).require(&[]).await?;
    let denied = AuthGuard::new(db, &tokens, &unknown).require(&[]).await;

    assert_eq!(account.email, student.email);
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied { .. }))
    ));

    Ok(())
}
