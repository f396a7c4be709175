use super::*;

/// Tests the gate with a logged in session.
///
/// Expected: Ok(Principal) matching the stored principal
#[tokio::test]
async fn returns_principal_when_logged_in() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    AuthSession::new(session).set_principal(&principal()).await?;

    let result = AuthGuard::new(session).require().await?;

    assert_eq!(result, principal());

    Ok(())
}

/// Tests the gate with an anonymous session.
///
/// Expected: Err(AuthError::NotLoggedIn)
#[tokio::test]
async fn rejects_anonymous_session() {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let result = AuthGuard::new(session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));
}

/// Tests the gate after logout.
///
/// Expected: Err(AuthError::NotLoggedIn) once the session is cleared
#[tokio::test]
async fn rejects_after_logout() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_principal(&principal()).await?;
    auth_session.flush().await?;

    let result = AuthGuard::new(session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests the disabled gate.
///
/// Verifies that an anonymous caller passes when the resource is not gated.
///
/// Expected: Ok(None)
#[tokio::test]
async fn disabled_gate_lets_anonymous_through() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let result = AuthGuard::new(session).require_if(false).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests the enabled gate.
///
/// Expected: Err(AuthError::NotLoggedIn) for anonymous, Ok(Some) once logged in
#[tokio::test]
async fn enabled_gate_requires_principal() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let guard = AuthGuard::new(session);
    assert!(guard.require_if(true).await.is_err());

    AuthSession::new(session).set_principal(&principal()).await?;
    assert_eq!(guard.require_if(true).await?, Some(principal()));

    Ok(())
}
