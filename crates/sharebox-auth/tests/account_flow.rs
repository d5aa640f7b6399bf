//! Integration tests for the sign-up / sign-in / refresh lifecycle.

mod common;

use common::{Harness, InMemoryRoles};
use sharebox_core::error::ErrorKind;
use sharebox_entity::{RoleName, permission::permissions_for_role};

#[tokio::test]
async fn test_sign_up_then_sign_in_succeeds() {
    let harness = Harness::new();
    harness.register("alice@example.com", "correct horse").await;

    let pair = harness
        .service
        .sign_in("alice@example.com", "correct horse")
        .await
        .unwrap();

    assert!(!pair.access_token.is_empty());
    assert!(!pair.refresh_token.is_empty());
    assert!(pair.access_expires_at < pair.refresh_expires_at);
}

#[tokio::test]
async fn test_sign_up_assigns_guest_role() {
    let harness = Harness::new();
    let user_id = harness.register("bob@example.com", "long enough").await;

    let pair = harness
        .service
        .sign_in("bob@example.com", "long enough")
        .await
        .unwrap();
    let claims = harness.decoder.decode_access_token(&pair.access_token).unwrap();

    assert_eq!(claims.sub, user_id);
    assert_eq!(claims.role, RoleName::Guest);
    assert_eq!(claims.permissions, permissions_for_role(RoleName::Guest));
}

#[tokio::test]
async fn test_duplicate_sign_up_is_a_conflict() {
    let harness = Harness::new();
    harness.register("carol@example.com", "long enough").await;

    let err = harness
        .service
        .sign_up("carol@example.com", "other password", "Carol")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
}

#[tokio::test]
async fn test_short_password_is_rejected_at_sign_up() {
    let harness = Harness::new();
    let err = harness
        .service
        .sign_up("dave@example.com", "short", "Dave")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Validation);
}

#[tokio::test]
async fn test_missing_default_role_is_a_configuration_error() {
    let harness = Harness::with_roles(InMemoryRoles::without_guest());
    let err = harness
        .service
        .sign_up("erin@example.com", "long enough", "Erin")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Configuration);
}

#[tokio::test]
async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
    let harness = Harness::new();
    harness.register("frank@example.com", "long enough").await;

    let wrong_password = harness
        .service
        .sign_in("frank@example.com", "not the password")
        .await
        .unwrap_err();
    let unknown_email = harness
        .service
        .sign_in("nobody@example.com", "not the password")
        .await
        .unwrap_err();

    assert_eq!(wrong_password.kind, ErrorKind::Unauthenticated);
    assert_eq!(unknown_email.kind, ErrorKind::Unauthenticated);
    assert_eq!(wrong_password.message, unknown_email.message);
}

#[tokio::test]
async fn test_refresh_rotates_and_rejects_replay() {
    let harness = Harness::new();
    harness.register("grace@example.com", "long enough").await;

    let first = harness
        .service
        .sign_in("grace@example.com", "long enough")
        .await
        .unwrap();

    let second = harness
        .service
        .refresh_tokens(&first.refresh_token)
        .await
        .unwrap();
    assert_ne!(first.refresh_token, second.refresh_token);
    assert_ne!(first.refresh_token_id, second.refresh_token_id);

    // Replaying the consumed token must fail.
    let replay = harness
        .service
        .refresh_tokens(&first.refresh_token)
        .await
        .unwrap_err();
    assert_eq!(replay.kind, ErrorKind::Unauthenticated);

    // The new token keeps working.
    harness
        .service
        .refresh_tokens(&second.refresh_token)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_sign_in_supersedes_outstanding_refresh_token() {
    let harness = Harness::new();
    harness.register("heidi@example.com", "long enough").await;

    let first = harness
        .service
        .sign_in("heidi@example.com", "long enough")
        .await
        .unwrap();
    // A later sign-in installs a new session, revoking the earlier token.
    let _second = harness
        .service
        .sign_in("heidi@example.com", "long enough")
        .await
        .unwrap();

    let err = harness
        .service
        .refresh_tokens(&first.refresh_token)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthenticated);
}

#[tokio::test]
async fn test_garbled_refresh_token_is_unauthenticated() {
    let harness = Harness::new();
    let err = harness
        .service
        .refresh_tokens("definitely-not-a-jwt")
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthenticated);
}

#[tokio::test]
async fn test_access_token_is_rejected_as_refresh_token() {
    let harness = Harness::new();
    harness.register("ivan@example.com", "long enough").await;

    let pair = harness
        .service
        .sign_in("ivan@example.com", "long enough")
        .await
        .unwrap();

    let err = harness
        .service
        .refresh_tokens(&pair.access_token)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthenticated);
}

#[tokio::test]
async fn test_sign_out_revokes_and_is_idempotent() {
    let harness = Harness::new();
    let user_id = harness.register("judy@example.com", "long enough").await;

    let pair = harness
        .service
        .sign_in("judy@example.com", "long enough")
        .await
        .unwrap();

    harness.service.sign_out(user_id).await.unwrap();
    // Second invalidation is a no-op, not an error.
    harness.service.sign_out(user_id).await.unwrap();

    let err = harness
        .service
        .refresh_tokens(&pair.refresh_token)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthenticated);
}

#[tokio::test]
async fn test_seeded_role_records_agree_with_static_map() {
    use sharebox_auth::account::RoleDirectory;

    let harness = Harness::new();
    for role in RoleName::ALL {
        let record = harness.roles.find_by_name(role).await.unwrap().unwrap();
        assert_eq!(record.permissions, permissions_for_role(role), "role: {role}");
    }
}

#[tokio::test]
async fn test_audit_events_are_emitted_for_the_lifecycle() {
    let harness = Harness::new();
    let mut audit_rx = harness.audit.subscribe();

    harness.register("kim@example.com", "long enough").await;
    let pair = harness
        .service
        .sign_in("kim@example.com", "long enough")
        .await
        .unwrap();
    harness.service.refresh_tokens(&pair.refresh_token).await.unwrap();

    let actions: Vec<String> = (0..3).map(|_| audit_rx.try_recv().unwrap().action).collect();
    assert_eq!(actions, ["auth.sign_up", "auth.sign_in", "auth.refresh"]);
}
