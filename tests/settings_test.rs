// Admin settings tests: the current-credential verification gate and the
// keep-password-when-blank rule.

mod common;

use std::sync::Arc;

use rtrw_kinerja_backend::errors::internal::CredentialError;
use rtrw_kinerja_backend::errors::InternalError;
use rtrw_kinerja_backend::services::SettingsService;
use rtrw_kinerja_backend::storage::StoreAdapter;
use rtrw_kinerja_backend::stores::CredentialStore;
use rtrw_kinerja_backend::types::dto::settings::CredentialsForm;
use rtrw_kinerja_backend::validation::validate_credentials;

fn service(adapter: Arc<dyn StoreAdapter>) -> SettingsService {
    SettingsService::new(Arc::new(CredentialStore::new(adapter)))
}

fn change_form(
    current_username: &str,
    current_password: &str,
    username: &str,
    password: Option<&str>,
) -> CredentialsForm {
    CredentialsForm {
        current_username: current_username.to_string(),
        current_password: current_password.to_string(),
        username: username.to_string(),
        password: password.map(str::to_string),
        confirm_password: password.map(str::to_string),
    }
}

#[tokio::test]
async fn wrong_current_credentials_change_nothing() {
    let adapter = common::remote_adapter().await;
    common::seed_admin(&adapter, "admin", "lama123").await;
    let svc = service(adapter.clone());

    let validated =
        validate_credentials(&change_form("admin", "salah", "baru", Some("baru-sekali"))).unwrap();
    let err = svc.change_credentials(validated).await.unwrap_err();
    assert!(matches!(
        err,
        InternalError::Credential(CredentialError::CurrentCredentialsMismatch)
    ));

    // The stored record is untouched and the old login still works
    let auth = common::auth_service(adapter);
    auth.login_admin("admin", "lama123").await.unwrap();
}

#[tokio::test]
async fn verified_change_switches_the_login() {
    let adapter = common::remote_adapter().await;
    common::seed_admin(&adapter, "admin", "lama123").await;
    let svc = service(adapter.clone());

    let validated = validate_credentials(&change_form(
        "admin",
        "lama123",
        "kepala-rw",
        Some("baru-sekali"),
    ))
    .unwrap();
    svc.change_credentials(validated).await.unwrap();

    let auth = common::auth_service(adapter);
    auth.login_admin("kepala-rw", "baru-sekali").await.unwrap();

    let err = auth.login_admin("admin", "lama123").await.unwrap_err();
    assert!(matches!(
        err,
        InternalError::Credential(CredentialError::AdminLoginFailed)
    ));
}

#[tokio::test]
async fn blank_new_password_keeps_the_stored_one() {
    let adapter = common::local_adapter();
    common::seed_admin(&adapter, "admin", "tetap-sama").await;
    let svc = service(adapter.clone());

    let validated =
        validate_credentials(&change_form("admin", "tetap-sama", "admin-baru", None)).unwrap();
    svc.change_credentials(validated).await.unwrap();

    let auth = common::auth_service(adapter);
    auth.login_admin("admin-baru", "tetap-sama").await.unwrap();
}
