// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use base64::Engine;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

use rtrw_kinerja_backend::services::{crypto, AuthService, TokenService};
use rtrw_kinerja_backend::storage::{LocalStore, RemoteStore, StoreAdapter};
use rtrw_kinerja_backend::stores::{CredentialStore, UserStore};
use rtrw_kinerja_backend::types::domain::{ActivityKind, Position, SessionUser};
use rtrw_kinerja_backend::types::dto::reports::ReportForm;
use rtrw_kinerja_backend::types::dto::users::UserForm;

/// Creates a remote adapter over an in-memory database with migrations applied
pub async fn remote_adapter() -> Arc<dyn StoreAdapter> {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    Arc::new(RemoteStore::new(db))
}

/// Creates a purely in-memory local adapter
pub fn local_adapter() -> Arc<dyn StoreAdapter> {
    Arc::new(LocalStore::in_memory())
}

/// Creates the token service used across the suites
pub fn token_service() -> Arc<TokenService> {
    Arc::new(TokenService::new("test-session-secret".to_string(), 60))
}

/// Creates an auth service over the given adapter
pub fn auth_service(adapter: Arc<dyn StoreAdapter>) -> Arc<AuthService> {
    Arc::new(AuthService::new(
        Arc::new(UserStore::new(adapter.clone())),
        Arc::new(CredentialStore::new(adapter)),
        token_service(),
    ))
}

/// Seeds the admin credentials record with a hashed password
pub async fn seed_admin(adapter: &Arc<dyn StoreAdapter>, username: &str, password: &str) {
    let store = CredentialStore::new(adapter.clone());
    let hash = crypto::hash_password(password).expect("Failed to hash password");
    store
        .ensure_seeded(username, &hash)
        .await
        .expect("Failed to seed admin credentials");
}

/// A valid user form for the manage-users flow
pub fn user_form(full_name: &str, username: &str, password: &str) -> UserForm {
    UserForm {
        full_name: full_name.to_string(),
        username: username.to_string(),
        password: Some(password.to_string()),
        position: Position::KetuaRt,
        rt: "01".to_string(),
        rw: "05".to_string(),
    }
}

/// The session snapshot report submission denormalizes from
pub fn session_user(id: &str, full_name: &str) -> SessionUser {
    SessionUser {
        id: id.to_string(),
        full_name: full_name.to_string(),
        username: full_name.to_lowercase().replace(' ', "."),
        position: Position::KetuaRt,
        rt: "01".to_string(),
        rw: "05".to_string(),
    }
}

/// A tiny JPEG-ish payload wrapped as a data URL
pub fn photo_data_url() -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode([0xffu8, 0xd8, 0xff, 0xe0]);
    format!("data:image/jpeg;base64,{payload}")
}

/// A valid report form
pub fn report_form() -> ReportForm {
    ReportForm {
        jenis_kegiatan: ActivityKind::KerjaBakti,
        deskripsi_lainnya: None,
        deskripsi_kegiatan: "Kerja bakti membersihkan saluran air di lingkungan RT.".to_string(),
        alamat_kegiatan: "Jl. Veteran Selatan No. 10, Makassar".to_string(),
        lokasi_kegiatan: "-5.147665, 119.432732".to_string(),
        foto_kegiatan: photo_data_url(),
        jam_datang: "07:30".to_string(),
    }
}
