use std::sync::Arc;

use sea_orm::Database;

use migration::{Migrator, MigratorTrait};

use crate::config::{ApplicationSettings, StorageMode};
use crate::errors::internal::InternalError;
use crate::services::{
    crypto, AuthService, ReportService, SettingsService, TokenService, UserService,
};
use crate::storage::{LocalStore, RemoteStore, StoreAdapter, StoreError};
use crate::stores::{AnnouncementStore, CredentialStore, ReportStore, UserStore};

/// Centralized application data following the main-owned stores pattern
///
/// Everything is created once at startup and shared across API endpoints:
/// the store adapter chosen by the configured storage mode, the entity
/// stores on top of it, and the services composing them.
pub struct AppData {
    pub settings: ApplicationSettings,
    pub adapter: Arc<dyn StoreAdapter>,

    pub user_store: Arc<UserStore>,
    pub report_store: Arc<ReportStore>,
    pub announcement_store: Arc<AnnouncementStore>,
    pub credential_store: Arc<CredentialStore>,

    pub token_service: Arc<TokenService>,
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub report_service: Arc<ReportService>,
    pub settings_service: Arc<SettingsService>,
}

impl AppData {
    /// Initialize the adapter, stores, and services, and seed the admin
    /// credentials record if it does not exist yet
    pub async fn init(settings: ApplicationSettings) -> Result<Self, InternalError> {
        tracing::info!("initializing application data");

        let adapter: Arc<dyn StoreAdapter> = match &settings.storage {
            StorageMode::Local { dir } => {
                tracing::info!(dir = %dir.display(), "using local storage");
                Arc::new(LocalStore::open(dir)?)
            }
            StorageMode::Remote { database_url } => {
                tracing::info!(url = %database_url, "using remote storage");
                let db = Database::connect(database_url)
                    .await
                    .map_err(|e| StoreError::database("connect", e))?;
                Migrator::up(&db, None)
                    .await
                    .map_err(|e| StoreError::database("migrate", e))?;
                Arc::new(RemoteStore::new(db))
            }
        };

        let user_store = Arc::new(UserStore::new(adapter.clone()));
        let report_store = Arc::new(ReportStore::new(adapter.clone()));
        let announcement_store = Arc::new(AnnouncementStore::new(adapter.clone()));
        let credential_store = Arc::new(CredentialStore::new(adapter.clone()));

        let token_service = Arc::new(TokenService::new(
            settings.session_secret.clone(),
            settings.session_minutes,
        ));
        let auth_service = Arc::new(AuthService::new(
            user_store.clone(),
            credential_store.clone(),
            token_service.clone(),
        ));
        let user_service = Arc::new(UserService::new(user_store.clone()));
        let report_service = Arc::new(ReportService::new(report_store.clone()));
        let settings_service = Arc::new(SettingsService::new(credential_store.clone()));

        tracing::info!("application data initialized");

        Ok(Self {
            settings,
            adapter,
            user_store,
            report_store,
            announcement_store,
            credential_store,
            token_service,
            auth_service,
            user_service,
            report_service,
            settings_service,
        })
    }

    /// Establish the credentials-exist-after-boot invariant
    ///
    /// Hashes the configured seed password only when the record is absent.
    /// Returns true when a seed write happened.
    pub async fn seed_admin_credentials(&self) -> Result<bool, InternalError> {
        if self.credential_store.get().await?.is_some() {
            return Ok(false);
        }
        let password_hash = crypto::hash_password(&self.settings.admin_password)?;
        self.credential_store
            .ensure_seeded(&self.settings.admin_username, &password_hash)
            .await
    }
}
