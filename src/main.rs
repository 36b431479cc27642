use clap::Parser;
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use rtrw_kinerja_backend::api::{
    AnnouncementsApi, AuthApi, HealthApi, ReportsApi, SettingsApi, UsersApi,
};
use rtrw_kinerja_backend::cli::{Cli, Commands};
use rtrw_kinerja_backend::config::{init_logging, ApplicationSettings};
use rtrw_kinerja_backend::AppData;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let cli = Cli::parse();

    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let settings = ApplicationSettings::from_env().expect("Failed to load configuration");
    let bind_addr = settings.bind_addr.clone();

    let app_data = AppData::init(settings)
        .await
        .expect("Failed to initialize application data");

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Bootstrap => {
            rtrw_kinerja_backend::cli::bootstrap::run(&app_data)
                .await
                .expect("Bootstrap failed");
            return Ok(());
        }
        Commands::Serve => {}
    }

    // Seed-if-absent at boot keeps the admin login available from the
    // first start onward
    app_data
        .seed_admin_credentials()
        .await
        .expect("Failed to seed admin credentials");

    let api_service = OpenApiService::new(
        (
            HealthApi,
            AuthApi::new(
                app_data.auth_service.clone(),
                app_data.token_service.clone(),
            ),
            UsersApi::new(
                app_data.user_service.clone(),
                app_data.token_service.clone(),
            ),
            ReportsApi::new(
                app_data.report_service.clone(),
                app_data.report_store.clone(),
                app_data.token_service.clone(),
            ),
            AnnouncementsApi::new(
                app_data.announcement_store.clone(),
                app_data.token_service.clone(),
            ),
            SettingsApi::new(
                app_data.settings_service.clone(),
                app_data.token_service.clone(),
            ),
        ),
        "Aplikasi Kinerja RT RW",
        "1.0.0",
    )
    .server(format!("http://{bind_addr}/api"));

    let ui = api_service.swagger_ui();

    let app = Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui);

    tracing::info!(addr = %bind_addr, "starting server");
    Server::new(TcpListener::bind(bind_addr)).run(app).await
}
