use crate::app_data::AppData;

/// Seed the admin credentials record from the configured defaults
///
/// A no-op when the record already exists; running this establishes the
/// credentials-exist invariant without starting the server.
pub async fn run(app_data: &AppData) -> Result<(), Box<dyn std::error::Error>> {
    if app_data.seed_admin_credentials().await? {
        println!(
            "Admin credentials seeded for username '{}'",
            app_data.settings.admin_username
        );
    } else {
        println!("Admin credentials already exist, nothing to do");
    }
    Ok(())
}
