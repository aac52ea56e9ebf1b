use football_service::api;
use football_service::common::init;
use football_service::settings::AppSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::get();
    init::initialize_logging(settings);
    match settings.app_component.as_str() {
        "api" => api::serve(settings).await,
        "migrate" => init::run_migrations(settings).await,
        other => anyhow::bail!("Unknown app component: {other}"),
    }
}
