use anyhow::Result;
use chrono::Local;
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use weeklygen::{config::SheetConfig, run};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) one fetch-and-generate cycle ─────────────────────────────
    let client = Client::new();
    let config = SheetConfig::default();
    let today = Local::now().date_naive();

    match run::generate_weekly_activities(&client, &config, ".", today).await? {
        Some(path) => info!("wrote {}", path.display()),
        None => info!("no digest produced"),
    }

    Ok(())
}
