use anyhow::Context;
use dotenv::dotenv;

use noteapp::{build_rocket, AppConfig};

#[rocket::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = AppConfig::from_env().context("Failed reading configuration")?;

    // Rocket installs its logger during ignition; log lines before this are dropped.
    let rocket = build_rocket(&config)
        .ignite()
        .await
        .context("Failed to start server")?;

    log::info!(
        "Listening at {}:{}, static files from {}",
        config.address,
        config.port,
        config.static_dir.display()
    );

    let _rocket = rocket
        .launch()
        .await
        .context("Failed to launch server")?;

    Ok(())
}
