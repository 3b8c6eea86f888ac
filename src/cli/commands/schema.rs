use anyhow::Context;

use crate::config::AppConfig;
use crate::database::DatabaseManager;

pub async fn handle(config: &AppConfig) -> anyhow::Result<()> {
    let database = DatabaseManager::connect(&config.database)
        .await
        .context("failed to connect to database")?;

    database.apply_schema().await.context("failed to apply schema")?;
    database.close().await;

    println!("Schema ready: admin, notice");
    Ok(())
}
