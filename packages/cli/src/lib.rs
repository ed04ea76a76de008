pub mod config;
pub mod lookup;
pub mod views;

#[cfg(test)]
mod tests;

use colored::*;
use config::Config;
use partnerdesk_partnerships::App;
use partnerdesk_storage::{LoadOutcome, StorageResult};

/// Opens the file-backed store described by `config`
pub async fn open_app(config: &Config) -> StorageResult<App> {
    let adapter = config.persistence_adapter()?;
    let app = App::start(adapter).await;

    if let LoadOutcome::Recovered(reason) = app.load_outcome() {
        eprintln!(
            "{}",
            format!(
                "⚠️  Stored partnerships could not be read and were ignored ({})",
                reason
            )
            .yellow()
        );
    }

    Ok(app)
}
