//! Initialize docreview in the working directory

use log::info;

use docreview::adapters::TomlBackend;
use docreview::config::Config;
use docreview::output::{OperationResult, OutputMode};
use docreview::paths;

/// Write `.docreview.toml` and an empty store
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config_path = paths::project_config();

    if config_path.exists() && !force {
        OperationResult {
            success: true,
            message: format!(
                "Already initialized ({} exists). Use --force to reinitialize.",
                config_path.display()
            ),
        }
        .render(mode);
        return Ok(());
    }

    let config = Config::default();
    config.save_to(&config_path)?;
    info!("Created {}", config_path.display());

    let backend = TomlBackend::new(config.store.path.clone());
    let created = backend.init(force)?;
    if created {
        info!("Created {}", backend.path().display());
    }

    OperationResult {
        success: true,
        message: format!(
            "docreview initialized.\n  Config: {}\n  Store:  {}\n\nAdd users, tags and documents to the store, then run:\n  docreview --user <name> assign apply <ids...> --assignee <name> --tag <tag>",
            config_path.display(),
            backend.path().display()
        ),
    }
    .render(mode);

    Ok(())
}
