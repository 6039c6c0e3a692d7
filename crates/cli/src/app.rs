//! Command dispatch: wires the HTTP adapter into the service and runs
//! one command against it.

use std::io::Write;
use std::sync::Arc;

use heroes_client::api::HeroApi;
use heroes_client::config::ConfigError;
use heroes_client::error::HeroApiError;
use heroes_core::service::HeroService;

use crate::args::{ArgsError, Command, USAGE};
use crate::browse;
use crate::config::AppConfig;
use crate::views::detail::HeroDetailView;
use crate::views::list::HeroListView;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Args(#[from] ArgsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP client could not be built.
    #[error(transparent)]
    Client(#[from] HeroApiError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A one-shot command rendered an error screen.
    #[error("command failed: {0}")]
    Failed(String),
}

/// Build the service over the real catalog API.
pub fn service_from_config(config: &AppConfig) -> Result<HeroService, AppError> {
    let api = HeroApi::new(&config.client)?;
    tracing::info!(base_url = %api.base_url(), "Using hero catalog API");
    Ok(HeroService::new(Arc::new(api)))
}

/// Run `command`, writing screens to `output` and reading browser keys
/// from stdin.
pub async fn execute<W: Write>(
    command: Command,
    service: HeroService,
    page_size: u32,
    output: &mut W,
) -> Result<(), AppError> {
    match command {
        Command::Help => write!(output, "{USAGE}")?,
        Command::List { page, size } => {
            let mut view = HeroListView::new(service, size.unwrap_or(page_size));
            view.change_page(page.unwrap_or(1)).await;
            write!(output, "{}", view.render())?;
            if let Some(message) = view.state().error() {
                return Err(AppError::Failed(message.to_string()));
            }
        }
        Command::Show { id } => {
            let mut view = HeroDetailView::new(service);
            view.open(&id).await;
            write!(output, "{}", view.render())?;
            if let Some(message) = view.state().error() {
                return Err(AppError::Failed(message.to_string()));
            }
        }
        Command::Browse => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            browse::run(service, page_size, stdin, output).await?;
        }
    }
    Ok(())
}
