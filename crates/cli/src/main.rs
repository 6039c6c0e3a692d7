//! `heroes` -- terminal browser for the public superhero catalog.
//!
//! # Environment variables
//!
//! | Variable                      | Required | Default            | Description                 |
//! |-------------------------------|----------|--------------------|-----------------------------|
//! | `HEROES_API_BASE_URL`         | no       | public catalog API | REST API base URL           |
//! | `HEROES_REQUEST_TIMEOUT_SECS` | no       | `30`               | Per-request timeout         |
//! | `HEROES_PAGE_SIZE`            | no       | `10`               | Initial list page size      |
//! | `RUST_LOG`                    | no       | `heroes_cli=info,heroes_client=info` | Log filter |

use std::process::ExitCode;

use heroes_cli::app::{self, AppError};
use heroes_cli::args::{self, USAGE};
use heroes_cli::config::AppConfig;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // Logs go to stderr so screens on stdout stay clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "heroes_cli=info,heroes_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Args(e)) => {
            eprintln!("{e}\n\n{USAGE}");
            ExitCode::from(2)
        }
        Err(AppError::Failed(message)) => {
            tracing::warn!(%message, "Command finished with an error screen");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!(error = %e, "heroes failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let command = args::parse(std::env::args().skip(1))?;
    let config = AppConfig::from_env()?;

    tracing::info!(
        command = ?command,
        page_size = config.page_size,
        timeout_secs = config.client.request_timeout.as_secs(),
        "Starting heroes",
    );

    let service = app::service_from_config(&config)?;
    let mut stdout = std::io::stdout();
    app::execute(command, service, config.page_size, &mut stdout).await
}
