use std::process::ExitCode;

mod config;
mod error;
mod extract;
mod models;
mod pipeline;
mod render;
mod spam;

use config::ExtractorConfig;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ExtractorConfig::default();
    match pipeline::run(&config) {
        Ok(report) => {
            for failure in &report.failures {
                tracing::debug!(
                    page = %failure.page,
                    file = %failure.file,
                    "page not extracted: {}",
                    failure.message
                );
            }
            tracing::debug!(
                processed = report.pages.len(),
                failed = report.failures.len(),
                skipped = report.skipped.len(),
                "run finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("extraction aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}
