use anyhow::Result;
use footfall::chart::ChartRegistry;
use footfall::config::{AppConfig, UiMode};
use footfall::controller::DashboardController;
use footfall::scheduler::RefreshScheduler;
use footfall::snapshot_repo::HttpSnapshotRepo;
use footfall::view::Page;
use footfall::*;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Headless mode logs to stderr; the terminal UI owns the screen, so it logs to a file.
fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.ui.mode {
        UiMode::Headless => {
            tracing_subscriber::fmt()
                .with_timer(LocalTimer)
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        UiMode::Tui => {
            let path = std::path::Path::new(&config.log.file);
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            tracing_subscriber::fmt()
                .with_timer(LocalTimer)
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .init();
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let app_config = AppConfig::load()?;
    init_logging(&app_config)?;
    tracing::info!(
        version = version::VERSION,
        endpoint = %app_config.dashboard_url(),
        interval_ms = app_config.refresh.interval_ms,
        mode = ?app_config.ui.mode,
        "starting"
    );

    let repo = HttpSnapshotRepo::new(&app_config.api)?;
    match repo.health().await {
        Ok(health) if health.is_healthy() => {
            tracing::info!(backend_version = %health.version, "analytics API healthy");
        }
        Ok(health) => {
            tracing::warn!(status = %health.status, "analytics API reports unhealthy");
        }
        Err(e) => {
            tracing::warn!(error = %e, operation = "health", "analytics API health probe failed");
        }
    }

    let mut controller = DashboardController::new(
        repo,
        Page::new(),
        ChartRegistry::new(),
        app_config.buffer.capacity,
    );
    let scheduler = RefreshScheduler::from_millis(app_config.refresh.interval_ms);

    match app_config.ui.mode {
        UiMode::Tui => tui::run(&mut controller, scheduler).await?,
        UiMode::Headless => {
            let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("Received shutdown signal");
                }
                let _ = shutdown_tx.send(());
            });
            scheduler.run(&mut controller, shutdown_rx).await;
        }
    }

    tracing::info!(
        cycles_applied = controller.cycles_applied(),
        cycles_failed = controller.cycles_failed(),
        online = controller.connection().is_some_and(|c| c.is_online()),
        "shutdown complete"
    );
    Ok(())
}
