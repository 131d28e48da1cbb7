use std::future::Future;
use std::sync::Arc;

use atrium_api::{ApiServer, ApiState};
use atrium_cms::CmsClient;
use atrium_config::{LogFormatSetting, SiteConfig};
use atrium_i18n::{FsMessageSource, MessageCatalog};
use atrium_telemetry::{GlobalContextGuard, LogFormat, LoggingConfig, Metrics, init_logging};
use tracing::{error, info};

use crate::error::{AppError, AppResult};

/// Dependencies required to bootstrap the Atrium server.
pub(crate) struct BootstrapDependencies {
    config: SiteConfig,
}

impl BootstrapDependencies {
    /// Construct production dependencies from the environment for the binary entrypoint.
    pub(crate) fn from_env() -> AppResult<Self> {
        let config =
            SiteConfig::from_env().map_err(|err| AppError::config("site_config.from_env", err))?;
        Ok(Self { config })
    }
}

/// Entry point for the Atrium boot sequence.
///
/// # Errors
///
/// Returns an error if configuration, logging, the message catalog or the listener fails.
pub async fn run_app() -> AppResult<()> {
    let dependencies = BootstrapDependencies::from_env()?;
    run_app_with(dependencies, shutdown_signal()).await
}

/// Boot sequence that relies entirely on injected dependencies to simplify testing.
pub(crate) async fn run_app_with<F>(dependencies: BootstrapDependencies, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let BootstrapDependencies { config } = dependencies;
    let logging = LoggingConfig {
        level: &config.log_level,
        format: log_format(config.log_format),
        ..LoggingConfig::default()
    };
    init_logging(&logging).map_err(|err| AppError::telemetry("telemetry.init", err))?;
    let _context = GlobalContextGuard::new("bootstrap");

    info!(
        locales_dir = %config.locales_dir.display(),
        default_locale = config.default_locale.code(),
        cms_url = %config.cms_url,
        "Atrium bootstrap starting"
    );

    let api = build_server(&config)?;
    info!(addr = %config.bind_addr, "Launching API listener");
    api.serve(config.bind_addr, shutdown)
        .await
        .map_err(|err| AppError::api_server("api_server.serve", err))?;
    info!("API server shutdown complete");
    Ok(())
}

/// Load every bundle and wire the API. Any missing or malformed bundle aborts startup.
pub(crate) fn build_server(config: &SiteConfig) -> AppResult<ApiServer> {
    let telemetry = Metrics::new().map_err(|err| AppError::telemetry("telemetry.metrics", err))?;
    let catalog = MessageCatalog::load(&FsMessageSource::new(config.locales_dir.clone()))
        .map_err(|err| AppError::i18n("message_catalog.load", err))?;
    let cms = CmsClient::new(
        config.cms_url.clone(),
        config.cms_timeout,
        Some(telemetry.clone()),
    )
    .map_err(|err| AppError::cms("cms_client.new", err))?;

    let state = ApiState::new(
        Arc::new(catalog),
        Arc::new(cms),
        telemetry,
        config.default_locale,
        config.hero_interval,
    );
    Ok(ApiServer::new(Arc::new(state)))
}

const fn log_format(setting: Option<LogFormatSetting>) -> LogFormat {
    match setting {
        Some(LogFormatSetting::Json) => LogFormat::Json,
        Some(LogFormatSetting::Pretty) => LogFormat::Pretty,
        None => LogFormat::infer(),
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            error!(error = %err, "failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
