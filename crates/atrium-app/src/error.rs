//! # Design
//!
//! - Centralize application-level errors for bootstrap.
//! - Keep error messages constant while carrying context fields for debugging.
//! - Preserve source errors without re-logging at call sites.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("configuration operation failed")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: atrium_config::ConfigError,
    },
    /// Message bundles could not be loaded.
    #[error("message catalog operation failed")]
    I18n {
        /// Operation identifier.
        operation: &'static str,
        /// Source loader error.
        source: atrium_i18n::I18nError,
    },
    /// CMS client construction failed.
    #[error("cms client operation failed")]
    Cms {
        /// Operation identifier.
        operation: &'static str,
        /// Source CMS error.
        source: atrium_cms::CmsError,
    },
    /// API server operations failed.
    #[error("api server operation failed")]
    ApiServer {
        /// Operation identifier.
        operation: &'static str,
        /// Source API server error.
        source: atrium_api::ApiServerError,
    },
    /// Telemetry operations failed.
    #[error("telemetry operation failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: atrium_telemetry::TelemetryError,
    },
}

impl AppError {
    pub(crate) const fn config(
        operation: &'static str,
        source: atrium_config::ConfigError,
    ) -> Self {
        Self::Config { operation, source }
    }

    pub(crate) const fn i18n(operation: &'static str, source: atrium_i18n::I18nError) -> Self {
        Self::I18n { operation, source }
    }

    pub(crate) const fn cms(operation: &'static str, source: atrium_cms::CmsError) -> Self {
        Self::Cms { operation, source }
    }

    pub(crate) const fn api_server(
        operation: &'static str,
        source: atrium_api::ApiServerError,
    ) -> Self {
        Self::ApiServer { operation, source }
    }

    pub(crate) const fn telemetry(
        operation: &'static str,
        source: atrium_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }
}
