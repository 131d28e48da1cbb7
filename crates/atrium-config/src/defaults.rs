//! Fallback values applied when a variable is unset or blank.

use std::time::Duration;

/// Listener address.
pub const BIND_ADDR: &str = "127.0.0.1:3000";
/// Root of the `<locale>/<namespace>.json` tree, relative to the working directory.
pub const LOCALES_DIR: &str = "locales";
/// Headless CMS origin.
pub const CMS_URL: &str = "http://localhost:1337";
/// Per-request CMS timeout.
pub const CMS_TIMEOUT: Duration = Duration::from_millis(5_000);
/// Hero auto-advance period.
pub const HERO_INTERVAL: Duration = Duration::from_millis(6_000);
/// Shortest hero period accepted; anything faster is unreadable.
pub const HERO_INTERVAL_MIN: Duration = Duration::from_millis(1_000);
/// Log filter used when neither `RUST_LOG` nor `ATRIUM_LOG_LEVEL` is set.
pub const LOG_LEVEL: &str = "info";
