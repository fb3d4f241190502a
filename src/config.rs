//! Build-time configuration.
//!
//! The frontend has no runtime config file; everything is baked in when the
//! bundle is built (`GARDEN_API_BASE=... trunk build --features remote`).

use log::LevelFilter;

/// localStorage key holding the serialized plan
pub const STORAGE_KEY: &str = "gardenPlanV1";

/// Base URL of the plan API. Defaults to the page's own origin.
#[cfg(feature = "remote")]
pub fn api_base() -> String {
    match option_env!("GARDEN_API_BASE") {
        Some(base) if !base.is_empty() => base.to_string(),
        _ => web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_default(),
    }
}

pub fn log_level() -> LevelFilter {
    option_env!("GARDEN_LOG")
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}
