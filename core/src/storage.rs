use std::path::Path;

use anyhow::Context;

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsError;

/// Leser konfig fra disk (JSON) og validerer den.
pub fn load_config(path: impl AsRef<Path>) -> Result<AnalyticsConfig, AnalyticsError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let mut de = serde_json::Deserializer::from_str(&contents);
    let cfg: AnalyticsConfig = serde_path_to_error::deserialize(&mut de)?;
    cfg.validate()?;
    log::info!("config loaded from {}", path.as_ref().display());
    Ok(cfg)
}

/// Lagrer konfig til disk som JSON (pretty-print).
pub fn save_config(cfg: &AnalyticsConfig, path: impl AsRef<Path>) -> Result<(), AnalyticsError> {
    cfg.validate()?;
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path.as_ref(), json)?;
    log::info!("config saved to {}", path.as_ref().display());
    Ok(())
}

/// Som `load_config`, men manglende fil gir default-konfig.
pub fn load_config_or_default(path: impl AsRef<Path>) -> anyhow::Result<AnalyticsConfig> {
    let path = path.as_ref();
    if !path.exists() {
        log::warn!("config not found at {}, using defaults", path.display());
        return Ok(AnalyticsConfig::default());
    }
    load_config(path).with_context(|| format!("loading analytics config from {}", path.display()))
}
