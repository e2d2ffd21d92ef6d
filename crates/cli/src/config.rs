use crate::AnalysisArgs;
use anyhow::{Context, Result};
use ldscope_analytics::{AnalyticsConfig, DEFAULT_MAX_NODES};
use std::fs;
use std::path::Path;

/// Settings file (if any), then the CLI's node ceiling, then flag overrides.
pub fn resolve(args: &AnalysisArgs) -> Result<AnalyticsConfig> {
    let mut config = match &args.config {
        Some(path) => load(path)?,
        None => AnalyticsConfig::default(),
    };

    if config.max_nodes.is_none() {
        config.max_nodes = Some(DEFAULT_MAX_NODES);
    }
    if let Some(limit) = args.max_nodes {
        config.max_nodes = (limit > 0).then_some(limit);
    }
    if args.sequential {
        config.parallel = false;
    }

    log::debug!("Analysis config: {config:?}");
    Ok(config)
}

fn load(path: &Path) -> Result<AnalyticsConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}
