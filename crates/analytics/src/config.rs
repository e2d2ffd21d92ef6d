use serde::{Deserialize, Serialize};

/// Node ceiling applied by front ends that expose analysis as a service
pub const DEFAULT_MAX_NODES: usize = 20_000;

/// Analysis settings. Every field has a default, so partial TOML/JSON
/// documents deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Refuse graphs with more nodes than this (`None` = unbounded)
    pub max_nodes: Option<usize>,
    /// Run per-source BFS sweeps on the rayon pool
    pub parallel: bool,
    pub eigenvector: EigenvectorConfig,
    pub communities: CommunityConfig,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            max_nodes: None,
            parallel: true,
            eigenvector: EigenvectorConfig::default(),
            communities: CommunityConfig::default(),
        }
    }
}

/// Power-iteration settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EigenvectorConfig {
    pub max_iterations: usize,
    /// Stop once no score moves by this much in one iteration
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Label-propagation settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityConfig {
    /// Pass ceiling; `None` derives it from the node count
    pub max_passes: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg: AnalyticsConfig = toml::from_str(
            r#"
            max_nodes = 500

            [eigenvector]
            max_iterations = 10
            "#,
        )
        .expect("valid config");

        assert_eq!(cfg.max_nodes, Some(500));
        assert!(cfg.parallel);
        assert_eq!(cfg.eigenvector.max_iterations, 10);
        assert_eq!(cfg.eigenvector.tolerance, 1e-6);
        assert_eq!(cfg.communities, CommunityConfig::default());
    }

    #[test]
    fn empty_document_is_default() {
        let cfg: AnalyticsConfig = toml::from_str("").expect("empty config");
        assert_eq!(cfg, AnalyticsConfig::default());
    }
}
