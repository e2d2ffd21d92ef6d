use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalyticsError {
    #[error("Graph has {nodes} nodes, above the analysis limit of {limit}")]
    TooLarge { nodes: usize, limit: usize },
}
