//! Node importance scores over the undirected adjacency.

mod betweenness;
mod closeness;
mod eigenvector;

pub use betweenness::betweenness;
pub use closeness::closeness;
pub use eigenvector::{eigenvector, EigenvectorScores};
