use ldscope_graph::Graph;

/// Undirected simple view of a graph.
///
/// Vertex `i` is the graph's `i`-th node. Link direction, parallel links
/// and self-loops are discarded; neighbor lists are sorted and distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjacency {
    neighbors: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Adjacency {
    pub fn from_graph(graph: &Graph) -> Self {
        Self::from_edges(graph.node_count(), graph.link_endpoints())
    }

    /// Build from raw `(source, target)` vertex pairs over `n` vertices.
    /// Pairs naming a vertex `>= n` are ignored.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut neighbors = vec![Vec::new(); n];
        for (s, t) in edges {
            if s == t || s >= n || t >= n {
                continue;
            }
            neighbors[s].push(t);
            neighbors[t].push(s);
        }
        for list in &mut neighbors {
            list.sort_unstable();
            list.dedup();
        }
        let edge_count = neighbors.iter().map(Vec::len).sum::<usize>() / 2;

        Self {
            neighbors,
            edge_count,
        }
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Distinct undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.neighbors[v]
    }

    pub fn degree(&self, v: usize) -> usize {
        self.neighbors[v].len()
    }

    pub fn are_adjacent(&self, u: usize, v: usize) -> bool {
        self.neighbors[u].binary_search(&v).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn collapses_direction_duplicates_and_loops() {
        let adj = Adjacency::from_edges(3, [(0, 1), (1, 0), (0, 1), (2, 2), (2, 0)]);

        assert_eq!(adj.edge_count(), 2);
        assert_eq!(adj.neighbors(0), &[1, 2]);
        assert_eq!(adj.neighbors(2), &[0]);
        assert!(adj.are_adjacent(1, 0));
        assert!(!adj.are_adjacent(1, 2));
        assert!(!adj.are_adjacent(2, 2));
    }

    #[test]
    fn isolated_vertices_have_no_neighbors() {
        let adj = Adjacency::from_edges(4, [(0, 1)]);
        assert_eq!(adj.len(), 4);
        assert_eq!(adj.degree(3), 0);
        assert_eq!(adj.edge_count(), 1);
    }
}
