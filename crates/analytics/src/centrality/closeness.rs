use crate::paths::SourcePaths;

/// Component-local closeness: reachable vertices over the sum of their
/// distances. Vertices that reach nothing score 0.
///
/// Values from different components are not comparable; a vertex in a
/// small tight component can outscore a hub of a large one.
pub fn closeness(paths: &[SourcePaths]) -> Vec<f64> {
    paths
        .iter()
        .map(|p| {
            if p.distance_sum == 0 {
                0.0
            } else {
                p.reachable as f64 / p.distance_sum as f64
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::Adjacency;
    use crate::paths;

    #[test]
    fn center_of_a_path_is_closest() {
        let adj = Adjacency::from_edges(4, [(0, 1), (1, 2)]);
        let scores = closeness(&paths::sweep(&adj, false));

        assert_eq!(scores[1], 1.0);
        assert_eq!(scores[0], 2.0 / 3.0);
        assert_eq!(scores[2], scores[0]);
        assert_eq!(scores[3], 0.0);
    }

    #[test]
    fn isolated_pair_is_maximally_close() {
        let adj = Adjacency::from_edges(5, [(0, 1), (1, 2), (2, 3), (4, 4)]);
        let scores = closeness(&paths::sweep(&adj, false));
        assert_eq!(scores[4], 0.0);

        let pair = Adjacency::from_edges(2, [(0, 1)]);
        assert_eq!(closeness(&paths::sweep(&pair, false)), vec![1.0, 1.0]);
    }
}
