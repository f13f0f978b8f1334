//! Slow, obviously-correct reference answers for small graphs.

use crate::EdgeTriple;

/// All-pairs shortest distances via Floyd-Warshall. `None` marks an unreachable
/// pair.
///
/// Intended for graphs without reachable negative edges; with one the result
/// is not meaningful for an undirected graph.
///
/// # Examples
/// ```
/// use dualgraph_test_support::oracle::floyd_warshall;
///
/// let distances = floyd_warshall(3, &[(0, 1, 4), (1, 2, 2)]);
/// assert_eq!(distances[0][2], Some(6));
/// assert_eq!(distances[2][2], Some(0));
/// ```
#[must_use]
pub fn floyd_warshall(vertex_count: usize, edges: &[EdgeTriple]) -> Vec<Vec<Option<i64>>> {
    let mut dist = vec![vec![None; vertex_count]; vertex_count];
    for (vertex, row) in dist.iter_mut().enumerate() {
        row[vertex] = Some(0);
    }
    for &(left, right, weight) in edges {
        // Later duplicates overwrite, matching graph construction.
        dist[left][right] = Some(weight);
        dist[right][left] = Some(weight);
    }
    for via in 0..vertex_count {
        for from in 0..vertex_count {
            let Some(head) = dist[from][via] else {
                continue;
            };
            for to in 0..vertex_count {
                let Some(tail) = dist[via][to] else {
                    continue;
                };
                let Some(candidate) = head.checked_add(tail) else {
                    continue;
                };
                if dist[from][to].is_none_or(|current| candidate < current) {
                    dist[from][to] = Some(candidate);
                }
            }
        }
    }
    dist
}

/// Minimum spanning tree weight by exhaustive search over edge subsets of
/// size `V - 1`. Returns `None` for an empty or disconnected graph.
///
/// # Panics
/// Panics when there are more than 20 distinct edges.
///
/// # Examples
/// ```
/// use dualgraph_test_support::oracle::brute_force_mst_weight;
///
/// assert_eq!(brute_force_mst_weight(3, &[(0, 1, 4), (1, 2, 2), (0, 2, 5)]), Some(6));
/// assert_eq!(brute_force_mst_weight(3, &[(0, 1, 4)]), None);
/// ```
#[must_use]
pub fn brute_force_mst_weight(vertex_count: usize, edges: &[EdgeTriple]) -> Option<i64> {
    if vertex_count == 0 {
        return None;
    }
    let edges = deduplicate(edges);
    assert!(edges.len() <= 20, "exhaustive search is limited to 20 edges");

    let tree_size = vertex_count - 1;
    let mut best: Option<i64> = None;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != tree_size {
            continue;
        }
        let chosen: Vec<EdgeTriple> = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| *edge)
            .collect();
        if spans(vertex_count, &chosen) {
            let weight = chosen.iter().map(|&(_, _, w)| w).sum();
            best = Some(best.map_or(weight, |current: i64| current.min(weight)));
        }
    }
    best
}

/// Keeps the last weight given to each unordered pair.
fn deduplicate(edges: &[EdgeTriple]) -> Vec<EdgeTriple> {
    let mut unique: Vec<EdgeTriple> = Vec::new();
    for &(left, right, weight) in edges {
        let key = (left.min(right), left.max(right));
        match unique.iter_mut().find(|(l, r, _)| (*l, *r) == key) {
            Some(existing) => existing.2 = weight,
            None => unique.push((key.0, key.1, weight)),
        }
    }
    unique
}

fn spans(vertex_count: usize, edges: &[EdgeTriple]) -> bool {
    let mut seen = vec![false; vertex_count];
    let mut stack = vec![0];
    seen[0] = true;
    while let Some(vertex) = stack.pop() {
        for &(left, right, _) in edges {
            let next = match (left == vertex, right == vertex) {
                (true, _) => right,
                (_, true) => left,
                _ => continue,
            };
            if !seen[next] {
                seen[next] = true;
                stack.push(next);
            }
        }
    }
    seen.into_iter().all(|reached| reached)
}
