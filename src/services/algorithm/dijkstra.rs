//! Dijkstra算法模块
//!
//! 包含带权图单源最短路径算法实现。
//! 不拒绝负权边，但负权图上的结果没有保证

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::{checked_distance, VertexId, Weight};
use crate::graph::Graph;
use crate::services::algorithm::shortest_path::ShortestPathResult;

/// Dijkstra算法结构体
pub struct Dijkstra;

/// 节点距离结构体，用于优先队列
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct VertexDistance {
    vertex: VertexId,
    distance: Weight,
}

impl Ord for VertexDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        // 反转比较得到最小堆，距离相同时编号小的先出队
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for VertexDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Dijkstra {
    /// 计算从源点到所有顶点的最短距离
    pub fn shortest_paths<G: Graph + ?Sized>(
        graph: &G,
        source: VertexId,
    ) -> GraphResult<ShortestPathResult> {
        if !graph.has_vertex(source) {
            return Err(GraphError::VertexNotFound(source));
        }
        log::debug!("Dijkstra 源点 {}", source);

        let mut result = ShortestPathResult::new(graph, source);
        let mut visited: HashSet<VertexId> = HashSet::new();
        let mut to_visit: BinaryHeap<VertexDistance> = BinaryHeap::new();

        to_visit.push(VertexDistance {
            vertex: source,
            distance: 0,
        });

        while let Some(VertexDistance { vertex, distance }) = to_visit.pop() {
            if !visited.insert(vertex) {
                continue;
            }

            for (neighbor, weight) in graph.outgoing(vertex) {
                let Some(candidate) = checked_distance(distance, weight) else {
                    continue;
                };

                if result.relax(neighbor, vertex, candidate) {
                    to_visit.push(VertexDistance {
                        vertex: neighbor,
                        distance: candidate,
                    });
                }
            }
        }

        Ok(result)
    }

    /// 查找从源点到目标顶点的最短路径，返回 (路径, 距离)
    pub fn shortest_path<G: Graph + ?Sized>(
        graph: &G,
        source: VertexId,
        target: VertexId,
    ) -> GraphResult<(Vec<VertexId>, Weight)> {
        if !graph.has_vertex(target) {
            return Err(GraphError::VertexNotFound(target));
        }

        let result = Self::shortest_paths(graph, source)?;
        let path = result.path_to(target)?;
        let distance = result
            .distance_to(target)
            .ok_or(GraphError::VertexNotFound(target))?;
        Ok((path, distance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::INFINITY;
    use crate::graph::AdjacencyListGraph;

    fn create_test_graph() -> AdjacencyListGraph {
        AdjacencyListGraph::from_edges(
            true,
            [(0, 1, 4), (0, 2, 2), (1, 2, 1), (1, 3, 5), (2, 3, 8)],
        )
    }

    #[test]
    fn test_shortest_distances() {
        let graph = create_test_graph();
        let result = Dijkstra::shortest_paths(&graph, 0).expect("Dijkstra should succeed in test");

        assert_eq!(result.distance_to(0), Some(0));
        assert_eq!(result.distance_to(1), Some(4));
        assert_eq!(result.distance_to(2), Some(2));
        assert_eq!(result.distance_to(3), Some(9));
    }

    #[test]
    fn test_shortest_path() {
        let graph = create_test_graph();
        let (path, distance) =
            Dijkstra::shortest_path(&graph, 0, 3).expect("Path should exist in test");
        assert_eq!(path, vec![0, 1, 3]);
        assert_eq!(distance, 9);
    }

    #[test]
    fn test_undirected_reading() {
        let graph = AdjacencyListGraph::from_edges(
            false,
            [(0, 1, 5), (0, 2, 2), (1, 2, 1), (1, 3, 5), (2, 3, 8)],
        );
        let result = Dijkstra::shortest_paths(&graph, 0).expect("Dijkstra should succeed in test");

        assert_eq!(result.distance_to(1), Some(3));
        assert_eq!(result.distance_to(2), Some(2));
        assert_eq!(result.distance_to(3), Some(8));
        assert_eq!(result.path_to(3), Ok(vec![0, 2, 1, 3]));
    }

    #[test]
    fn test_no_path() {
        let graph = AdjacencyListGraph::from_edges(true, [(0, 1, 4), (2, 1, 1)]);
        let result = Dijkstra::shortest_paths(&graph, 0).expect("Dijkstra should succeed in test");

        assert_eq!(result.distance_to(2), Some(INFINITY));
        assert!(!result.predecessors.contains_key(&2));
        assert_eq!(
            Dijkstra::shortest_path(&graph, 0, 2),
            Err(GraphError::TargetUnreachable {
                start: 0,
                target: 2
            })
        );
    }

    #[test]
    fn test_same_node() {
        let graph = create_test_graph();
        let (path, distance) =
            Dijkstra::shortest_path(&graph, 0, 0).expect("Path should exist in test");
        assert_eq!(path, vec![0]);
        assert_eq!(distance, 0);
    }

    #[test]
    fn test_missing_vertices() {
        let graph = create_test_graph();
        assert_eq!(
            Dijkstra::shortest_paths(&graph, 42),
            Err(GraphError::VertexNotFound(42))
        );
        assert_eq!(
            Dijkstra::shortest_path(&graph, 0, 42),
            Err(GraphError::VertexNotFound(42))
        );
    }
}
