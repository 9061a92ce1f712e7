//! BFS算法模块
//!
//! 包含广度优先搜索相关算法实现

use serde::Serialize;
use std::collections::{HashMap, VecDeque};

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::VertexId;
use crate::graph::Graph;

/// BFS算法结构体
pub struct Bfs;

/// BFS遍历结果，未到达的顶点不出现在任何映射中
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BfsResult {
    /// 层序访问顺序
    pub order: Vec<VertexId>,
    /// 距起点的跳数
    pub distance: HashMap<VertexId, usize>,
    /// 树边父节点
    pub parent: HashMap<VertexId, VertexId>,
}

impl BfsResult {
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.distance.contains_key(&vertex)
    }

    pub fn distance_to(&self, vertex: VertexId) -> Option<usize> {
        self.distance.get(&vertex).copied()
    }

    /// 从起点到 `vertex` 的最少跳数路径
    pub fn path_to(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        if !self.contains(vertex) {
            return None;
        }

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(&parent) = self.parent.get(&current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        Some(path)
    }
}

impl Bfs {
    /// 从起点层序遍历，返回访问顺序、跳数和父节点
    pub fn traverse<G: Graph + ?Sized>(graph: &G, start: VertexId) -> GraphResult<BfsResult> {
        if !graph.has_vertex(start) {
            return Err(GraphError::VertexNotFound(start));
        }
        log::debug!("BFS 起点 {}", start);

        let mut result = BfsResult::default();
        let mut queue: VecDeque<VertexId> = VecDeque::new();

        result.distance.insert(start, 0);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            result.order.push(current);
            let next_distance = result.distance.get(&current).copied().unwrap_or(0) + 1;

            for neighbor in graph.neighbors(current) {
                if !result.contains(neighbor) {
                    result.distance.insert(neighbor, next_distance);
                    result.parent.insert(neighbor, current);
                    queue.push_back(neighbor);
                }
            }
        }

        Ok(result)
    }

    /// 使用BFS查找最少跳数路径（忽略权重）
    pub fn shortest_path<G: Graph + ?Sized>(
        graph: &G,
        from: VertexId,
        to: VertexId,
    ) -> GraphResult<Vec<VertexId>> {
        if !graph.has_vertex(to) {
            return Err(GraphError::VertexNotFound(to));
        }

        Self::traverse(graph, from)?
            .path_to(to)
            .ok_or(GraphError::TargetUnreachable {
                start: from,
                target: to,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyListGraph;

    fn create_test_graph() -> AdjacencyListGraph {
        AdjacencyListGraph::from_edges(true, [(1, 2, 1), (1, 3, 1), (2, 4, 1), (3, 4, 1)])
    }

    #[test]
    fn test_traverse() {
        let graph = create_test_graph();
        let result = Bfs::traverse(&graph, 1).expect("BFS should succeed in test");

        assert_eq!(result.order, vec![1, 2, 3, 4]);
        assert_eq!(result.parent.get(&4), Some(&2));
        assert!(!result.parent.contains_key(&1));
    }

    #[test]
    fn test_distances() {
        let graph = create_test_graph();
        let result = Bfs::traverse(&graph, 1).expect("BFS should succeed in test");

        assert_eq!(result.distance_to(1), Some(0));
        assert_eq!(result.distance_to(2), Some(1));
        assert_eq!(result.distance_to(3), Some(1));
        assert_eq!(result.distance_to(4), Some(2));
    }

    #[test]
    fn test_unreached_absent() {
        let mut graph = create_test_graph();
        graph.add_vertex(9);

        let result = Bfs::traverse(&graph, 2).expect("BFS should succeed in test");
        assert_eq!(result.order, vec![2, 4]);
        assert!(!result.contains(1));
        assert!(!result.contains(9));
        assert_eq!(result.distance_to(9), None);
    }

    #[test]
    fn test_missing_start() {
        let graph = create_test_graph();
        assert_eq!(
            Bfs::traverse(&graph, 42),
            Err(GraphError::VertexNotFound(42))
        );
    }

    #[test]
    fn test_shortest_path() {
        let graph = create_test_graph();
        let path = Bfs::shortest_path(&graph, 1, 4).expect("Path should exist in test");
        assert_eq!(path, vec![1, 2, 4]);
    }

    #[test]
    fn test_shortest_path_same_node() {
        let graph = create_test_graph();
        let path = Bfs::shortest_path(&graph, 1, 1).expect("Path should exist in test");
        assert_eq!(path, vec![1]);
    }

    #[test]
    fn test_shortest_path_no_path() {
        let graph = create_test_graph();
        assert_eq!(
            Bfs::shortest_path(&graph, 4, 1),
            Err(GraphError::TargetUnreachable {
                start: 4,
                target: 1
            })
        );
    }
}
