//! 环检测算法模块
//!
//! 包含有向图和无向图的环检测算法实现

use std::collections::{HashMap, HashSet};

use crate::core::types::VertexId;
use crate::graph::Graph;

/// 环检测算法结构体
pub struct CycleDetection;

/// 三色标记，未出现在映射中的顶点视为白色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Gray,
    Black,
}

impl CycleDetection {
    /// 根据图的方向性选择检测方式
    pub fn has_cycle<G: Graph + ?Sized>(graph: &G) -> bool {
        if graph.is_directed() {
            Self::has_cycle_directed(graph)
        } else {
            Self::has_cycle_undirected(graph)
        }
    }

    /// 检测有向图是否包含环（使用三色标记法）
    ///
    /// 指向灰色顶点的边是回边，即存在环
    pub fn has_cycle_directed<G: Graph + ?Sized>(graph: &G) -> bool {
        let mut colors: HashMap<VertexId, Color> = HashMap::new();

        for vertex in graph.vertices() {
            if !colors.contains_key(&vertex)
                && Self::dfs_has_cycle_directed(graph, vertex, &mut colors)
            {
                return true;
            }
        }

        false
    }

    fn dfs_has_cycle_directed<G: Graph + ?Sized>(
        graph: &G,
        vertex: VertexId,
        colors: &mut HashMap<VertexId, Color>,
    ) -> bool {
        colors.insert(vertex, Color::Gray);

        for neighbor in graph.neighbors(vertex) {
            match colors.get(&neighbor) {
                Some(Color::Black) => continue,
                Some(Color::Gray) => {
                    log::debug!("发现回边 {} -> {}", vertex, neighbor);
                    return true;
                }
                None => {
                    if Self::dfs_has_cycle_directed(graph, neighbor, colors) {
                        return true;
                    }
                }
            }
        }

        colors.insert(vertex, Color::Black);
        false
    }

    /// 检测无向图是否包含环
    ///
    /// 访问到已访问且不是父节点的邻居即为环，自环同样算作环
    pub fn has_cycle_undirected<G: Graph + ?Sized>(graph: &G) -> bool {
        let mut visited: HashSet<VertexId> = HashSet::new();

        for vertex in graph.vertices() {
            if !visited.contains(&vertex)
                && Self::dfs_has_cycle_undirected(graph, vertex, None, &mut visited)
            {
                return true;
            }
        }

        false
    }

    fn dfs_has_cycle_undirected<G: Graph + ?Sized>(
        graph: &G,
        vertex: VertexId,
        parent: Option<VertexId>,
        visited: &mut HashSet<VertexId>,
    ) -> bool {
        visited.insert(vertex);

        for neighbor in graph.neighbors(vertex) {
            if Some(neighbor) == parent {
                continue;
            }
            if visited.contains(&neighbor) {
                return true;
            }
            if Self::dfs_has_cycle_undirected(graph, neighbor, Some(vertex), visited) {
                return true;
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyListGraph;

    #[test]
    fn test_has_cycle_directed_with_cycle() {
        let graph = AdjacencyListGraph::from_edges(true, [(1, 2, 1), (2, 3, 1), (3, 1, 1)]);
        assert!(CycleDetection::has_cycle_directed(&graph));
        assert!(CycleDetection::has_cycle(&graph));
    }

    #[test]
    fn test_has_cycle_directed_no_cycle() {
        let graph = AdjacencyListGraph::from_edges(true, [(1, 2, 1), (2, 3, 1), (1, 3, 1)]);
        assert!(!CycleDetection::has_cycle_directed(&graph));
    }

    #[test]
    fn test_directed_two_way_edge_is_cycle() {
        let graph = AdjacencyListGraph::from_edges(true, [(1, 2, 1), (2, 1, 1)]);
        assert!(CycleDetection::has_cycle(&graph));
    }

    #[test]
    fn test_has_cycle_undirected_with_cycle() {
        let graph = AdjacencyListGraph::from_edges(false, [(1, 2, 1), (2, 3, 1), (3, 1, 1)]);
        assert!(CycleDetection::has_cycle_undirected(&graph));
        assert!(CycleDetection::has_cycle(&graph));
    }

    #[test]
    fn test_has_cycle_undirected_no_cycle() {
        let graph = AdjacencyListGraph::from_edges(false, [(1, 2, 1), (2, 3, 1), (5, 6, 1)]);
        assert!(!CycleDetection::has_cycle(&graph));
    }

    #[test]
    fn test_self_loop() {
        let directed = AdjacencyListGraph::from_edges(true, [(1, 1, 1)]);
        let undirected = AdjacencyListGraph::from_edges(false, [(1, 1, 1)]);
        assert!(CycleDetection::has_cycle(&directed));
        assert!(CycleDetection::has_cycle(&undirected));
    }

    #[test]
    fn test_empty_graph() {
        let directed = AdjacencyListGraph::directed();
        let undirected = AdjacencyListGraph::undirected();
        assert!(!CycleDetection::has_cycle(&directed));
        assert!(!CycleDetection::has_cycle(&undirected));
    }
}
