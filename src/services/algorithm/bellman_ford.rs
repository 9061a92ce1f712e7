//! Bellman-Ford算法模块
//!
//! 包含Bellman-Ford最短路径算法实现
//! 支持负权边，可检测负权环

use std::collections::{HashMap, HashSet};

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::{checked_distance, VertexId, Weight, INFINITY};
use crate::graph::{Edge, Graph};
use crate::services::algorithm::shortest_path::ShortestPathResult;

/// Bellman-Ford算法结构体
pub struct BellmanFord;

impl BellmanFord {
    /// 执行Bellman-Ford算法
    ///
    /// 对所有弧松弛 V-1 轮（某一轮没有更新时提前结束），
    /// 之后再检查一轮，仍可松弛则返回 `NegativeCycleDetected`
    pub fn shortest_paths<G: Graph + ?Sized>(
        graph: &G,
        source: VertexId,
    ) -> GraphResult<ShortestPathResult> {
        if !graph.has_vertex(source) {
            return Err(GraphError::VertexNotFound(source));
        }
        log::debug!("Bellman-Ford 源点 {}", source);

        let arcs = Self::arcs(graph);
        let mut result = ShortestPathResult::new(graph, source);

        for _ in 1..graph.vertex_count() {
            let mut updated = false;

            for arc in &arcs {
                let dist_from = result.distance_to(arc.from).unwrap_or(INFINITY);
                if let Some(candidate) = checked_distance(dist_from, arc.weight) {
                    updated |= result.relax(arc.to, arc.from, candidate);
                }
            }

            // 如果没有更新，提前终止
            if !updated {
                break;
            }
        }

        for arc in &arcs {
            let dist_from = result.distance_to(arc.from).unwrap_or(INFINITY);
            let dist_to = result.distance_to(arc.to).unwrap_or(INFINITY);
            if let Some(candidate) = checked_distance(dist_from, arc.weight) {
                if candidate < dist_to {
                    log::debug!("源点 {} 可达负权环（弧 {}）", source, arc);
                    return Err(GraphError::NegativeCycleDetected);
                }
            }
        }

        Ok(result)
    }

    /// 检测图中是否存在负权环
    ///
    /// 依次从尚未被覆盖的最小顶点运行Bellman-Ford，
    /// 按错误类型而不是错误消息识别负权环
    pub fn has_negative_cycle<G: Graph + ?Sized>(graph: &G) -> bool {
        let mut covered: HashSet<VertexId> = HashSet::new();

        for vertex in graph.vertices() {
            if covered.contains(&vertex) {
                continue;
            }

            match Self::shortest_paths(graph, vertex) {
                Ok(result) => covered.extend(result.reachable_vertices()),
                Err(GraphError::NegativeCycleDetected) => return true,
                Err(err) => {
                    log::warn!("负权环检测从顶点 {} 启动失败: {}", vertex, err);
                    return false;
                }
            }
        }

        false
    }

    /// 查找一个负权环（如果存在），按边的方向给出环上顶点
    pub fn find_negative_cycle<G: Graph + ?Sized>(graph: &G) -> Option<Vec<VertexId>> {
        let vertices = graph.vertices();
        let n = vertices.len();
        let arcs = Self::arcs(graph);

        // 所有顶点距离初始化为0，相当于虚拟源点连向每个顶点
        let mut distances: HashMap<VertexId, Weight> =
            vertices.iter().map(|&vertex| (vertex, 0)).collect();
        let mut predecessors: HashMap<VertexId, VertexId> = HashMap::new();
        let mut last_updated = None;

        for _ in 0..n {
            last_updated = None;

            for arc in &arcs {
                let dist_from = distances.get(&arc.from).copied().unwrap_or(INFINITY);
                let dist_to = distances.get(&arc.to).copied().unwrap_or(INFINITY);
                if let Some(candidate) = checked_distance(dist_from, arc.weight) {
                    if candidate < dist_to {
                        distances.insert(arc.to, candidate);
                        predecessors.insert(arc.to, arc.from);
                        last_updated = Some(arc.to);
                    }
                }
            }

            if last_updated.is_none() {
                return None;
            }
        }

        // 第n轮仍有更新，回溯n步确保进入环
        let mut current = last_updated?;
        for _ in 0..n {
            current = *predecessors.get(&current)?;
        }

        let cycle_start = current;
        let mut cycle = vec![cycle_start];
        current = *predecessors.get(&cycle_start)?;
        while current != cycle_start {
            cycle.push(current);
            current = *predecessors.get(&current)?;
        }

        cycle.reverse();
        Some(cycle)
    }

    /// 所有有向弧；无向边按两个方向各给出一次
    fn arcs<G: Graph + ?Sized>(graph: &G) -> Vec<Edge> {
        graph
            .vertices()
            .into_iter()
            .flat_map(|from| {
                graph
                    .outgoing(from)
                    .into_iter()
                    .map(move |(to, weight)| Edge::new(from, to, weight))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyListGraph;

    fn create_positive_weight_graph() -> AdjacencyListGraph {
        AdjacencyListGraph::from_edges(
            true,
            [(0, 1, 4), (0, 2, 2), (1, 2, 1), (1, 3, 5), (2, 3, 8)],
        )
    }

    fn create_negative_weight_graph() -> AdjacencyListGraph {
        AdjacencyListGraph::from_edges(
            true,
            [(0, 1, -1), (0, 2, 4), (1, 2, 2), (1, 3, 3), (2, 3, -2)],
        )
    }

    fn create_negative_cycle_graph() -> AdjacencyListGraph {
        let mut graph =
            AdjacencyListGraph::from_edges(true, [(0, 1, 1), (1, 2, -3), (2, 0, 1)]);
        graph.add_vertex(3);
        graph
    }

    #[test]
    fn test_positive_weights() {
        let graph = create_positive_weight_graph();
        let result = BellmanFord::shortest_paths(&graph, 0).expect("Bellman-Ford should succeed in test");

        assert_eq!(result.distance_to(3), Some(9));
        assert_eq!(result.distance_to(2), Some(2));
        assert_eq!(result.path_to(3), Ok(vec![0, 1, 3]));
    }

    #[test]
    fn test_negative_weights() {
        let graph = create_negative_weight_graph();
        let result = BellmanFord::shortest_paths(&graph, 0).expect("Bellman-Ford should succeed in test");

        // 0 -> 1 -> 2 -> 3 = -1 + 2 + (-2) = -1
        assert_eq!(result.distance_to(3), Some(-1));
        assert_eq!(result.path_to(3), Ok(vec![0, 1, 2, 3]));
    }

    #[test]
    fn test_negative_cycle_detection() {
        let graph = create_negative_cycle_graph();
        assert_eq!(
            BellmanFord::shortest_paths(&graph, 0),
            Err(GraphError::NegativeCycleDetected)
        );
        // 从顶点3出发不可达负权环
        assert!(BellmanFord::shortest_paths(&graph, 3).is_ok());
    }

    #[test]
    fn test_has_negative_cycle() {
        assert!(BellmanFord::has_negative_cycle(&create_negative_cycle_graph()));
        assert!(!BellmanFord::has_negative_cycle(&create_negative_weight_graph()));
        assert!(!BellmanFord::has_negative_cycle(&AdjacencyListGraph::directed()));
    }

    #[test]
    fn test_has_negative_cycle_unreachable_from_first_vertex() {
        // 负权环不可从顶点0到达
        let mut graph = AdjacencyListGraph::from_edges(true, [(5, 6, 2), (6, 5, -4)]);
        graph.add_edge(0, 1, 1);

        assert!(BellmanFord::shortest_paths(&graph, 0).is_ok());
        assert!(BellmanFord::has_negative_cycle(&graph));
    }

    #[test]
    fn test_undirected_negative_edge_is_cycle() {
        let graph = AdjacencyListGraph::from_edges(false, [(0, 1, -1)]);
        assert!(BellmanFord::has_negative_cycle(&graph));
    }

    #[test]
    fn test_find_negative_cycle() {
        let graph = create_negative_cycle_graph();
        let cycle = BellmanFord::find_negative_cycle(&graph).expect("Cycle should exist in test");

        assert_eq!(cycle.len(), 3);
        let total: Weight = cycle
            .iter()
            .zip(cycle.iter().cycle().skip(1))
            .map(|(&from, &to)| graph.weight(from, to).expect("Cycle edge should exist in test"))
            .sum();
        assert!(total < 0);

        assert_eq!(
            BellmanFord::find_negative_cycle(&create_negative_weight_graph()),
            None
        );
    }

    #[test]
    fn test_unreachable_node() {
        let graph = create_negative_cycle_graph();
        let mut graph_without_cycle = graph.clone();
        graph_without_cycle.remove_edge(2, 0);

        let result = BellmanFord::shortest_paths(&graph_without_cycle, 0)
            .expect("Bellman-Ford should succeed in test");
        assert_eq!(result.distance_to(3), Some(INFINITY));
        assert!(!result.is_reachable(3));
    }

    #[test]
    fn test_missing_source() {
        let graph = create_positive_weight_graph();
        assert_eq!(
            BellmanFord::shortest_paths(&graph, 42),
            Err(GraphError::VertexNotFound(42))
        );
    }

    #[test]
    fn test_single_node() {
        let mut graph = AdjacencyListGraph::directed();
        graph.add_vertex(0);

        let result = BellmanFord::shortest_paths(&graph, 0).expect("Bellman-Ford should succeed in test");
        assert_eq!(result.distance_to(0), Some(0));
    }
}
