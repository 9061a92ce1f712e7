//! Kruskal算法模块
//!
//! 按权重升序选边，用并查集排除成环的边

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::GraphKind;
use crate::graph::{Edge, Graph};
use crate::services::algorithm::mst::MstResult;
use crate::services::algorithm::union_find::UnionFind;

/// Kruskal算法结构体
pub struct Kruskal;

impl Kruskal {
    /// 计算无向图的最小生成树
    ///
    /// 权重相同的边按 (from, to) 排序，结果是确定的
    pub fn minimum_spanning_tree<G: Graph + ?Sized>(graph: &G) -> GraphResult<MstResult> {
        if graph.is_directed() {
            return Err(GraphError::wrong_kind("kruskal", GraphKind::Undirected));
        }

        let vertex_count = graph.vertex_count();
        if vertex_count == 0 {
            return Ok(MstResult::default());
        }
        log::debug!("Kruskal 顶点数 {}, 边数 {}", vertex_count, graph.edge_count());

        // 每条无向边只取一次，自环不可能在生成树中
        let mut edges: Vec<Edge> = graph
            .edges()
            .into_iter()
            .filter(|edge| edge.from < edge.to)
            .collect();
        edges.sort_by_key(|edge| (edge.weight, edge.from, edge.to));

        let mut union_find = UnionFind::new(graph.vertices());
        let mut selected = Vec::with_capacity(vertex_count - 1);

        for edge in edges {
            if selected.len() == vertex_count - 1 {
                break;
            }
            if union_find.union(edge.from, edge.to) {
                selected.push(edge);
            }
        }

        if selected.len() != vertex_count - 1 {
            log::debug!(
                "Kruskal 只选出 {} 条边，图不连通（{} 个分量）",
                selected.len(),
                union_find.set_count()
            );
            return Err(GraphError::GraphNotConnected);
        }

        let mut result = MstResult::new(selected);
        if vertex_count == 1 {
            result.vertices.extend(graph.vertices());
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyListGraph;
    use crate::services::algorithm::mst::MstValidator;

    /// 经典7顶点示例，MST总权重为19
    fn create_test_graph() -> AdjacencyListGraph {
        AdjacencyListGraph::from_edges(
            false,
            [
                (0, 1, 7),
                (0, 3, 5),
                (1, 2, 8),
                (1, 3, 9),
                (1, 4, 7),
                (2, 4, 5),
                (3, 4, 15),
                (3, 5, 6),
                (4, 5, 8),
                (4, 6, 9),
                (5, 6, 11),
            ],
        )
    }

    #[test]
    fn test_minimum_spanning_tree() {
        let graph = create_test_graph();
        let mst = Kruskal::minimum_spanning_tree(&graph).expect("Kruskal should succeed in test");

        assert_eq!(mst.total_weight, 39);
        assert_eq!(mst.edge_count(), 6);
        assert_eq!(
            mst.edges,
            vec![
                Edge::new(0, 3, 5),
                Edge::new(2, 4, 5),
                Edge::new(3, 5, 6),
                Edge::new(0, 1, 7),
                Edge::new(1, 4, 7),
                Edge::new(4, 6, 9),
            ]
        );
        assert!(MstValidator::is_mst(&graph, &mst.edges));
    }

    #[test]
    fn test_four_vertex_scenario() {
        let graph = AdjacencyListGraph::from_edges(
            false,
            [(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
        );
        let mst = Kruskal::minimum_spanning_tree(&graph).expect("Kruskal should succeed in test");

        assert_eq!(mst.total_weight, 19);
        assert!(mst.contains_edge(2, 3));
        assert!(mst.contains_edge(0, 3));
        assert!(mst.contains_edge(0, 1));
    }

    #[test]
    fn test_ignores_self_loops() {
        let graph = AdjacencyListGraph::from_edges(false, [(0, 0, -10), (0, 1, 3)]);
        let mst = Kruskal::minimum_spanning_tree(&graph).expect("Kruskal should succeed in test");
        assert_eq!(mst.edges, vec![Edge::new(0, 1, 3)]);
    }

    #[test]
    fn test_disconnected_graph() {
        let graph = AdjacencyListGraph::from_edges(false, [(0, 1, 1), (2, 3, 1)]);
        assert_eq!(
            Kruskal::minimum_spanning_tree(&graph),
            Err(GraphError::GraphNotConnected)
        );
    }

    #[test]
    fn test_directed_graph_rejected() {
        let graph = AdjacencyListGraph::from_edges(true, [(0, 1, 1)]);
        assert_eq!(
            Kruskal::minimum_spanning_tree(&graph),
            Err(GraphError::wrong_kind("kruskal", GraphKind::Undirected))
        );
    }

    #[test]
    fn test_trivial_graphs() {
        let empty = AdjacencyListGraph::undirected();
        assert_eq!(
            Kruskal::minimum_spanning_tree(&empty),
            Ok(MstResult::default())
        );

        let mut single = AdjacencyListGraph::undirected();
        single.add_vertex(3);
        let mst = Kruskal::minimum_spanning_tree(&single).expect("Kruskal should succeed in test");
        assert!(mst.edges.is_empty());
        assert!(mst.vertices.contains(&3));
    }
}
