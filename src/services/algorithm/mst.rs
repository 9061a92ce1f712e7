//! 最小生成树结果与校验
//!
//! [`MstResult`] 由Kruskal和两种Prim实现共用，
//! [`MstValidator`] 检查给定边集是否为图的最小生成树

use serde::Serialize;
use std::collections::BTreeSet;

use crate::core::types::VertexId;
use crate::graph::{Edge, Graph};
use crate::services::algorithm::kruskal::Kruskal;
use crate::services::algorithm::union_find::UnionFind;

/// 最小生成树结果
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MstResult {
    /// 树边，端点按升序规范化
    pub edges: Vec<Edge>,
    /// 总权重，用 i64 避免累加溢出
    pub total_weight: i64,
    /// 生成树覆盖的顶点
    pub vertices: BTreeSet<VertexId>,
}

impl MstResult {
    pub fn new(edges: Vec<Edge>) -> Self {
        let total_weight = edges.iter().map(|edge| i64::from(edge.weight)).sum();
        let vertices = edges
            .iter()
            .flat_map(|edge| [edge.from, edge.to])
            .collect();

        Self {
            edges,
            total_weight,
            vertices,
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 是否包含连接两个顶点的树边（不区分方向）
    pub fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.edges
            .iter()
            .any(|edge| (edge.from == u && edge.to == v) || (edge.from == v && edge.to == u))
    }
}

/// 最小生成树校验器
pub struct MstValidator;

impl MstValidator {
    /// 检查 `edges` 是否为 `graph` 的一棵最小生成树
    pub fn is_mst<G: Graph + ?Sized>(graph: &G, edges: &[Edge]) -> bool {
        if graph.is_directed() {
            return false;
        }

        let vertex_count = graph.vertex_count();
        if edges.len() != vertex_count.saturating_sub(1) {
            log::debug!(
                "MST 边数 {} 与顶点数 {} 不匹配",
                edges.len(),
                vertex_count
            );
            return false;
        }

        let mut union_find = UnionFind::new(graph.vertices());
        let mut total_weight: i64 = 0;

        for edge in edges {
            if edge.from == edge.to {
                return false;
            }

            match graph.weight(edge.from, edge.to) {
                Ok(weight) if weight == edge.weight => {}
                _ => {
                    log::debug!("MST 边 {} 与图不一致", edge);
                    return false;
                }
            }

            // 成环
            if !union_find.union(edge.from, edge.to) {
                return false;
            }

            total_weight += i64::from(edge.weight);
        }

        match Kruskal::minimum_spanning_tree(graph) {
            Ok(expected) => expected.total_weight == total_weight,
            Err(_) => false,
        }
    }
}
