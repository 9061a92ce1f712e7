//! Prim算法模块
//!
//! 提供两种实现：
//! - [`Prim::minimum_spanning_tree`]：每轮线性扫描候选顶点，O(V^2)，适合稠密图
//! - [`Prim::with_priority_queue`]：二叉堆加延迟删除，O(E log V)，适合稀疏图

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::{GraphKind, VertexId, Weight};
use crate::graph::{Edge, Graph};
use crate::services::algorithm::mst::MstResult;

/// Prim算法结构体
pub struct Prim;

impl Prim {
    /// 从 `start` 出发生长最小生成树（线性扫描版本）
    pub fn minimum_spanning_tree<G: Graph + ?Sized>(
        graph: &G,
        start: VertexId,
    ) -> GraphResult<MstResult> {
        Self::check_input(graph, start, "prim")?;

        let vertex_count = graph.vertex_count();
        let mut in_tree: HashSet<VertexId> = HashSet::with_capacity(vertex_count);
        // 树外顶点 -> (最小连接权重, 树内端点)
        let mut best: HashMap<VertexId, (Weight, VertexId)> = HashMap::new();
        let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));

        in_tree.insert(start);
        Self::update_candidates(graph, start, &in_tree, &mut best);

        while in_tree.len() < vertex_count {
            let Some((weight, vertex, parent)) = best
                .iter()
                .map(|(&vertex, &(weight, parent))| (weight, vertex, parent))
                .min()
            else {
                log::debug!("Prim 从顶点 {} 只覆盖了 {} 个顶点", start, in_tree.len());
                return Err(GraphError::GraphNotConnected);
            };

            best.remove(&vertex);
            in_tree.insert(vertex);
            edges.push(Edge::new(parent, vertex, weight).normalized());
            Self::update_candidates(graph, vertex, &in_tree, &mut best);
        }

        Ok(Self::finish(graph, edges))
    }

    /// 从 `start` 出发生长最小生成树（优先队列版本）
    pub fn with_priority_queue<G: Graph + ?Sized>(
        graph: &G,
        start: VertexId,
    ) -> GraphResult<MstResult> {
        Self::check_input(graph, start, "prim_priority_queue")?;

        let vertex_count = graph.vertex_count();
        let mut in_tree: HashSet<VertexId> = HashSet::with_capacity(vertex_count);
        let mut heap: BinaryHeap<Reverse<(Weight, VertexId, VertexId)>> = BinaryHeap::new();
        let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1));

        in_tree.insert(start);
        for (neighbor, weight) in graph.outgoing(start) {
            if neighbor != start {
                heap.push(Reverse((weight, neighbor, start)));
            }
        }

        while let Some(Reverse((weight, vertex, parent))) = heap.pop() {
            // 延迟删除：已在树中的顶点直接跳过
            if !in_tree.insert(vertex) {
                continue;
            }
            edges.push(Edge::new(parent, vertex, weight).normalized());

            if in_tree.len() == vertex_count {
                break;
            }

            for (neighbor, weight) in graph.outgoing(vertex) {
                if !in_tree.contains(&neighbor) {
                    heap.push(Reverse((weight, neighbor, vertex)));
                }
            }
        }

        if in_tree.len() < vertex_count {
            log::debug!("Prim 从顶点 {} 只覆盖了 {} 个顶点", start, in_tree.len());
            return Err(GraphError::GraphNotConnected);
        }

        Ok(Self::finish(graph, edges))
    }

    fn check_input<G: Graph + ?Sized>(
        graph: &G,
        start: VertexId,
        operation: &'static str,
    ) -> GraphResult<()> {
        if graph.is_directed() {
            return Err(GraphError::wrong_kind(operation, GraphKind::Undirected));
        }
        if !graph.has_vertex(start) {
            return Err(GraphError::VertexNotFound(start));
        }
        log::debug!("{} 起点 {}, 顶点数 {}", operation, start, graph.vertex_count());
        Ok(())
    }

    fn update_candidates<G: Graph + ?Sized>(
        graph: &G,
        vertex: VertexId,
        in_tree: &HashSet<VertexId>,
        best: &mut HashMap<VertexId, (Weight, VertexId)>,
    ) {
        for (neighbor, weight) in graph.outgoing(vertex) {
            if in_tree.contains(&neighbor) {
                continue;
            }
            let improved = best
                .get(&neighbor)
                .map_or(true, |&(current, _)| weight < current);
            if improved {
                best.insert(neighbor, (weight, vertex));
            }
        }
    }

    fn finish<G: Graph + ?Sized>(graph: &G, edges: Vec<Edge>) -> MstResult {
        let mut result = MstResult::new(edges);
        // 单顶点图没有边，顶点集合需要单独补上
        result.vertices.extend(graph.vertices());
        result
    }
}
