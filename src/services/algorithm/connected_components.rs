//! 连通分量算法模块
//!
//! 包含无向图连通分量检测相关算法实现。
//! 有向图不支持（返回空结果）

use std::collections::HashSet;

use crate::core::types::VertexId;
use crate::graph::Graph;

/// 连通分量算法结构体
pub struct ConnectedComponents;

impl ConnectedComponents {
    /// 查找无向图中的所有连通分量
    ///
    /// 每个分量内部按升序排列，分量之间按最小顶点排序；有向图返回空
    pub fn find<G: Graph + ?Sized>(graph: &G) -> Vec<Vec<VertexId>> {
        if graph.is_directed() {
            log::debug!("连通分量仅支持无向图，返回空结果");
            return Vec::new();
        }

        let mut components = Vec::new();
        let mut visited = HashSet::new();

        for vertex in graph.vertices() {
            if !visited.contains(&vertex) {
                components.push(Self::collect_component(graph, vertex, &mut visited));
            }
        }

        components
    }

    fn collect_component<G: Graph + ?Sized>(
        graph: &G,
        start: VertexId,
        visited: &mut HashSet<VertexId>,
    ) -> Vec<VertexId> {
        let mut component = Vec::new();
        let mut stack = vec![start];
        visited.insert(start);

        while let Some(vertex) = stack.pop() {
            component.push(vertex);
            for neighbor in graph.neighbors(vertex) {
                if visited.insert(neighbor) {
                    stack.push(neighbor);
                }
            }
        }

        component.sort_unstable();
        component
    }

    /// 计算连通分量的数量
    pub fn count<G: Graph + ?Sized>(graph: &G) -> usize {
        Self::find(graph).len()
    }

    /// 查找包含指定顶点的连通分量
    pub fn component_of<G: Graph + ?Sized>(graph: &G, vertex: VertexId) -> Option<Vec<VertexId>> {
        if graph.is_directed() || !graph.has_vertex(vertex) {
            return None;
        }

        let mut visited = HashSet::new();
        Some(Self::collect_component(graph, vertex, &mut visited))
    }

    /// 检查两个顶点是否在同一个连通分量中
    pub fn in_same_component<G: Graph + ?Sized>(
        graph: &G,
        first: VertexId,
        second: VertexId,
    ) -> bool {
        Self::component_of(graph, first)
            .map(|component| component.binary_search(&second).is_ok())
            .unwrap_or(false)
    }
}
