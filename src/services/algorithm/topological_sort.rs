//! 拓扑排序算法模块
//!
//! 包含有向图的拓扑排序算法实现

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::{GraphKind, VertexId};
use crate::graph::Graph;
use crate::services::algorithm::cycle_detection::CycleDetection;
use crate::services::algorithm::dfs::Dfs;

/// 拓扑排序算法结构体
pub struct TopologicalSort;

impl TopologicalSort {
    /// 按DFS完成时间降序排列所有顶点
    ///
    /// 不检测环：输入有环时返回的顺序没有意义（但不会失败），
    /// 需要保证无环时使用 [`TopologicalSort::sort_checked`]
    pub fn sort<G: Graph + ?Sized>(graph: &G) -> GraphResult<Vec<VertexId>> {
        Self::require_directed(graph, "topological_sort")?;

        let dfs = Dfs::traverse_all(graph);
        let mut vertices = graph.vertices();
        vertices.sort_by_key(|vertex| Reverse(dfs.finish_time(*vertex).unwrap_or(0)));
        Ok(vertices)
    }

    /// 与 [`TopologicalSort::sort`] 顺序相同，输入有环时返回 `CycleDetected`
    pub fn sort_checked<G: Graph + ?Sized>(graph: &G) -> GraphResult<Vec<VertexId>> {
        Self::require_directed(graph, "topological_sort")?;

        if CycleDetection::has_cycle_directed(graph) {
            return Err(GraphError::CycleDetected);
        }
        Self::sort(graph)
    }

    /// 使用Kahn算法（基于入度）进行拓扑排序
    ///
    /// 多个顶点同时入度为0时先输出编号最小者
    pub fn sort_kahn<G: Graph + ?Sized>(graph: &G) -> GraphResult<Vec<VertexId>> {
        Self::require_directed(graph, "topological_sort_kahn")?;

        let mut in_degree = Self::in_degrees(graph);
        let mut ready: BTreeSet<VertexId> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(vertex, _)| *vertex)
            .collect();

        let mut result = Vec::with_capacity(graph.vertex_count());

        while let Some(vertex) = ready.pop_first() {
            result.push(vertex);

            for neighbor in graph.neighbors(vertex) {
                if let Some(degree) = in_degree.get_mut(&neighbor) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.insert(neighbor);
                    }
                }
            }
        }

        // 结果中的顶点数少于图中顶点数，说明存在环
        if result.len() != graph.vertex_count() {
            return Err(GraphError::CycleDetected);
        }

        Ok(result)
    }

    /// 获取所有入度为0的顶点（没有依赖的顶点），按升序排列
    pub fn source_vertices<G: Graph + ?Sized>(graph: &G) -> Vec<VertexId> {
        let in_degree = Self::in_degrees(graph);
        let mut sources: Vec<VertexId> = in_degree
            .into_iter()
            .filter(|(_, degree)| *degree == 0)
            .map(|(vertex, _)| vertex)
            .collect();
        sources.sort_unstable();
        sources
    }

    /// 获取所有出度为0的顶点（没有后继的顶点），按升序排列
    pub fn sink_vertices<G: Graph + ?Sized>(graph: &G) -> Vec<VertexId> {
        graph
            .vertices()
            .into_iter()
            .filter(|vertex| graph.neighbors(*vertex).is_empty())
            .collect()
    }

    fn in_degrees<G: Graph + ?Sized>(graph: &G) -> HashMap<VertexId, usize> {
        let mut in_degree: HashMap<VertexId, usize> =
            graph.vertices().into_iter().map(|vertex| (vertex, 0)).collect();

        for vertex in graph.vertices() {
            for neighbor in graph.neighbors(vertex) {
                *in_degree.entry(neighbor).or_insert(0) += 1;
            }
        }

        in_degree
    }

    fn require_directed<G: Graph + ?Sized>(
        graph: &G,
        operation: &'static str,
    ) -> GraphResult<()> {
        if graph.is_directed() {
            Ok(())
        } else {
            Err(GraphError::wrong_kind(operation, GraphKind::Directed))
        }
    }
}
