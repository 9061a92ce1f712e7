//! 单源最短路径结果
//!
//! Dijkstra 与 Bellman-Ford 共用的结果结构

use serde::Serialize;
use std::collections::HashMap;

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::{VertexId, Weight, INFINITY};
use crate::graph::Graph;

/// 单源最短路径结果
///
/// 图中每个顶点都有距离条目，不可达顶点的距离为 [`INFINITY`] 且没有前驱
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathResult {
    pub source: VertexId,
    pub distances: HashMap<VertexId, Weight>,
    pub predecessors: HashMap<VertexId, VertexId>,
}

impl ShortestPathResult {
    pub(crate) fn new<G: Graph + ?Sized>(graph: &G, source: VertexId) -> Self {
        let mut distances: HashMap<VertexId, Weight> = graph
            .vertices()
            .into_iter()
            .map(|vertex| (vertex, INFINITY))
            .collect();
        distances.insert(source, 0);

        Self {
            source,
            distances,
            predecessors: HashMap::new(),
        }
    }

    /// 当前已知距离，不在图中的顶点返回 `None`
    pub fn distance_to(&self, vertex: VertexId) -> Option<Weight> {
        self.distances.get(&vertex).copied()
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.distance_to(vertex)
            .is_some_and(|distance| distance != INFINITY)
    }

    /// 松弛：若经由 `via` 到达 `vertex` 更短则更新，返回是否更新
    pub(crate) fn relax(&mut self, vertex: VertexId, via: VertexId, candidate: Weight) -> bool {
        let current = self.distance_to(vertex).unwrap_or(INFINITY);
        if candidate < current {
            self.distances.insert(vertex, candidate);
            self.predecessors.insert(vertex, via);
            true
        } else {
            false
        }
    }

    /// 沿前驱重建从源点到 `target` 的路径
    pub fn path_to(&self, target: VertexId) -> GraphResult<Vec<VertexId>> {
        match self.distance_to(target) {
            None => return Err(GraphError::VertexNotFound(target)),
            Some(INFINITY) => {
                return Err(GraphError::TargetUnreachable {
                    start: self.source,
                    target,
                })
            }
            Some(_) => {}
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            match self.predecessors.get(&current) {
                Some(&predecessor) => {
                    path.push(predecessor);
                    current = predecessor;
                }
                None => {
                    return Err(GraphError::TargetUnreachable {
                        start: self.source,
                        target,
                    })
                }
            }
            // 前驱链成环只可能出现在负权图上
            if path.len() > self.distances.len() {
                return Err(GraphError::NegativeCycleDetected);
            }
        }

        path.reverse();
        Ok(path)
    }

    /// 所有可达顶点，按升序排列
    pub fn reachable_vertices(&self) -> Vec<VertexId> {
        let mut vertices: Vec<VertexId> = self
            .distances
            .iter()
            .filter(|(_, &distance)| distance != INFINITY)
            .map(|(&vertex, _)| vertex)
            .collect();
        vertices.sort_unstable();
        vertices
    }
}
