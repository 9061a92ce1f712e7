//! 邻接表后端
//!
//! 使用有序映射存储出边，邻居天然按升序排列

use std::collections::BTreeMap;

use super::Graph;
use crate::core::error::{GraphError, GraphResult};
use crate::core::types::{VertexId, Weight};

/// 邻接表图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyListGraph {
    adjacency: BTreeMap<VertexId, BTreeMap<VertexId, Weight>>,
    directed: bool,
    edge_count: usize,
}

impl AdjacencyListGraph {
    pub fn new(directed: bool) -> Self {
        Self {
            adjacency: BTreeMap::new(),
            directed,
            edge_count: 0,
        }
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// 由边列表构造
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId, Weight)>,
    {
        let mut graph = Self::new(directed);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// 顶点出度（无向图中即度数，自环计一次）
    pub fn degree(&self, vertex: VertexId) -> usize {
        self.adjacency.get(&vertex).map_or(0, BTreeMap::len)
    }
}

impl Default for AdjacencyListGraph {
    fn default() -> Self {
        Self::undirected()
    }
}

impl Graph for AdjacencyListGraph {
    fn add_vertex(&mut self, vertex: VertexId) {
        self.adjacency.entry(vertex).or_default();
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        self.add_vertex(from);
        self.add_vertex(to);

        let previous = self
            .adjacency
            .get_mut(&from)
            .and_then(|edges| edges.insert(to, weight));

        if !self.directed && from != to {
            if let Some(edges) = self.adjacency.get_mut(&to) {
                edges.insert(from, weight);
            }
        }

        if previous.is_none() {
            self.edge_count += 1;
        }
    }

    fn remove_vertex(&mut self, vertex: VertexId) {
        let Some(outgoing) = self.adjacency.remove(&vertex) else {
            return;
        };

        // 出边（含自环）各计一次
        let mut removed = outgoing.len();

        if self.directed {
            for edges in self.adjacency.values_mut() {
                if edges.remove(&vertex).is_some() {
                    removed += 1;
                }
            }
        } else {
            for neighbor in outgoing.keys().filter(|&&n| n != vertex) {
                if let Some(edges) = self.adjacency.get_mut(neighbor) {
                    edges.remove(&vertex);
                }
            }
        }

        self.edge_count -= removed;
        log::trace!("删除顶点 {}，同时删除 {} 条边", vertex, removed);
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) {
        let removed = self
            .adjacency
            .get_mut(&from)
            .and_then(|edges| edges.remove(&to))
            .is_some();

        if !removed {
            return;
        }

        if !self.directed && from != to {
            if let Some(edges) = self.adjacency.get_mut(&to) {
                edges.remove(&from);
            }
        }

        self.edge_count -= 1;
    }

    fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        self.adjacency
            .get(&vertex)
            .map(|edges| edges.keys().copied().collect())
            .unwrap_or_default()
    }

    fn vertices(&self) -> Vec<VertexId> {
        self.adjacency.keys().copied().collect()
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.adjacency
            .get(&from)
            .is_some_and(|edges| edges.contains_key(&to))
    }

    fn weight(&self, from: VertexId, to: VertexId) -> GraphResult<Weight> {
        self.adjacency
            .get(&from)
            .and_then(|edges| edges.get(&to))
            .copied()
            .ok_or(GraphError::EdgeNotFound { from, to })
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn outgoing(&self, vertex: VertexId) -> Vec<(VertexId, Weight)> {
        self.adjacency
            .get(&vertex)
            .map(|edges| edges.iter().map(|(&to, &weight)| (to, weight)).collect())
            .unwrap_or_default()
    }
}
