//! 邻接矩阵后端
//!
//! 顶点容量在构造时固定，矩阵一次性分配 capacity × capacity。
//! 顶点标识通过槽位索引映射到矩阵行列，删除顶点后槽位可复用。
//! 超出容量的 `add_vertex` 会被静默丢弃（仅记录警告日志）

use std::collections::HashMap;

use super::Graph;
use crate::config::GraphConfig;
use crate::core::error::{GraphError, GraphResult};
use crate::core::types::{VertexId, Weight};

/// 邻接矩阵图
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph {
    capacity: usize,
    directed: bool,
    /// 顶点标识 -> 槽位
    slots: HashMap<VertexId, usize>,
    /// 槽位 -> 顶点标识，空槽为 None
    labels: Vec<Option<VertexId>>,
    matrix: Vec<Vec<Option<Weight>>>,
    edge_count: usize,
}

impl AdjacencyMatrixGraph {
    pub fn new(capacity: usize, directed: bool) -> Self {
        Self {
            capacity,
            directed,
            slots: HashMap::with_capacity(capacity),
            labels: vec![None; capacity],
            matrix: vec![vec![None; capacity]; capacity],
            edge_count: 0,
        }
    }

    /// 使用配置中的矩阵容量构造
    pub fn with_config(config: &GraphConfig, directed: bool) -> Self {
        Self::new(config.matrix_capacity, directed)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 是否还能容纳新顶点
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    fn slot(&self, vertex: VertexId) -> Option<usize> {
        self.slots.get(&vertex).copied()
    }

    fn cell(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        let row = self.slot(from)?;
        let col = self.slot(to)?;
        self.matrix[row][col]
    }
}

impl Graph for AdjacencyMatrixGraph {
    fn add_vertex(&mut self, vertex: VertexId) {
        if self.slots.contains_key(&vertex) {
            return;
        }

        match self.labels.iter().position(Option::is_none) {
            Some(slot) => {
                self.labels[slot] = Some(vertex);
                self.slots.insert(vertex, slot);
            }
            None => {
                log::warn!(
                    "邻接矩阵容量已满 ({})，忽略顶点 {}",
                    self.capacity,
                    vertex
                );
            }
        }
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) {
        self.add_vertex(from);
        self.add_vertex(to);

        let (Some(row), Some(col)) = (self.slot(from), self.slot(to)) else {
            log::warn!("端点无法加入邻接矩阵，忽略边 {} -> {}", from, to);
            return;
        };

        let previous = self.matrix[row][col].replace(weight);
        if !self.directed {
            self.matrix[col][row] = Some(weight);
        }

        if previous.is_none() {
            self.edge_count += 1;
        }
    }

    fn remove_vertex(&mut self, vertex: VertexId) {
        let Some(slot) = self.slots.remove(&vertex) else {
            return;
        };

        // 行中的每一项都是一条逻辑边（无向图的镜像项与之相同）
        let mut removed = self.matrix[slot].iter().filter(|w| w.is_some()).count();
        if self.directed {
            removed += (0..self.capacity)
                .filter(|&row| row != slot && self.matrix[row][slot].is_some())
                .count();
        }

        for i in 0..self.capacity {
            self.matrix[slot][i] = None;
            self.matrix[i][slot] = None;
        }
        self.labels[slot] = None;
        self.edge_count -= removed;
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) {
        let (Some(row), Some(col)) = (self.slot(from), self.slot(to)) else {
            return;
        };

        if self.matrix[row][col].take().is_none() {
            return;
        }
        if !self.directed {
            self.matrix[col][row] = None;
        }
        self.edge_count -= 1;
    }

    fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        let Some(row) = self.slot(vertex) else {
            return Vec::new();
        };

        let mut neighbors: Vec<VertexId> = self.matrix[row]
            .iter()
            .enumerate()
            .filter(|(_, weight)| weight.is_some())
            .filter_map(|(col, _)| self.labels[col])
            .collect();
        neighbors.sort_unstable();
        neighbors
    }

    fn vertices(&self) -> Vec<VertexId> {
        let mut vertices: Vec<VertexId> = self.slots.keys().copied().collect();
        vertices.sort_unstable();
        vertices
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.slots.contains_key(&vertex)
    }

    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.cell(from, to).is_some()
    }

    fn weight(&self, from: VertexId, to: VertexId) -> GraphResult<Weight> {
        self.cell(from, to)
            .ok_or(GraphError::EdgeNotFound { from, to })
    }

    fn vertex_count(&self) -> usize {
        self.slots.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn is_directed(&self) -> bool {
        self.directed
    }
}
