//! 图表示模块
//!
//! 定义统一的 [`Graph`] 能力接口以及两种可互换的存储后端：
//! - [`AdjacencyListGraph`]：邻接表，适合稀疏图
//! - [`AdjacencyMatrixGraph`]：邻接矩阵，O(1) 边查询，容量在构造时固定
//!
//! 所有算法只依赖 [`Graph`] trait，不接触后端内部结构

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod definition;
pub mod generator;

pub use adjacency_list::AdjacencyListGraph;
pub use adjacency_matrix::AdjacencyMatrixGraph;
pub use definition::{EdgeDefinition, GraphDefinition};
pub use generator::RandomGraphGenerator;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::GraphConfig;
use crate::core::error::GraphResult;
use crate::core::types::{GraphKind, VertexId, Weight};

/// 带权边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(from: VertexId, to: VertexId, weight: Weight) -> Self {
        Self { from, to, weight }
    }

    /// 反向边，权重不变
    pub fn reversed(&self) -> Self {
        Self::new(self.to, self.from, self.weight)
    }

    /// 无向边的规范形式：端点按升序排列
    pub fn normalized(&self) -> Self {
        if self.from <= self.to {
            *self
        } else {
            self.reversed()
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.from, self.to, self.weight)
    }
}

/// 图的统一能力接口
///
/// 无向图中插入 (u, v) 同时存在 (v, u)，两者是同一条逻辑边，
/// `edge_count` 只计一次。调用方在算法遍历期间不得修改图
pub trait Graph {
    /// 添加顶点，已存在时不做任何操作
    fn add_vertex(&mut self, vertex: VertexId);

    /// 添加边，自动创建缺失的端点；边已存在时覆盖权重
    fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Weight);

    /// 删除顶点及其所有关联边，顶点不存在时不做任何操作
    fn remove_vertex(&mut self, vertex: VertexId);

    /// 删除边，无向图同时删除镜像边；边不存在时不做任何操作
    fn remove_edge(&mut self, from: VertexId, to: VertexId);

    /// 邻居顶点，按升序排列；未知顶点或孤立顶点返回空
    fn neighbors(&self, vertex: VertexId) -> Vec<VertexId>;

    /// 所有顶点，按升序排列
    fn vertices(&self) -> Vec<VertexId>;

    fn has_vertex(&self, vertex: VertexId) -> bool;

    fn has_edge(&self, from: VertexId, to: VertexId) -> bool;

    /// 边权重，边不存在时返回 `EdgeNotFound`
    fn weight(&self, from: VertexId, to: VertexId) -> GraphResult<Weight>;

    fn vertex_count(&self) -> usize;

    /// 逻辑边数量
    fn edge_count(&self) -> usize;

    fn is_directed(&self) -> bool;

    fn kind(&self) -> GraphKind {
        GraphKind::from_directed(self.is_directed())
    }

    /// 出边 (邻居, 权重)，按邻居升序排列
    fn outgoing(&self, vertex: VertexId) -> Vec<(VertexId, Weight)> {
        self.neighbors(vertex)
            .into_iter()
            .filter_map(|neighbor| {
                self.weight(vertex, neighbor)
                    .ok()
                    .map(|weight| (neighbor, weight))
            })
            .collect()
    }

    /// 所有逻辑边，每条只出现一次，按 (from, to) 排序
    ///
    /// 无向边以 `from <= to` 的形式给出
    fn edges(&self) -> Vec<Edge> {
        let directed = self.is_directed();
        let mut edges = Vec::with_capacity(self.edge_count());
        for from in self.vertices() {
            for (to, weight) in self.outgoing(from) {
                if directed || from <= to {
                    edges.push(Edge::new(from, to, weight));
                }
            }
        }
        edges
    }
}

/// 存储后端类型
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GraphBackend {
    /// 邻接表
    #[default]
    List,
    /// 邻接矩阵
    Matrix,
}

impl GraphBackend {
    /// 按后端类型创建空图
    pub fn create(self, directed: bool, config: &GraphConfig) -> Box<dyn Graph> {
        match self {
            GraphBackend::List => Box::new(AdjacencyListGraph::new(directed)),
            GraphBackend::Matrix => Box::new(AdjacencyMatrixGraph::new(
                config.matrix_capacity,
                directed,
            )),
        }
    }
}

impl fmt::Display for GraphBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphBackend::List => write!(f, "list"),
            GraphBackend::Matrix => write!(f, "matrix"),
        }
    }
}
