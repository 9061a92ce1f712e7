//! Floyd-Warshall算法模块
//!
//! 包含Floyd-Warshall全源最短路径算法实现
//! 适用于稠密图，时间复杂度O(V^3)

use serde::Serialize;
use std::collections::HashMap;

use crate::core::error::{GraphError, GraphResult};
use crate::core::types::{checked_distance, VertexId, Weight, INFINITY};
use crate::graph::Graph;

/// Floyd-Warshall算法结构体
pub struct FloydWarshall;

/// Floyd-Warshall算法结果
///
/// 矩阵下标与 `vertices` 中的位置一一对应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloydWarshallResult {
    /// 图中所有顶点，按升序排列
    pub vertices: Vec<VertexId>,
    #[serde(skip)]
    index: HashMap<VertexId, usize>,
    /// 距离矩阵，不可达为 [`INFINITY`]
    pub distances: Vec<Vec<Weight>>,
    /// 下一跳矩阵，用于重建路径
    #[serde(skip)]
    next: Vec<Vec<Option<usize>>>,
}

impl FloydWarshallResult {
    fn new(vertices: Vec<VertexId>) -> Self {
        let n = vertices.len();
        let index = vertices
            .iter()
            .enumerate()
            .map(|(position, &vertex)| (vertex, position))
            .collect();

        let mut distances = vec![vec![INFINITY; n]; n];
        let mut next = vec![vec![None; n]; n];
        for i in 0..n {
            distances[i][i] = 0;
            next[i][i] = Some(i);
        }

        Self {
            vertices,
            index,
            distances,
            next,
        }
    }

    fn position(&self, vertex: VertexId) -> GraphResult<usize> {
        self.index
            .get(&vertex)
            .copied()
            .ok_or(GraphError::VertexNotFound(vertex))
    }

    /// 获取从u到v的最短距离，不可达为 [`INFINITY`]，顶点不存在返回 `None`
    pub fn distance(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        let i = self.index.get(&u)?;
        let j = self.index.get(&v)?;
        Some(self.distances[*i][*j])
    }

    pub fn is_reachable(&self, u: VertexId, v: VertexId) -> bool {
        self.distance(u, v)
            .is_some_and(|distance| distance != INFINITY)
    }

    /// 沿下一跳矩阵重建从u到v的最短路径
    pub fn path(&self, u: VertexId, v: VertexId) -> GraphResult<Vec<VertexId>> {
        let i = self.position(u)?;
        let j = self.position(v)?;

        let unreachable = GraphError::TargetUnreachable {
            start: u,
            target: v,
        };
        if self.distances[i][j] == INFINITY {
            return Err(unreachable);
        }

        let mut path = vec![u];
        let mut current = i;
        while current != j {
            current = self.next[current][j].ok_or(unreachable.clone())?;
            path.push(self.vertices[current]);

            if path.len() > self.vertices.len() {
                return Err(GraphError::NegativeCycleDetected);
            }
        }

        Ok(path)
    }

    /// 对角线上出现负值说明存在负权环
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.vertices.len()).any(|i| self.distances[i][i] < 0)
    }

    /// 计算顶点的偏心距（到最远可达顶点的距离）
    pub fn eccentricity(&self, vertex: VertexId) -> Option<Weight> {
        let i = *self.index.get(&vertex)?;
        self.finite_row(i).max()
    }

    /// 获取图的直径（最长最短路径）
    pub fn diameter(&self) -> Option<Weight> {
        (0..self.vertices.len())
            .filter_map(|i| self.finite_row(i).max())
            .max()
    }

    /// 获取图的半径（最小偏心距）
    pub fn radius(&self) -> Option<Weight> {
        self.vertices
            .iter()
            .filter_map(|&vertex| self.eccentricity(vertex))
            .min()
    }

    /// 获取图的中心（偏心距最小的顶点，相同时取编号最小者）
    pub fn center(&self) -> Option<VertexId> {
        self.vertices
            .iter()
            .filter_map(|&vertex| self.eccentricity(vertex).map(|e| (e, vertex)))
            .min()
            .map(|(_, vertex)| vertex)
    }

    fn finite_row(&self, i: usize) -> impl Iterator<Item = Weight> + '_ {
        self.distances[i]
            .iter()
            .enumerate()
            .filter(move |(j, &distance)| *j != i && distance != INFINITY)
            .map(|(_, &distance)| distance)
    }
}

impl FloydWarshall {
    /// 执行Floyd-Warshall算法
    pub fn all_pairs<G: Graph + ?Sized>(graph: &G) -> FloydWarshallResult {
        let mut result = FloydWarshallResult::new(graph.vertices());
        let n = result.vertices.len();
        log::debug!("Floyd-Warshall 顶点数 {}", n);

        // 填充直接边
        for i in 0..n {
            let from = result.vertices[i];
            for (to, weight) in graph.outgoing(from) {
                let Some(&j) = result.index.get(&to) else {
                    continue;
                };
                if i == j {
                    // 只有负权自环会改变对角线
                    if weight < result.distances[i][i] {
                        result.distances[i][i] = weight;
                    }
                } else if weight < result.distances[i][j] {
                    result.distances[i][j] = weight;
                    result.next[i][j] = Some(j);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                if result.distances[i][k] == INFINITY {
                    continue;
                }
                for j in 0..n {
                    if result.distances[k][j] == INFINITY {
                        continue;
                    }
                    let Some(candidate) =
                        checked_distance(result.distances[i][k], result.distances[k][j])
                    else {
                        continue;
                    };
                    if candidate < result.distances[i][j] {
                        result.distances[i][j] = candidate;
                        result.next[i][j] = result.next[i][k];
                    }
                }
            }
        }

        if result.has_negative_cycle() {
            log::debug!("Floyd-Warshall 检测到负权环");
        }

        result
    }
}
