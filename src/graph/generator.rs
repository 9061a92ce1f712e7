//! 随机图生成器
//!
//! 基于固定种子的 `StdRng`，相同种子总是生成相同的图，用于基准测试和性质测试

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Graph;
use crate::core::types::{VertexId, Weight};

/// 随机图生成器
pub struct RandomGraphGenerator {
    rng: StdRng,
    min_weight: Weight,
    max_weight: Weight,
}

impl RandomGraphGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            min_weight: 1,
            max_weight: 100,
        }
    }

    /// 设置权重范围（闭区间），上下界顺序颠倒时自动交换
    pub fn with_weights(mut self, min_weight: Weight, max_weight: Weight) -> Self {
        self.min_weight = min_weight.min(max_weight);
        self.max_weight = min_weight.max(max_weight);
        self
    }

    fn next_weight(&mut self) -> Weight {
        self.rng.gen_range(self.min_weight..=self.max_weight)
    }

    /// 向图中填充 `vertex_count` 个顶点（0..vertex_count）和约 `extra_edges` 条随机边
    ///
    /// 随机边可能与已有边重合（覆盖权重），因此最终边数可能少于请求数
    pub fn fill_random<G: Graph + ?Sized>(
        &mut self,
        graph: &mut G,
        vertex_count: usize,
        extra_edges: usize,
    ) {
        let vertices = Self::labels(vertex_count);
        for &vertex in &vertices {
            graph.add_vertex(vertex);
        }
        if vertices.is_empty() {
            return;
        }

        for _ in 0..extra_edges {
            let from = vertices[self.rng.gen_range(0..vertices.len())];
            let to = vertices[self.rng.gen_range(0..vertices.len())];
            if from == to {
                continue;
            }
            let weight = self.next_weight();
            graph.add_edge(from, to, weight);
        }
    }

    /// 生成连通图：先用随机生成树连接所有顶点，再加入随机边
    ///
    /// 对有向图而言生成树的边从已连接部分指向新顶点，因此顶点 0 可达所有顶点
    pub fn fill_connected<G: Graph + ?Sized>(
        &mut self,
        graph: &mut G,
        vertex_count: usize,
        extra_edges: usize,
    ) {
        let vertices = Self::labels(vertex_count);
        if let Some(&first) = vertices.first() {
            graph.add_vertex(first);
        }

        for index in 1..vertices.len() {
            let parent = vertices[self.rng.gen_range(0..index)];
            let weight = self.next_weight();
            graph.add_edge(parent, vertices[index], weight);
        }

        self.fill_random(graph, vertex_count, extra_edges);
    }

    fn labels(vertex_count: usize) -> Vec<VertexId> {
        (0..vertex_count)
            .filter_map(|index| VertexId::try_from(index).ok())
            .collect()
    }
}
